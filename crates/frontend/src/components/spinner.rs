//! Loading spinner component

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub text: Option<String>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="text-center p-10">
            <div class="w-12 h-12 border-4 border-blue-500 border-t-transparent rounded-full animate-spin mx-auto mb-4"></div>
            if let Some(text) = &props.text {
                <p class="text-gray-600 dark:text-gray-300 text-sm m-0">{text}</p>
            }
        </div>
    }
}

/// Full-screen state shown while the session is being set up
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gradient-to-br from-slate-50 to-slate-100 dark:from-slate-900 dark:to-slate-800">
            <div class="text-center">
                <h3 class="text-lg font-semibold text-gray-900 dark:text-white mb-2">{"Setting up your account"}</h3>
                <LoadingSpinner text={Some("Please wait while we check your hotel configuration...".to_string())} />
            </div>
        </div>
    }
}
