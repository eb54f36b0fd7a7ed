//! Sign-in screen

use crate::auth::use_auth;
use crate::components::LoadingSpinner;
use crate::services::AuthApiService;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(SignIn)]
pub fn sign_in() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| Option::<String>::None);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let email = email.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(navigator) = navigator.clone() else {
                return;
            };

            let auth = auth.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let email = (*email).clone();
            let password = (*password).clone();

            submitting.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let service = AuthApiService::new(auth.api().clone());
                match service.sign_in(email, password).await {
                    Ok(user) => {
                        submitting.set(false);
                        auth.login(user, navigator);
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Sign-in rejected");
                        error.set(Some(e.to_string()));
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let can_submit = !email.is_empty() && !password.is_empty() && !*submitting;

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-50 to-slate-100 dark:from-slate-900 dark:to-slate-800 flex items-center justify-center px-4">
            <form class="max-w-md w-full bg-white dark:bg-gray-800 rounded-2xl shadow-xl p-8 space-y-4" onsubmit={on_submit}>
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white text-center">{"Hotel Console"}</h1>
                <p class="text-sm text-gray-500 dark:text-gray-400 text-center">{"Sign in to manage your hotel"}</p>

                if let Some(message) = (*error).clone() {
                    <div class="bg-red-50 dark:bg-red-900/20 border border-red-200 dark:border-red-800 rounded-lg p-3 text-sm text-red-700 dark:text-red-300">
                        {message}
                    </div>
                }

                <input
                    type="email"
                    class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                    placeholder="Email"
                    value={(*email).clone()}
                    oninput={on_email_input}
                />
                <input
                    type="password"
                    class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                />

                if *submitting {
                    <LoadingSpinner text={Some("Signing in...".to_string())} />
                } else {
                    <button
                        type="submit"
                        class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={!can_submit}
                    >
                        {"Sign in"}
                    </button>
                }
            </form>
        </div>
    }
}
