//! Global authentication context and provider

use crate::client::AdminApi;
use crate::router::RouterNavigator;
use hotel_console_core::{AuthAction, AuthDispatch, AuthState, Session, User};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::Navigator;

/// Yew-side holder of the core auth state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthModel(pub AuthState);

impl Reducible for AuthModel {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.reduce(action)))
    }
}

/// Authentication context: reducer handle plus the session collaborators
#[derive(Clone)]
pub struct AuthContext {
    store: UseReducerHandle<AuthModel>,
    session: Rc<Session>,
    api: AdminApi,
}

impl PartialEq for AuthContext {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
            && Rc::ptr_eq(&self.session, &other.session)
            && self.api == other.api
    }
}

impl AuthDispatch for AuthContext {
    fn dispatch(&self, action: AuthAction) {
        self.store.dispatch(action);
    }
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.store.0.is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.store.0.is_loading
    }

    pub fn current_user(&self) -> Option<&User> {
        self.store.0.current_user.as_ref()
    }

    pub const fn api(&self) -> &AdminApi {
        &self.api
    }

    /// Run the login flow in the background; it ends with a navigation
    pub fn login(&self, user: User, navigator: Navigator) {
        let ctx = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let navigator = RouterNavigator::new(navigator);
            ctx.session.handle_login(user, &ctx, &navigator).await;
        });
    }

    pub fn logout(&self, navigator: Navigator) {
        self.session
            .handle_logout(self, &RouterNavigator::new(navigator));
    }
}

/// Auth provider props
#[derive(Properties)]
pub struct AuthProviderProps {
    pub session: Rc<Session>,
    pub api: AdminApi,
    pub children: Children,
}

impl PartialEq for AuthProviderProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session)
            && self.api == other.api
            && self.children == other.children
    }
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let store = use_reducer(AuthModel::default);
    let context = AuthContext {
        store,
        session: props.session.clone(),
        api: props.api.clone(),
    };

    // Wipe any persisted session before the first route renders
    {
        let context = context.clone();
        use_effect_with((), move |_| {
            context.session.bootstrap(&context);
        });
    }

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use auth context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    use_auth().is_authenticated()
}
