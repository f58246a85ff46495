use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::AuthClient,
    components::toast::Toaster,
    pages::signin::SignInPage,
    state::toast::ToastProvider,
};

pub const SIGNIN_PATH: &str = "/signin";

/// Where a successful sign-in lands.
pub const LOGIN_REDIRECT_PATH: &str = "/documents";
pub const SIGNUP_PATH: &str = "/signup";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(AuthClient::new());
    view! {
        <ToastProvider>
            <Router>
                <Routes>
                    <Route path="/" view=SignInPage/>
                    <Route path=SIGNIN_PATH view=SignInPage/>
                </Routes>
            </Router>
            <Toaster/>
        </ToastProvider>
    }
}
