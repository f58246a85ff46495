use crate::{
    pages::signin::components::form::SignInForm,
    router::{FORGOT_PASSWORD_PATH, SIGNUP_PATH},
};
use leptos::*;
use leptos_meta::Title;

#[component]
pub fn SignInPanel() -> impl IntoView {
    view! {
        <Title text="Entrar" />
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full">
                <h1 class="text-4xl font-semibold text-fg">"Faça login em sua conta"</h1>
                <p class="mt-2 text-sm text-fg-muted/60">"Bem vindo de volta!"</p>

                <SignInForm class="mt-4" />

                <p class="mt-6 text-center text-sm text-fg-muted">
                    "Não tem uma conta? "
                    <a href=SIGNUP_PATH class="text-link duration-200 hover:opacity-70">
                        "Cadastrar-se"
                    </a>
                </p>

                <p class="mt-2.5 text-center">
                    <a
                        href=FORGOT_PASSWORD_PATH
                        class="text-sm text-fg-muted duration-200 hover:opacity-70"
                    >
                        "Esqueceu sua senha?"
                    </a>
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn panel_renders_heading_and_navigation_links() {
        let html = render_to_string(|| view! { <SignInPanel /> });
        assert!(html.contains("Faça login em sua conta"));
        assert!(html.contains("Bem vindo de volta!"));
        assert!(html.contains("href=\"/signup\""));
        assert!(html.contains("Cadastrar-se"));
        assert!(html.contains("href=\"/forgot-password\""));
        assert!(html.contains("Esqueceu sua senha?"));
    }

    #[test]
    fn panel_embeds_sign_in_form() {
        let html = render_to_string(|| view! { <SignInPanel /> });
        assert!(html.contains("<form"));
        assert!(html.contains("Google"));
    }
}
