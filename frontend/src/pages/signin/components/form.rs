use crate::{
    components::common::{Button, ButtonSize, ButtonVariant},
    pages::signin::{
        components::messages::FieldErrorMessage,
        utils::{PASSWORD_MAX_LENGTH, PASSWORD_MIN_LENGTH},
        view_model::use_sign_in_view_model,
    },
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASSES: &str = "appearance-none relative block w-full mt-2 px-3 py-2 rounded-md border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus focus:border-action-primary-border sm:text-sm disabled:opacity-50";

#[component]
fn EyeIcon(#[prop(into)] open: Signal<bool>) -> impl IntoView {
    view! {
        <svg
            class="h-5 w-5 text-fg-muted"
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            aria-hidden="true"
        >
            <path d="M2 12s3-7 10-7 10 7 10 7-3 7-10 7-10-7-10-7Z"></path>
            <circle cx="12" cy="12" r="3"></circle>
            <Show when=move || !open.get() fallback=|| ()>
                <line x1="2" y1="2" x2="22" y2="22"></line>
            </Show>
        </svg>
    }
}

#[component]
pub fn SignInForm(#[prop(optional, into)] class: String) -> impl IntoView {
    let vm = use_sign_in_view_model();
    let email = vm.form.email;
    let password = vm.form.password;
    let field_errors = vm.field_errors;
    let show_password = vm.show_password;
    let submitting = vm.submitting();

    let email_error = Signal::derive(move || field_errors.get().email);
    let password_error = Signal::derive(move || field_errors.get().password);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class=format!("flex w-full flex-col gap-y-4 {}", class) on:submit=on_submit novalidate>
            <div>
                <label for="email" class="text-sm font-medium text-fg-muted">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    class=INPUT_CLASSES
                    prop:value=email
                    disabled=move || submitting.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        vm.revalidate();
                    }
                />
                <FieldErrorMessage error=email_error />
            </div>

            <div>
                <label for="password" class="text-sm font-medium text-fg-muted">
                    <span>"Senha"</span>
                </label>
                <div class="relative">
                    <input
                        id="password"
                        name="password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        minlength=PASSWORD_MIN_LENGTH
                        maxlength=PASSWORD_MAX_LENGTH
                        autocomplete="current-password"
                        class=format!("{} pr-10", INPUT_CLASSES)
                        prop:value=password
                        disabled=move || submitting.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            vm.revalidate();
                        }
                    />
                    <Button
                        variant=ButtonVariant::Link
                        button_type="button"
                        class="absolute right-0 top-0 h-full pr-3"
                        attr:aria-label=move || {
                            if show_password.get() { "Mask password" } else { "Reveal password" }
                        }
                        on:click=move |_| vm.toggle_password_visibility()
                    >
                        <EyeIcon open=show_password />
                    </Button>
                </div>
                <FieldErrorMessage error=password_error />
            </div>

            <Button size=ButtonSize::Large loading=submitting disabled=submitting>
                {move || if submitting.get() { "Entrando..." } else { "Entrar" }}
            </Button>

            <div class="relative flex items-center justify-center gap-x-4 py-2 text-xs uppercase">
                <div class="h-px flex-1 bg-border"></div>
                <span class="bg-transparent text-fg-muted">"OU CONTINUAR COM"</span>
                <div class="h-px flex-1 bg-border"></div>
            </div>

            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Large
                button_type="button"
                disabled=submitting
                on:click=move |_| vm.sign_in_with_google()
            >
                <span class="mr-2 font-bold" aria-hidden="true">"G"</span>
                "Google"
            </Button>
        </form>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::{count_occurrences, render_to_string};

    #[test]
    fn form_renders_fields_and_both_actions() {
        let html = render_to_string(|| view! { <SignInForm /> });
        assert!(html.contains("id=\"email\""));
        assert!(html.contains("id=\"password\""));
        assert!(html.contains("type=\"password\""));
        assert!(html.contains("autocomplete=\"current-password\""));
        assert!(html.contains("minlength=\"6\""));
        assert!(html.contains("maxlength=\"72\""));
        assert!(html.contains("Entrar"));
        assert!(html.contains("OU CONTINUAR COM"));
        assert!(html.contains("Google"));
        assert!(html.contains("Reveal password"));
    }

    #[test]
    fn form_starts_without_field_errors() {
        let html = render_to_string(|| view! { <SignInForm /> });
        assert_eq!(count_occurrences(&html, "role=\"alert\""), 0);
        assert!(!html.contains("Entrando..."));
    }

    #[test]
    fn form_applies_extra_classes() {
        let html = render_to_string(|| view! { <SignInForm class="mt-4" /> });
        assert!(html.contains("gap-y-4 mt-4"));
    }
}
