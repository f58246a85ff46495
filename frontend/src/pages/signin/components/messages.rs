use leptos::*;

#[component]
pub fn FieldErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <p role="alert" class="mt-1.5 text-xs text-status-error-text">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_message_when_present() {
        let html = render_to_string(|| {
            let error = create_rw_signal(Some("Endereço de e-mail inválido".to_string()));
            view! { <FieldErrorMessage error=error /> }
        });
        assert!(html.contains("Endereço de e-mail inválido"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn renders_nothing_without_error() {
        let html = render_to_string(|| {
            let error = create_rw_signal(None::<String>);
            view! { <FieldErrorMessage error=error /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
