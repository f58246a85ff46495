#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::toast::ToastState;
    use leptos::*;

    pub const VALID_EMAIL: &str = "alice@example.com";
    pub const VALID_PASSWORD: &str = "correct-horse";

    pub fn provide_toasts() -> (ReadSignal<ToastState>, WriteSignal<ToastState>) {
        let (toasts, set_toasts) = create_signal(ToastState::default());
        provide_context((toasts, set_toasts));
        (toasts, set_toasts)
    }
}
