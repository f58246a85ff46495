use leptos::*;
use uuid::Uuid;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DISMISS_MS: u32 = 5_000;

type ToastContext = (ReadSignal<ToastState>, WriteSignal<ToastState>);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: None,
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    pub fn destructive(description: impl Into<String>) -> Self {
        Self::new(description).with_variant(ToastVariant::Destructive)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Newest first; anything past `TOAST_LIMIT` is dropped.
    pub fn push(&mut self, toast: Toast) {
        self.toasts.insert(0, toast);
        self.toasts.truncate(TOAST_LIMIT);
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    provide_context::<ToastContext>(create_signal(ToastState::default()));
    view! { <>{children()}</> }
}

pub fn use_toasts() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(|| create_signal(ToastState::default()))
}

pub fn push_toast(set_state: WriteSignal<ToastState>, toast: Toast) {
    let id = toast.id;
    set_state.update(|state| state.push(toast));
    schedule_dismiss(set_state, id);
}

pub fn dismiss_toast(set_state: WriteSignal<ToastState>, id: Uuid) {
    set_state.update(|state| state.dismiss(id));
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(set_state: WriteSignal<ToastState>, id: Uuid) {
    gloo_timers::callback::Timeout::new(TOAST_DISMISS_MS, move || {
        dismiss_toast(set_state, id);
    })
    .forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_set_state: WriteSignal<ToastState>, _id: Uuid) {}
