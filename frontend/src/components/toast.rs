use crate::state::toast::{dismiss_toast, use_toasts, Toast, ToastVariant};
use leptos::*;

fn variant_classes(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Default => "bg-surface-elevated border-border text-fg",
        ToastVariant::Destructive => {
            "bg-status-error-bg border-status-error-border text-status-error-text"
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let (_toasts, set_toasts) = use_toasts();
    let id = toast.id;
    view! {
        <li
            role="status"
            class=format!(
                "pointer-events-auto flex w-full items-start justify-between gap-4 rounded-md border p-4 shadow-lg {}",
                variant_classes(toast.variant),
            )
        >
            <div class="grid gap-1">
                {toast.title.map(|title| view! { <div class="text-sm font-semibold">{title}</div> })}
                <div class="text-sm opacity-90">{toast.description}</div>
            </div>
            <button
                type="button"
                aria-label="Fechar"
                class="text-sm opacity-70 hover:opacity-100"
                on:click=move |_| dismiss_toast(set_toasts, id)
            >
                "×"
            </button>
        </li>
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let (toasts, _set_toasts) = use_toasts();
    view! {
        <ol class="fixed top-0 z-50 flex max-h-screen w-full flex-col-reverse gap-2 p-4 sm:bottom-0 sm:right-0 sm:top-auto sm:flex-col md:max-w-[420px]">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| view! { <ToastCard toast=toast /> }
            />
        </ol>
    }
}
