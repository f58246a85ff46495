use leptos::*;

pub mod components;
pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SignInPanel;

#[component]
pub fn SignInPage() -> impl IntoView {
    view! { <SignInPanel /> }
}
