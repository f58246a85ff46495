use super::repository::SignInRepository;
use super::utils::{
    interpret, interpret_federated, unknown_error_toast, Credentials, FieldErrors,
    SignInFormState, SubmitEffect,
};
use crate::{
    api::AuthClient,
    state::toast::{push_toast, use_toasts, ToastState, ToastVariant},
    utils::navigation,
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct SignInViewModel {
    pub form: SignInFormState,
    pub field_errors: RwSignal<FieldErrors>,
    pub show_password: RwSignal<bool>,
    pub attempted: RwSignal<bool>,
    pub credentials_action: Action<Credentials, SubmitEffect>,
    pub google_action: Action<(), SubmitEffect>,
}

impl SignInViewModel {
    /// True while a credential submit is in flight.
    pub fn submitting(&self) -> Signal<bool> {
        self.credentials_action.pending().into()
    }

    /// Validates and dispatches the credential flow. Returns whether a request
    /// was dispatched.
    pub fn submit(&self) -> bool {
        if self.credentials_action.pending().get_untracked() {
            return false;
        }
        self.attempted.set(true);
        match self.form.validate() {
            Ok(credentials) => {
                self.field_errors.set(FieldErrors::default());
                log::info!("Dispatching credential sign-in");
                self.credentials_action.dispatch(credentials);
                true
            }
            Err(errors) => {
                self.field_errors.set(errors);
                false
            }
        }
    }

    /// After the first submit attempt, field errors follow the inputs.
    pub fn revalidate(&self) {
        if !self.attempted.get_untracked() {
            return;
        }
        let errors = self.form.validate().err().unwrap_or_default();
        self.field_errors.set(errors);
    }

    pub fn sign_in_with_google(&self) {
        log::info!("Dispatching Google sign-in");
        self.google_action.dispatch(());
    }

    pub fn toggle_password_visibility(&self) {
        self.show_password.update(|visible| *visible = !*visible);
    }
}

fn apply_effect(effect: SubmitEffect, set_toasts: WriteSignal<ToastState>) {
    match effect {
        SubmitEffect::Navigate(url) => {
            if let Err(err) = navigation::navigate_to(&url) {
                log::error!("{}", err);
                push_toast(set_toasts, unknown_error_toast(ToastVariant::Default));
            }
        }
        SubmitEffect::Notify(toast) => push_toast(set_toasts, toast),
    }
}

pub fn use_sign_in_view_model() -> SignInViewModel {
    let api = use_context::<AuthClient>().unwrap_or_else(AuthClient::new);
    let repository = SignInRepository::new_with_client(Rc::new(api));
    let (_toasts, set_toasts) = use_toasts();

    let form = SignInFormState::default();
    let field_errors = create_rw_signal(FieldErrors::default());
    let show_password = create_rw_signal(false);
    let attempted = create_rw_signal(false);

    let repo_for_credentials = repository.clone();
    let credentials_action = create_action(move |credentials: &Credentials| {
        let repo = repo_for_credentials.clone();
        let credentials = credentials.clone();
        async move { interpret(repo.sign_in_with_credentials(credentials).await) }
    });

    let repo_for_google = repository;
    let google_action = create_action(move |_: &()| {
        let repo = repo_for_google.clone();
        async move { interpret_federated(repo.sign_in_with_google().await) }
    });

    create_effect(move |_| {
        if let Some(effect) = credentials_action.value().get() {
            apply_effect(effect, set_toasts);
        }
    });

    create_effect(move |_| {
        if let Some(effect) = google_action.value().get() {
            apply_effect(effect, set_toasts);
        }
    });

    SignInViewModel {
        form,
        field_errors,
        show_password,
        attempted,
        credentials_action,
        google_action,
    }
}
