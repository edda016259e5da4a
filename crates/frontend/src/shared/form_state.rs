//! Состояние модальной формы создания / редактирования.
//!
//! Submit runs synchronous validation first; only a valid DTO reaches the
//! API. On failure the form stays open with its values, server field errors
//! are merged into the inline ones and a toast is shown.

use contracts::shared::api::ApiError;
use contracts::shared::notification::ToastCategory;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::components::form_field::field_error;
use crate::shared::toast::{use_toast, ToastService};
use crate::system::auth::context::{expire_session, use_auth, AuthState};

pub struct FormState<D: Send + Sync + 'static> {
    pub form: RwSignal<D>,
    pub errors: RwSignal<FieldErrors>,
    pub saving: RwSignal<bool>,
    category: ToastCategory,
    toasts: ToastService,
    set_auth_state: WriteSignal<AuthState>,
}

impl<D: Send + Sync + 'static> Clone for FormState<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Send + Sync + 'static> Copy for FormState<D> {}

impl<D: Clone + Send + Sync + 'static> FormState<D> {
    pub fn new(initial: D, category: ToastCategory) -> Self {
        let (_, set_auth_state) = use_auth();
        Self {
            form: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
            saving: RwSignal::new(false),
            category,
            toasts: use_toast(),
            set_auth_state,
        }
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        field_error(self.errors, field)
    }

    /// Edit one field and drop its stale error
    pub fn update(&self, field: &str, change: impl FnOnce(&mut D)) {
        self.form.update(change);
        self.errors.update(|e| e.remove(field));
    }

    /// validate → send → toast. `on_saved` runs only after success.
    pub fn submit<V, S, Fut>(&self, validate: V, send: S, success_message: String, on_saved: Callback<()>)
    where
        V: FnOnce(&D) -> Result<(), FieldErrors>,
        S: FnOnce(D) -> Fut,
        Fut: Future<Output = Result<(), ApiError>> + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked();
        if let Err(errors) = validate(&dto) {
            log::debug!("Form rejected: {} invalid field(s)", errors.len());
            self.errors.set(errors);
            return;
        }
        self.errors.set(FieldErrors::new());
        self.saving.set(true);

        let this = *self;
        let request = send(dto);
        spawn_local(async move {
            let result = request.await;
            if this.saving.try_set(false).is_some() {
                // Модалка уже закрыта
                return;
            }
            match result {
                Ok(()) => {
                    this.toasts.success(this.category, success_message);
                    on_saved.run(());
                }
                Err(err) => {
                    if !err.field_errors.is_empty() {
                        this.errors.update(|e| e.merge(&err.field_errors));
                    }
                    this.toasts.report(this.category, "Save failed", &err);
                    if err.is_authentication() {
                        expire_session(this.set_auth_state);
                    }
                }
            }
        });
    }
}

/// Empty input clears an optional field
pub fn optional_text(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Режим модальной формы
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode<T> {
    Create,
    Edit(T),
}

impl<T> FormMode<T> {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("   ".to_string()), None);
        assert_eq!(optional_text("a@b.io".to_string()), Some("a@b.io".to_string()));
    }
}
