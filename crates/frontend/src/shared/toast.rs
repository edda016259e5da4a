use contracts::shared::api::ApiError;
use contracts::shared::notification::{ToastCategory, ToastIntent};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Время жизни уведомления, мс
const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub category: ToastCategory,
    pub intent: ToastIntent,
    pub message: String,
}

/// Сервис уведомлений (toast), fire-and-forget
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Показать уведомление; исчезает само через 4 секунды
    pub fn push(&self, category: ToastCategory, intent: ToastIntent, message: impl Into<String>) {
        let toast = Toast {
            id: uuid::Uuid::new_v4().to_string(),
            category,
            intent,
            message: message.into(),
        };
        let id = toast.id.clone();
        self.toasts.update(|list| list.push(toast));

        let service = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            service.dismiss(&id);
        });
    }

    pub fn success(&self, category: ToastCategory, message: impl Into<String>) {
        self.push(category, ToastIntent::Success, message);
    }

    pub fn info(&self, category: ToastCategory, message: impl Into<String>) {
        self.push(category, ToastIntent::Info, message);
    }

    pub fn warning(&self, category: ToastCategory, message: impl Into<String>) {
        self.push(category, ToastIntent::Warning, message);
    }

    pub fn error(&self, category: ToastCategory, message: impl Into<String>) {
        self.push(category, ToastIntent::Error, message);
    }

    /// Log an API failure and show it under its category.
    pub fn report(&self, fallback: ToastCategory, context: &str, err: &ApiError) {
        log::error!("{}: {:?} {}", context, err.kind, err.message);
        self.error(err.toast_category(fallback), err.message.clone());
    }

    pub fn dismiss(&self, id: &str) {
        // Может быть уже удалено: host не переживает logout
        let _ = self.toasts.try_update(|list| list.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts.into()
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Контейнер уведомлений (правый верхний угол)
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toast();
    let toasts = service.toasts();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    view! {
                        <div class=format!("toast {}", toast.intent.css_modifier())>
                            <div class="toast__title">{toast.category.title()}</div>
                            <div class="toast__message">{toast.message.clone()}</div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| service.dismiss(&id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
