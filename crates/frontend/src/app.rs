use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    // Вкладки и уведомления живут дольше сессии: AppShell пересоздаётся при входе/выходе
    provide_context(AppGlobalContext::new());
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppShell />
            </AuthProvider>
            <ToastHost />
        </ConfigProvider>
    }
}
