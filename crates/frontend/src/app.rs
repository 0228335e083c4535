use crate::routes::routes::AppRoutes;
use crate::shared::http;
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Toasts first: the HTTP interceptor reports through them
    let toasts = ToastService::new();
    provide_context(toasts);
    http::install_interceptor(toasts);

    // Create/edit forms and the media picker open as stacked modals
    provide_context(ModalStackService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
            <ModalHost />
            <ToastHost />
        </ConfigProvider>
    }
}
