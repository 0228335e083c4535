use crate::shared::config::config;
use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn css_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast toast--info",
            ToastLevel::Success => "toast toast--success",
            ToastLevel::Warning => "toast toast--warning",
            ToastLevel::Error => "toast toast--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            ToastLevel::Info => "info",
            ToastLevel::Success => "check",
            ToastLevel::Warning | ToastLevel::Error => "alert",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    /// Sticky toasts stay until dismissed by hand
    pub sticky: bool,
}

/// Application-wide notification queue.
///
/// Provided once at the app root; HTTP failures and form outcomes are
/// reported through it.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    /// Show a message; non-sticky toasts disappear after `toasts.timeout_ms`
    pub fn push(&self, level: ToastLevel, message: impl Into<String>, sticky: bool) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|list| {
            list.push(Toast {
                id,
                level,
                message: message.into(),
                sticky,
            })
        });

        if !sticky {
            let svc = *self;
            let timeout = config().toasts.timeout_ms;
            spawn_local(async move {
                TimeoutFuture::new(timeout).await;
                svc.dismiss(id);
            });
        }

        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Info, message, false)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Success, message, false)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Warning, message, false)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastLevel::Error, message, false)
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    pub fn clear(&self) {
        self.toasts.set(Vec::new());
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the toast queue in the bottom-right corner. Mounted once.
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>()
        .expect("ToastService not provided in context (provide it in app root)");

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <Show when=move || svc.toasts.with(|list| list.len() > 1)>
                <button class="toast-stack__clear" on:click=move |_| svc.clear()>
                    "Đóng tất cả"
                </button>
            </Show>
            <For
                each=move || svc.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.level.css_class()>
                            <span class="toast__icon">{icon(toast.level.icon_name())}</span>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Đóng"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
