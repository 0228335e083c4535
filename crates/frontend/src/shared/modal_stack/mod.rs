use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>;
type CloseGuard = Arc<dyn Fn() -> bool + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    modal_class: Option<String>,
    can_close: Option<CloseGuard>,
}

/// Lets a modal close itself from its own event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    id: u64,
    svc: ModalStackService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.id);
    }
}

/// Stack of modals rendered by `ModalHost`.
///
/// Admin forms and the media picker open here; the picker stacks on top of
/// the form that opened it. Escape closes only the topmost modal.
#[derive(Clone, Copy)]
pub struct ModalStackService {
    stack: RwSignal<Vec<ModalEntry>>,
    next_id: RwSignal<u64>,
}

impl ModalStackService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn is_open(&self) -> bool {
        self.stack.with(|s| !s.is_empty())
    }

    /// Open a modal; `builder` receives the handle that closes it
    pub fn push<F>(&self, modal_class: Option<&str>, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        self.push_entry(modal_class, None, Arc::new(builder))
    }

    /// Like `push`, but overlay clicks and Escape only close the modal while
    /// `can_close` returns true
    pub fn push_guarded<F, G>(&self, modal_class: Option<&str>, can_close: G, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
        G: Fn() -> bool + Send + Sync + 'static,
    {
        self.push_entry(modal_class, Some(Arc::new(can_close)), Arc::new(builder))
    }

    fn push_entry(
        &self,
        modal_class: Option<&str>,
        can_close: Option<CloseGuard>,
        builder: ModalBuilder,
    ) -> ModalHandle {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.stack.update(|s| {
            s.push(ModalEntry {
                id,
                builder,
                modal_class: modal_class.map(str::to_string),
                can_close,
            })
        });

        ModalHandle { id, svc: *self }
    }

    pub fn close(&self, id: u64) {
        self.stack.update(|s| s.retain(|e| e.id != id));
    }

    /// Close on the next tick, so the DOM node that dispatched the current
    /// event is not removed while its handler still runs
    pub fn close_deferred(&self, id: u64) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close(id);
        });
    }

    fn close_top_if_allowed(&self) {
        let top = self
            .stack
            .with_untracked(|s| s.last().map(|e| (e.id, e.can_close.clone())));
        if let Some((id, guard)) = top {
            if guard.map(|f| f()).unwrap_or(true) {
                self.close_deferred(id);
            }
        }
    }
}

impl Default for ModalStackService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal stack at the application root. Mounted once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalStackService>()
        .expect("ModalStackService not provided in context (provide it in app root)");

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                if key.key() == "Escape" {
                    svc.close_top_if_allowed();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // Lives as long as the app
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            <For
                each={move || svc.stack.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(_, entry)| entry.id
                children=move |(depth, entry)| {
                    let id = entry.id;
                    let guard = entry.can_close.clone();
                    let on_overlay = Callback::new(move |_| {
                        if guard.as_ref().map(|f| f()).unwrap_or(true) {
                            svc.close_deferred(id);
                        }
                    });
                    let content = (entry.builder)(ModalHandle { id, svc });

                    view! {
                        <ModalFrame
                            z_index=1000 + depth as i32
                            modal_class=entry.modal_class.clone().unwrap_or_default()
                            on_overlay=on_overlay
                        >
                            {content}
                        </ModalFrame>
                    }
                }
            />
        </Show>
    }
}

/// Overlay plus surface. Closes only when both press and release happen on
/// the overlay itself, so selecting text inside the modal never closes it.
#[component]
fn ModalFrame(
    z_index: i32,
    modal_class: String,
    on_overlay: Callback<()>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    let is_overlay_target = |ev: &ev::MouseEvent| match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    };

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=move |ev| pressed_on_overlay.set(is_overlay_target(&ev))
            on:click=move |ev| {
                let close = pressed_on_overlay.get_untracked() && is_overlay_target(&ev);
                pressed_on_overlay.set(false);
                if close {
                    on_overlay.run(());
                }
            }
        >
            <div class=format!("modal {modal_class}") on:click=|ev| ev.stop_propagation()>
                {children()}
            </div>
        </div>
    }
}
