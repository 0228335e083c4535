use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

/// Inline two-step confirmation for destructive actions.
///
/// `Idle → Confirming(target) → Busy → Idle`. Only one target can be pending.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConfirmState<T> {
    #[default]
    Idle,
    Confirming(T),
    Busy,
}

impl<T: Clone + PartialEq> ConfirmState<T> {
    /// Ask for confirmation; ignored while an action is running
    pub fn request(&mut self, target: T) {
        if !matches!(self, ConfirmState::Busy) {
            *self = ConfirmState::Confirming(target);
        }
    }

    /// Accept the pending target and switch to `Busy`
    pub fn confirm(&mut self) -> Option<T> {
        match std::mem::replace(self, ConfirmState::Idle) {
            ConfirmState::Confirming(target) => {
                *self = ConfirmState::Busy;
                Some(target)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if let ConfirmState::Confirming(_) = self {
            *self = ConfirmState::Idle;
        }
    }

    /// The action completed, whatever its outcome
    pub fn finish(&mut self) {
        if let ConfirmState::Busy = self {
            *self = ConfirmState::Idle;
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, ConfirmState::Busy)
    }

    pub fn is_pending(&self, target: &T) -> bool {
        matches!(self, ConfirmState::Confirming(t) if t == target)
    }
}

/// "Xóa / Hủy" pair shown in a row that awaits confirmation
#[component]
pub fn ConfirmBar(
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <span class="confirm-bar">
            <span class="confirm-bar__message">{message}</span>
            <Button
                size=thaw::ButtonSize::Small
                appearance=ButtonAppearance::Primary
                class="confirm-bar__danger"
                on_click=move |_| on_confirm.run(())
            >
                "Xóa"
            </Button>
            <Button
                size=thaw::ButtonSize::Small
                appearance=ButtonAppearance::Subtle
                on_click=move |_| on_cancel.run(())
            >
                "Hủy"
            </Button>
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_flow() {
        let mut state = ConfirmState::Idle;
        state.request(7_i64);
        assert!(state.is_pending(&7));

        assert_eq!(state.confirm(), Some(7));
        assert!(state.is_busy());

        state.finish();
        assert_eq!(state, ConfirmState::Idle);
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let mut state = ConfirmState::Idle;
        state.request(3_i64);
        state.cancel();
        assert_eq!(state, ConfirmState::Idle);
        assert_eq!(state.confirm(), None);
    }

    #[test]
    fn test_requests_ignored_while_busy() {
        let mut state = ConfirmState::Idle;
        state.request(1_i64);
        state.confirm();
        state.request(2);
        assert!(state.is_busy());
        assert_eq!(state.confirm(), None);
        assert!(state.is_busy());
    }

    #[test]
    fn test_new_request_replaces_pending() {
        let mut state = ConfirmState::Idle;
        state.request(1_i64);
        state.request(2);
        assert!(!state.is_pending(&1));
        assert!(state.is_pending(&2));
    }
}
