use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Flex, FlexJustify, Spinner};

/// What the form frame shows in place of the fields
#[derive(Clone, Debug, PartialEq)]
pub enum FormBody {
    Loading,
    Failed(String),
    Ready,
}

/// Fields stay hidden until the record is hydrated; a failed load replaces
/// them for good
pub fn form_body(is_loading: bool, load_error: Option<String>) -> FormBody {
    match load_error {
        Some(e) => FormBody::Failed(e),
        None if is_loading => FormBody::Loading,
        None => FormBody::Ready,
    }
}

/// Frame of an admin create/edit form: header, load state, body and the
/// Save/Cancel footer
#[component]
pub fn FormShell(
    #[prop(into)] title: String,
    #[prop(into)] is_loading: Signal<bool>,
    #[prop(into)] load_error: Signal<Option<String>>,
    #[prop(into)] is_busy: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let body = Memo::new(move |_| form_body(is_loading.get(), load_error.get()));
    let save_disabled = Signal::derive(move || is_busy.get() || body.get() != FormBody::Ready);

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{title}</h3>
            </div>

            <div class="details-form">
                <Show
                    when=move || body.get() == FormBody::Ready
                    fallback=move || {
                        move || match body.get() {
                            FormBody::Failed(e) => view! { <div class="error">{e}</div> }.into_any(),
                            _ => view! { <div class="details-loading"><Spinner /></div> }.into_any(),
                        }
                    }
                >
                    {children()}
                </Show>

                <Flex justify=FlexJustify::End class="details-actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=is_busy
                        on_click=move |_| on_cancel.run(())
                    >
                        "Hủy"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=save_disabled
                        on_click=move |_| on_save.run(())
                    >
                        {icon("save")}
                        {move || if is_busy.get() { " Đang lưu..." } else { " Lưu" }}
                    </Button>
                </Flex>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_hidden_while_loading() {
        assert_eq!(form_body(true, None), FormBody::Loading);
        assert_eq!(form_body(false, None), FormBody::Ready);
    }

    #[test]
    fn test_load_error_replaces_fields() {
        let err = "Không tìm thấy".to_string();
        assert_eq!(form_body(false, Some(err.clone())), FormBody::Failed(err.clone()));
        assert_eq!(form_body(true, Some(err.clone())), FormBody::Failed(err));
    }
}
