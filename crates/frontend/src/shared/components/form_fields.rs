//! Labelled inputs bound to a draft field through a getter and a setter.
use crate::domain::a002_place::api as place_api;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::a002_place::aggregate::Place;
use contracts::domain::common::EntityId;
use leptos::prelude::*;

fn label_text(label: &str, required: bool) -> String {
    if required {
        format!("{} *", label)
    } else {
        label.to_string()
    }
}

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label_text(&label, required)}</label>
            <input
                class="form__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] rows: Option<u32>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label_text(&label, required)}</label>
            <textarea
                class="form__textarea"
                rows=rows.unwrap_or(4).to_string()
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Numeric input; text that does not parse is reported as `None`
#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<f64>>,
    on_input: Callback<Option<f64>>,
    #[prop(optional, into)] step: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label_text(&label, required)}</label>
            <input
                class="form__input"
                type="number"
                step=step.unwrap_or_else(|| "any".to_string())
                prop:value=move || value.get().map(|v| v.to_string()).unwrap_or_default()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev).trim().parse::<f64>().ok())
            />
        </div>
    }
}

#[component]
pub fn CheckboxField(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="form__checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// `<input type="datetime-local">` bound to a UTC timestamp
#[component]
pub fn DateTimeField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<Option<chrono::DateTime<chrono::Utc>>>,
    on_change: Callback<Option<chrono::DateTime<chrono::Utc>>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    use crate::shared::date_utils::{from_input_value, to_input_value};

    view! {
        <div class="form__group">
            <label class="form__label">{label_text(&label, required)}</label>
            <input
                class="form__input"
                type="datetime-local"
                prop:value=move || to_input_value(value.get().as_ref())
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(from_input_value(&event_target_value(&ev)))
            />
        </div>
    }
}

/// Parse a `<select>` value holding an id; the empty option is `None`
pub fn parse_id(raw: &str) -> Option<EntityId> {
    raw.trim().parse().ok()
}

/// Text of an optional field; blank input clears it
pub fn optional_text(raw: String) -> Option<String> {
    if raw.trim().is_empty() {
        None
    } else {
        Some(raw)
    }
}

fn id_value(id: Option<EntityId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Category select fed by the form's already loaded options
#[component]
pub fn CategorySelect(
    #[prop(into)] categories: Signal<Vec<Category>>,
    #[prop(into)] value: Signal<Option<EntityId>>,
    on_change: Callback<Option<EntityId>>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label_text("Danh mục", required)}</label>
            <select
                class="form__select"
                prop:value=move || id_value(value.get())
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(parse_id(&event_target_value(&ev)))
            >
                <option value="">"— Chọn danh mục —"</option>
                {move || {
                    let selected = value.get();
                    categories
                        .get()
                        .into_iter()
                        .map(|c| view! {
                            <option value=c.id.to_string() selected=selected == Some(c.id)>{c.name}</option>
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Place select; loads its own options when mounted
#[component]
pub fn PlaceSelect(
    #[prop(into)] value: Signal<Option<EntityId>>,
    on_change: Callback<Option<EntityId>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let places = RwSignal::new(Vec::<Place>::new());
    wasm_bindgen_futures::spawn_local(async move {
        if let Ok(list) = place_api::list_all(false).await {
            places.set(list);
        }
    });

    view! {
        <div class="form__group">
            <label class="form__label">"Địa điểm liên quan"</label>
            <select
                class="form__select"
                prop:value=move || id_value(value.get())
                disabled=move || disabled.get()
                on:change=move |ev| on_change.run(parse_id(&event_target_value(&ev)))
            >
                <option value="">"— Không chọn —"</option>
                {move || {
                    let selected = value.get();
                    places
                        .get()
                        .into_iter()
                        .map(|p| view! {
                            <option value=p.id.to_string() selected=selected == Some(p.id)>{p.name}</option>
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12"), Some(12));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(id_value(None), "");
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("  ".into()), None);
        assert_eq!(optional_text("0905 123 456".into()), Some("0905 123 456".to_string()));
    }

    #[test]
    fn test_required_label() {
        assert_eq!(label_text("Tên", true), "Tên *");
        assert_eq!(label_text("Ghi chú", false), "Ghi chú");
    }
}
