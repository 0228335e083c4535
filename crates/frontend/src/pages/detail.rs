use crate::shared::components::cards::NotFound;
use crate::shared::crud::ReadService;
use contracts::domain::common::EntityId;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use thaw::Spinner;

/// Record behind a public detail page. `record == None` together with an
/// `error` renders the not-found fallback.
pub struct DetailState<E: ReadService> {
    pub record: RwSignal<Option<E>>,
    pub error: RwSignal<Option<String>>,
    pub is_loading: RwSignal<bool>,
}

impl<E: ReadService> Clone for DetailState<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ReadService> Copy for DetailState<E> {}

/// Id of a detail route; anything but a positive integer is rejected
pub fn parse_route_id(raw: Option<String>) -> Option<EntityId> {
    raw?.trim().parse::<EntityId>().ok().filter(|id| *id > 0)
}

/// Load the record named by the `:id` route param, again whenever the param
/// changes
pub fn use_detail<E>() -> DetailState<E>
where
    E: ReadService + Clone + Send + Sync + 'static,
{
    let params = use_params_map();
    let state = DetailState {
        record: RwSignal::new(None),
        error: RwSignal::new(None),
        is_loading: RwSignal::new(true),
    };

    Effect::new(move |_| {
        let id = parse_route_id(params.with(|p| p.get("id")));
        state.record.set(None);
        state.error.set(None);

        let Some(id) = id else {
            state.error.set(Some("Đường dẫn không hợp lệ".to_string()));
            state.is_loading.set(false);
            return;
        };

        state.is_loading.set(true);
        leptos::task::spawn_local(async move {
            match E::get_by_id(id).await {
                Ok(record) => state.record.set(Some(record)),
                Err(e) => {
                    log::warn!("{} #{} not loaded: {}", E::collection_name(), id, e);
                    state.error.set(Some(e.to_string()));
                }
            }
            state.is_loading.set(false);
        });
    });

    state
}

/// Spinner while loading, the not-found fallback on error, `render` once the
/// record is there
pub fn detail_view<E>(
    state: DetailState<E>,
    back_href: &'static str,
    back_label: &'static str,
    render: fn(E) -> AnyView,
) -> impl IntoView
where
    E: ReadService + Clone + Send + Sync + 'static,
{
    move || {
        if state.is_loading.get() {
            return view! { <div class="page-loading"><Spinner /></div> }.into_any();
        }
        match state.record.get() {
            Some(record) => view! {
                <article class="detail-page">
                    <a class="detail-page__back" href=back_href>{format!("← {}", back_label)}</a>
                    {render(record)}
                </article>
            }
            .into_any(),
            None => view! {
                <NotFound
                    message=state.error.get().unwrap_or_default()
                    back_href=back_href
                    back_label=back_label
                />
            }
            .into_any(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_id() {
        assert_eq!(parse_route_id(Some("42".into())), Some(42));
        assert_eq!(parse_route_id(Some("0".into())), None);
        assert_eq!(parse_route_id(Some("-3".into())), None);
        assert_eq!(parse_route_id(Some("ha-long".into())), None);
        assert_eq!(parse_route_id(None), None);
    }
}
