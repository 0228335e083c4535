use super::details::EventDetails;
use crate::shared::crud::{admin_table, published_badge, PagedListVm, Column};
use crate::shared::date_utils::format_span;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::category_name;
use contracts::domain::a003_event::aggregate::Event;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn EventList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Event>::new(toasts);
    vm.load();
    vm.load_categories();

    let columns = vec![
        Column::new("Sự kiện", |e: &Event, _| view! { <strong>{e.title.clone()}</strong> }.into_any()),
        Column::new("Thời gian", |e: &Event, _| {
            format_span(e.start_time.as_ref(), e.end_time.as_ref()).into_any()
        }),
        Column::new("Nơi tổ chức", |e: &Event, _| e.location.clone().into_any()),
        Column::new("Danh mục", |e: &Event, cats| category_name(cats, e.category_id).into_any()),
        Column::new("Trạng thái", |e: &Event, _| published_badge(e.is_published)),
    ];

    let actions = vm.table_actions(modal_stack, |ctx| view! { <EventDetails ctx=ctx /> }.into_any());
    admin_table(vm, columns, Some(actions))
}
