use super::details::TourDetails;
use crate::shared::crud::{admin_table, published_badge, PagedListVm, Column};
use crate::shared::date_utils::format_vnd;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::category_name;
use contracts::domain::a004_tour::aggregate::Tour;
use leptos::prelude::*;

fn columns() -> Vec<Column<Tour>> {
    vec![
        Column::new("Tour", |t, _| view! { <strong>{t.name.clone()}</strong> }.into_any()),
        Column::new("Danh mục", |t, cats| category_name(cats, t.category_id).into_any()),
        Column::new("Thời lượng", |t, _| format!("{} ngày", t.duration_days).into_any()),
        Column::new("Khởi hành", |t, _| t.departure_point.clone().into_any()),
        Column::new("Giá", |t, _| format_vnd(t.price).into_any()),
        Column::new("Trạng thái", |t, _| published_badge(t.is_published)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn TourList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Tour>::new(toasts);
    vm.load();
    vm.load_categories();

    let actions = vm.table_actions(modal_stack, |ctx| view! { <TourDetails ctx=ctx /> }.into_any());
    admin_table(vm, columns(), Some(actions))
}
