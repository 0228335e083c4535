use super::details::AccommodationDetails;
use crate::shared::crud::{admin_table, published_badge, PagedListVm, Column};
use crate::shared::date_utils::{format_price_band, format_stars};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::category_name;
use contracts::domain::a005_accommodation::aggregate::Accommodation;
use leptos::prelude::*;

fn columns() -> Vec<Column<Accommodation>> {
    vec![
        Column::new("Tên", |a, _| view! { <strong>{a.name.clone()}</strong> }.into_any()),
        Column::new("Danh mục", |a, cats| category_name(cats, a.category_id).into_any()),
        Column::new("Hạng", |a, _| format_stars(a.star_rating).into_any()),
        Column::new("Giá", |a, _| format_price_band(a.min_price, a.max_price).into_any()),
        Column::new("Trạng thái", |a, _| published_badge(a.is_published)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn AccommodationList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Accommodation>::new(toasts);
    vm.load();
    vm.load_categories();

    let actions = vm.table_actions(modal_stack, |ctx| view! { <AccommodationDetails ctx=ctx /> }.into_any());
    admin_table(vm, columns(), Some(actions))
}
