use super::details::RestaurantDetails;
use crate::shared::crud::{admin_table, published_badge, PagedListVm, Column};
use crate::shared::date_utils::format_price_band;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::category_name;
use contracts::domain::a006_restaurant::aggregate::Restaurant;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn RestaurantList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Restaurant>::new(toasts);
    vm.load();
    vm.load_categories();

    let columns: Vec<Column<Restaurant>> = vec![
        Column::new("Nhà hàng", |r, _| view! { <strong>{r.name.clone()}</strong> }.into_any()),
        Column::new("Ẩm thực", |r, _| r.cuisine.clone().into_any()),
        Column::new("Danh mục", |r, cats| category_name(cats, r.category_id).into_any()),
        Column::new("Giá", |r, _| format_price_band(r.min_price, r.max_price).into_any()),
        Column::new("Trạng thái", |r, _| published_badge(r.is_published)),
    ];

    let actions = vm.table_actions(modal_stack, |ctx| view! { <RestaurantDetails ctx=ctx /> }.into_any());
    admin_table(vm, columns, Some(actions))
}
