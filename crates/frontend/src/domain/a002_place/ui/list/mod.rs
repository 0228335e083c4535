use super::details::PlaceDetails;
use crate::shared::crud::{admin_table, published_badge, PagedListVm, Column};
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::category_name;
use contracts::domain::a002_place::aggregate::Place;
use contracts::domain::common::Illustrated;
use leptos::prelude::*;

fn columns() -> Vec<Column<Place>> {
    vec![
        Column::new("Ảnh", |p, _| match p.cover_url() {
            Some(url) => view! { <img class="admin-thumb" src=url.to_string() alt="" /> }.into_any(),
            None => "—".into_any(),
        }),
        Column::new("Tên", |p, _| view! { <strong>{p.name.clone()}</strong> }.into_any()),
        Column::new("Danh mục", |p, cats| category_name(cats, p.category_id).into_any()),
        Column::new("Địa chỉ", |p, _| p.address.clone().into_any()),
        Column::new("Trạng thái", |p, _| published_badge(p.is_published)),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn PlaceList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Place>::new(toasts);
    vm.load();
    vm.load_categories();

    let actions = vm.table_actions(modal_stack, |ctx| view! { <PlaceDetails ctx=ctx /> }.into_any());
    admin_table(vm, columns(), Some(actions))
}
