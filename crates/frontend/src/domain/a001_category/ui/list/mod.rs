use super::details::CategoryDetails;
use crate::shared::crud::{admin_table, PagedListVm, Column};
use crate::shared::date_utils::format_opt_datetime;
use crate::shared::modal_stack::ModalStackService;
use crate::shared::toast::ToastService;
use contracts::domain::a001_category::aggregate::Category;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn CategoryList() -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Category>::new(toasts);
    vm.load();

    let columns: Vec<Column<Category>> = vec![
        Column::new("Tên", |c, _| view! { <strong>{c.name.clone()}</strong> }.into_any()),
        Column::new("Slug", |c, _| c.slug.clone().into_any()),
        Column::new("Áp dụng cho", |c, _| {
            c.kind.map(|k| k.label()).unwrap_or("Tất cả").into_any()
        }),
        Column::new("Cập nhật", |c, _| {
            format_opt_datetime(c.metadata.last_modified().as_ref()).into_any()
        }),
    ];

    let actions = vm.table_actions(modal_stack, |ctx| view! { <CategoryDetails ctx=ctx /> }.into_any());
    admin_table(vm, columns, Some(actions))
}
