use crate::shared::crud::{admin_table, PagedListVm, Column};
use crate::shared::toast::ToastService;
use contracts::domain::a007_media::aggregate::Media;
use leptos::prelude::*;

/// Media library tab. Read-only: no create, edit or delete.
#[component]
#[allow(non_snake_case)]
pub fn MediaList() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not found in context");
    let vm = PagedListVm::<Media>::new(toasts);
    vm.load();

    let columns: Vec<Column<Media>> = vec![
        Column::new("Ảnh", |m, _| {
            view! {
                <a href=m.url.clone() target="_blank" rel="noopener">
                    <img class="admin-thumb" src=m.url.clone() alt=m.alt_text.clone().unwrap_or_default() />
                </a>
            }
            .into_any()
        }),
        Column::new("Tên tệp", |m, _| m.file_name.clone().into_any()),
        Column::new("Định dạng", |m, _| m.mime_type.clone().unwrap_or_else(|| "—".into()).into_any()),
        Column::new("Kích thước", |m, _| m.dimensions().unwrap_or_else(|| "—".into()).into_any()),
        Column::new("Chú thích", |m, _| m.caption.clone().unwrap_or_default().into_any()),
    ];

    admin_table(vm, columns, None)
}
