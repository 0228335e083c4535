use super::{PagedListVm, ReadService};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::confirm::ConfirmBar;
use crate::shared::icons::icon;
use crate::shared::list_utils::SubmitSearch;
use contracts::domain::a001_category::aggregate::Category;
use contracts::domain::common::{EntityId, Resource};
use leptos::prelude::*;
use thaw::{
    Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Flex, FlexAlign, FlexJustify,
    Spinner, Table, TableBody, TableCell, TableCellLayout, TableHeader, TableHeaderCell, TableRow,
};

/// One table column: header text and a cell renderer
pub struct Column<E> {
    pub header: &'static str,
    pub render: fn(&E, &[Category]) -> AnyView,
}

impl<E> Column<E> {
    pub fn new(header: &'static str, render: fn(&E, &[Category]) -> AnyView) -> Self {
        Self { header, render }
    }
}

/// Row and toolbar actions of an editable tab. Read-only tabs pass `None`.
#[derive(Clone, Copy)]
pub struct TableActions {
    pub on_create: Callback<()>,
    pub on_edit: Callback<EntityId>,
    pub on_confirm_delete: Callback<()>,
}

/// Publication state cell shared by the content tabs
pub fn published_badge(is_published: bool) -> AnyView {
    if is_published {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Đã đăng"</Badge> }.into_any()
    } else {
        view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Nháp"</Badge> }.into_any()
    }
}

/// Toolbar, table and pagination of an admin tab
pub fn admin_table<E: ReadService>(
    vm: PagedListVm<E>,
    columns: Vec<Column<E>>,
    actions: Option<TableActions>,
) -> impl IntoView {
    let columns = StoredValue::new(columns);
    let search = Signal::derive(move || vm.state.with(|s| s.search.clone()));

    view! {
        <div class="admin-list">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center class="admin-list__toolbar">
                <h2 class="admin-list__title">{E::list_name()}</h2>
                <Flex align=FlexAlign::Center>
                    <SubmitSearch
                        value=search
                        on_submit=Callback::new(move |text: String| vm.set_search(text))
                    />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || vm.state.with(|s| s.is_loading))
                        on_click=move |_| vm.load()
                    >
                        {icon("refresh")}
                        " Tải lại"
                    </Button>
                    {actions.map(|a| view! {
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| a.on_create.run(())>
                            {icon("plus")}
                            " Thêm mới"
                        </Button>
                    })}
                </Flex>
            </Flex>

            <Show
                when=move || vm.state.with(|s| s.is_loaded || !s.is_loading)
                fallback=|| view! { <div class="admin-list__loading"><Spinner /></div> }
            >
                <Show
                    when=move || vm.state.with(|s| !s.items.is_empty())
                    fallback=|| view! { <p class="admin-list__empty">"Chưa có dữ liệu"</p> }
                >
                    <Table>
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=60.0>"ID"</TableHeaderCell>
                                {columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|c| {
                                            let header = c.header;
                                            view! { <TableHeaderCell>{header}</TableHeaderCell> }
                                        })
                                        .collect_view()
                                })}
                                {actions.map(|_| view! {
                                    <TableHeaderCell min_width=180.0>"Thao tác"</TableHeaderCell>
                                })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                let categories = vm.categories.get();
                                vm.state.with(|s| {
                                    s.items
                                        .iter()
                                        .map(|item| {
                                            let id = item.id();
                                            let cells = columns.with_value(|cols| {
                                                cols.iter()
                                                    .map(|c| {
                                                        let cell = (c.render)(item, &categories);
                                                        view! {
                                                            <TableCell>
                                                                <TableCellLayout>{cell}</TableCellLayout>
                                                            </TableCell>
                                                        }
                                                    })
                                                    .collect_view()
                                            });
                                            view! {
                                                <TableRow>
                                                    <TableCell>{id.to_string()}</TableCell>
                                                    {cells}
                                                    {actions.map(|a| view! {
                                                        <TableCell>{row_actions(vm, id, a)}</TableCell>
                                                    })}
                                                </TableRow>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </TableBody>
                    </Table>
                </Show>
            </Show>

            <PaginationControls
                current_page=Signal::derive(move || vm.state.with(|s| s.page))
                total_pages=Signal::derive(move || vm.state.with(|s| s.total_pages()))
                total_count=Signal::derive(move || vm.state.with(|s| s.total))
                on_page_change=Callback::new(move |page| vm.set_page(page))
            />
        </div>
    }
}

fn row_actions<E: ReadService>(vm: PagedListVm<E>, id: EntityId, actions: TableActions) -> impl IntoView {
    move || {
        if vm.confirm.with(|c| c.is_pending(&id)) {
            view! {
                <ConfirmBar
                    message="Xóa bản ghi này?"
                    on_confirm=actions.on_confirm_delete
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            }
            .into_any()
        } else {
            let busy = Signal::derive(move || vm.confirm.with(|c| c.is_busy()));
            view! {
                <Flex>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Secondary
                        disabled=busy
                        on_click=move |_| actions.on_edit.run(id)
                    >
                        {icon("edit")}
                        " Sửa"
                    </Button>
                    <Button
                        size=ButtonSize::Small
                        appearance=ButtonAppearance::Subtle
                        disabled=busy
                        on_click=move |_| vm.request_delete(id)
                    >
                        {icon("trash")}
                        " Xóa"
                    </Button>
                </Flex>
            }
            .into_any()
        }
    }
}
