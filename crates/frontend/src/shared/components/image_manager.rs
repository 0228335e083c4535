use crate::shared::config::config;
use crate::shared::crud::ReadService;
use crate::shared::icons::icon;
use crate::shared::modal_stack::{ModalHandle, ModalStackService};
use contracts::domain::a007_media::aggregate::Media;
use contracts::domain::common::{DraftImage, ImageSet};
use contracts::shared::list_query::ListQuery;
use contracts::shared::pagination::total_pages;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, ButtonSize, Flex, Spinner};

/// Editor of the ordered image collection of a form
#[component]
pub fn ImageManager(images: RwSignal<ImageSet>, #[prop(optional, into)] disabled: Signal<bool>) -> impl IntoView {
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService not found in context");
    let new_url = RwSignal::new(String::new());
    let new_is_cover = RwSignal::new(false);

    let add_url = move || {
        let url = new_url.get_untracked().trim().to_string();
        if url.is_empty() {
            return;
        }
        images.update(|set| set.add(DraftImage::from_url(url).with_cover(new_is_cover.get_untracked())));
        new_url.set(String::new());
        new_is_cover.set(false);
    };

    let open_picker = move || {
        modal_stack.push(Some("media-picker-modal"), move |handle| {
            view! { <MediaPicker images=images handle=handle /> }.into_any()
        });
    };

    view! {
        <fieldset class="image-manager" disabled=move || disabled.get()>
            <legend>"Hình ảnh"</legend>
            <Show
                when=move || images.with(|set| !set.is_empty())
                fallback=|| view! { <p class="image-manager__empty">"Chưa có hình ảnh"</p> }
            >
                <ol class="image-manager__list">
                    {move || {
                        let count = images.with(|set| set.len());
                        images
                            .get()
                            .into_vec()
                            .into_iter()
                            .enumerate()
                            .map(|(index, img)| image_row(images, index, count, img))
                            .collect_view()
                    }}
                </ol>
            </Show>
            <Flex class="image-manager__add">
                <input
                    class="form__input"
                    type="url"
                    placeholder="https://..."
                    prop:value=move || new_url.get()
                    on:input=move |ev| new_url.set(event_target_value(&ev))
                />
                <label class="form__checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || new_is_cover.get()
                        on:change=move |ev| new_is_cover.set(event_target_checked(&ev))
                    />
                    <span>"Ảnh bìa"</span>
                </label>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=move |_| add_url()>
                    {icon("plus")}
                    " Thêm URL"
                </Button>
                <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary on_click=move |_| open_picker()>
                    {icon("image")}
                    " Chọn từ thư viện"
                </Button>
            </Flex>
        </fieldset>
    }
}

/// Whether the row at `index` of `count` can move (up, down)
fn move_bounds(index: usize, count: usize) -> (bool, bool) {
    (index > 0, index + 1 < count)
}

fn image_row(images: RwSignal<ImageSet>, index: usize, count: usize, img: DraftImage) -> impl IntoView {
    let caption = img.caption.clone().unwrap_or_default();
    let (can_move_up, can_move_down) = move_bounds(index, count);
    view! {
        <li class=if img.is_cover { "image-row image-row--cover" } else { "image-row" }>
            <img class="image-row__thumb" src=img.url.clone() alt=img.alt_text.clone().unwrap_or_default() />
            <div class="image-row__body">
                <span class="image-row__url" title=img.url.clone()>{img.url.clone()}</span>
                <input
                    class="form__input"
                    type="text"
                    placeholder="Chú thích"
                    prop:value=caption
                    on:change=move |ev| {
                        let text = event_target_value(&ev);
                        let caption = if text.trim().is_empty() { None } else { Some(text) };
                        images.update(|set| set.update_caption(index, caption));
                    }
                />
            </div>
            <div class="image-row__actions">
                <label class="form__radio" title="Ảnh bìa">
                    <input
                        type="radio"
                        name="cover-image"
                        prop:checked=img.is_cover
                        on:change=move |_| images.update(|set| set.set_cover(index))
                    />
                    {icon("star")}
                </label>
                <button
                    class="icon-btn"
                    title="Lên"
                    disabled={!can_move_up}
                    on:click=move |_| images.update(|set| set.move_up(index))
                >
                    {icon("arrow-up")}
                </button>
                <button
                    class="icon-btn"
                    title="Xuống"
                    disabled={!can_move_down}
                    on:click=move |_| images.update(|set| set.move_down(index))
                >
                    {icon("arrow-down")}
                </button>
                <button
                    class="icon-btn icon-btn--danger"
                    title="Gỡ ảnh"
                    on:click=move |_| {
                        images.update(|set| {
                            set.remove(index);
                        })
                    }
                >
                    {icon("trash")}
                </button>
            </div>
        </li>
    }
}

/// Media library browser stacked on top of the form.
///
/// Clicking an item attaches it to the form's image set; items already in
/// the set are marked and cannot be added twice.
#[component]
fn MediaPicker(images: RwSignal<ImageSet>, handle: ModalHandle) -> impl IntoView {
    let items = RwSignal::new(Vec::<Media>::new());
    let page = RwSignal::new(1_u32);
    let total = RwSignal::new(0_u64);
    let is_loading = RwSignal::new(false);
    let page_size = config().lists.page_size;

    Effect::new(move |_| {
        let current = page.get();
        is_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            if let Ok(result) = Media::list(&ListQuery::paged(current, page_size)).await {
                items.set(result.data);
                total.set(result.total);
            }
            is_loading.set(false);
        });
    });

    let pages = move || total_pages(total.get(), page_size);

    view! {
        <div class="media-picker">
            <Flex class="media-picker__header">
                <h3>"Thư viện ảnh"</h3>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| handle.close()>
                    {icon("x")}
                </Button>
            </Flex>
            <Show when=move || !is_loading.get() fallback=|| view! { <Spinner /> }>
                <div class="media-picker__grid">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|media| {
                                let media_id = media.id;
                                let attached = move || images.with(|set| set.contains_media(media_id));
                                let draft = media.to_draft_image();
                                view! {
                                    <button
                                        class=move || if attached() { "media-tile media-tile--attached" } else { "media-tile" }
                                        disabled=attached
                                        on:click=move |_| images.update(|set| {
                                            if !set.contains_media(media_id) {
                                                set.add(draft.clone());
                                            }
                                        })
                                    >
                                        <img src=media.url.clone() alt=media.alt_text.clone().unwrap_or_default() />
                                        <span>{media.file_name.clone()}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
            <Flex class="media-picker__footer">
                <Button
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || page.get() <= 1)
                    on_click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    {icon("chevron-left")}
                </Button>
                <span>{move || format!("{} / {}", page.get(), pages().max(1))}</span>
                <Button
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || page.get() >= pages())
                    on_click=move |_| page.update(|p| *p += 1)
                >
                    {icon("chevron-right")}
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| handle.close()>
                    "Xong"
                </Button>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_bounds() {
        assert_eq!(move_bounds(0, 1), (false, false));
        assert_eq!(move_bounds(0, 3), (false, true));
        assert_eq!(move_bounds(1, 3), (true, true));
        assert_eq!(move_bounds(2, 3), (true, false));
    }
}
