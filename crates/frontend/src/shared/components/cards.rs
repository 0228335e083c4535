//! Building blocks of the public pages: list cards, the detail gallery and
//! the not-found fallback.

use crate::shared::icons::icon;
use contracts::domain::common::ImageLink;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::Card;

/// Stagger step between the appear animations of neighbouring cards
const CARD_DELAY_STEP_MS: usize = 60;

/// Animation delay of the card at `index` in a grid, capped so long pages
/// do not keep animating
pub fn card_delay(index: usize) -> u32 {
    (index.min(8) * CARD_DELAY_STEP_MS) as u32
}

/// Linked card with a cover image, title and summary; `children` go into
/// the meta line under the title.
#[component]
pub fn ContentCard(
    #[prop(into)] href: String,
    #[prop(into)] title: String,
    #[prop(into)] summary: String,
    #[prop(default = None)] image: Option<String>,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card class="content-card" attr:style=style>
            <A href=href.clone() attr:class="content-card__link">
                {match image {
                    Some(url) => view! { <img class="content-card__image" src=url alt=title.clone() /> }.into_any(),
                    None => view! { <div class="content-card__image content-card__image--empty">{icon("image")}</div> }.into_any(),
                }}
                <div class="content-card__body">
                    <h3 class="content-card__title">{title.clone()}</h3>
                    {children.map(|c| view! { <div class="content-card__meta">{c()}</div> })}
                    <p class="content-card__summary">{summary}</p>
                </div>
            </A>
        </Card>
    }
}

/// Cover image first, then the remaining images in position order
#[component]
pub fn Gallery(images: Vec<ImageLink>) -> impl IntoView {
    let mut images = images;
    images.sort_by_key(|img| (!img.is_cover, img.position));
    let mut images = images.into_iter();
    let cover = images.next();
    let rest: Vec<ImageLink> = images.collect();

    view! {
        <div class="gallery">
            {cover.map(|img| view! {
                <figure class="gallery__cover">
                    <img src=img.url.clone() alt=img.alt_text.clone().unwrap_or_default() />
                    {img.caption.clone().map(|c| view! { <figcaption>{c}</figcaption> })}
                </figure>
            })}
            {(!rest.is_empty()).then(|| view! {
                <div class="gallery__grid">
                    {rest
                        .iter()
                        .map(|img| view! {
                            <a href=img.url.clone() target="_blank" rel="noopener">
                                <img
                                    src=img.url.clone()
                                    alt=img.alt_text.clone().unwrap_or_default()
                                    title=img.caption.clone().unwrap_or_default()
                                />
                            </a>
                        })
                        .collect_view()}
                </div>
            })}
        </div>
    }
}

/// Full-page fallback of a detail page whose record could not be loaded
#[component]
pub fn NotFound(
    #[prop(into)] message: String,
    #[prop(into)] back_href: String,
    #[prop(into)] back_label: String,
) -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found__icon">{icon("alert")}</div>
            <h2>"Không tìm thấy nội dung"</h2>
            <p class="not-found__message">{message}</p>
            <A href=back_href attr:class="button button--primary">
                {icon("chevron-left")}
                {back_label}
            </A>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_delay_is_capped() {
        assert_eq!(card_delay(0), 0);
        assert_eq!(card_delay(2), 120);
        assert_eq!(card_delay(40), card_delay(8));
    }
}
