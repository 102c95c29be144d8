//! CSS selectors for prospektmaschine.de listing pages.
//!
//! All markup assumptions live here. When the site changes its layout,
//! capture a fresh page, update the selectors, and refresh the fixture in
//! `tests/fixtures/`.

use scraper::Selector;
use std::sync::LazyLock;

/// One flyer tile in the listing grid.
pub static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".grid-item").unwrap());

/// Description container holding title, shop link and validity text.
pub static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".letak-description").unwrap());

/// Flyer title, relative to the description container.
pub static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.grid-item-content strong").unwrap());

/// Shop link, relative to the description container.
pub static SHOP_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[title]").unwrap());

/// Attribute on the shop link carrying the descriptive phrase.
pub static SHOP_TITLE_ATTR: &str = "title";

/// Thumbnail image, relative to the whole item block.
pub static THUMBNAIL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.img-container img").unwrap());

/// Eagerly loaded image source.
pub static THUMBNAIL_SRC_ATTR: &str = "src";

/// Lazy-load image source used before the page script swaps it in.
pub static THUMBNAIL_LAZY_SRC_ATTR: &str = "data-src";

/// Small print holding the validity date range.
pub static VALIDITY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("small").unwrap());

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_selectors_compile() {
        let _ = &*ITEM;
        let _ = &*DESCRIPTION;
        let _ = &*TITLE;
        let _ = &*SHOP_LINK;
        let _ = &*THUMBNAIL;
        let _ = &*VALIDITY;
    }

    #[test]
    fn test_basic_selector_matching() {
        let html = Html::parse_document(
            r#"<div class="grid-item">
                <div class="img-container"><img src="/a.jpg"></div>
                <div class="letak-description">
                    <p class="grid-item-content"><strong>Wochenangebote</strong></p>
                    <a href="/kaufland/" title="Prospekte des Geschäftes Kaufland">Kaufland</a>
                </div>
            </div>"#,
        );

        let items: Vec<_> = html.select(&ITEM).collect();
        assert_eq!(items.len(), 1);

        let link = items[0].select(&SHOP_LINK).next().unwrap();
        assert_eq!(link.value().attr(SHOP_TITLE_ATTR), Some("Prospekte des Geschäftes Kaufland"));

        let img = items[0].select(&THUMBNAIL).next().unwrap();
        assert_eq!(img.value().attr(THUMBNAIL_SRC_ATTR), Some("/a.jpg"));
    }

    #[test]
    fn test_shop_link_requires_title_attribute() {
        let html = Html::parse_document(r#"<a href="/x">untitled</a>"#);
        assert!(html.select(&SHOP_LINK).next().is_none());
    }
}
