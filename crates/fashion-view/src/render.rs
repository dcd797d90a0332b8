//! Rendering surface.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named region of the page whose contents are replaced on render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Product listing.
    Products,
    /// Page selector options.
    PageSelect,
    /// Brand selector options.
    BrandSelect,
    /// Sort selector options.
    SortSelect,
    /// Total number of products across all pages.
    TotalCount,
    /// Number of recently released products.
    NewCount,
    /// Median price.
    P50,
    /// 90th percentile price.
    P90,
    /// 95th percentile price.
    P95,
    /// Most recent release date.
    LastReleased,
}

impl Slot {
    /// Every slot, in document order.
    pub const ALL: [Slot; 10] = [
        Slot::Products,
        Slot::PageSelect,
        Slot::BrandSelect,
        Slot::SortSelect,
        Slot::TotalCount,
        Slot::NewCount,
        Slot::P50,
        Slot::P90,
        Slot::P95,
        Slot::LastReleased,
    ];

    /// Element id of the slot in the page.
    pub fn element_id(&self) -> &'static str {
        match self {
            Slot::Products => "products",
            Slot::PageSelect => "page-select",
            Slot::BrandSelect => "brand-select",
            Slot::SortSelect => "sort-select",
            Slot::TotalCount => "nbProducts",
            Slot::NewCount => "nbNewProducts",
            Slot::P50 => "p50PriceValue",
            Slot::P90 => "p90PriceValue",
            Slot::P95 => "p95PriceValue",
            Slot::LastReleased => "lastReleasedDate",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.element_id())
    }
}

/// Surface the view controller renders into.
pub trait Renderer {
    /// Replace the contents of `slot` with `markup`.
    fn replace(&mut self, slot: Slot, markup: &str);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn replace(&mut self, slot: Slot, markup: &str) {
        (**self).replace(slot, markup)
    }
}

/// Renderer that keeps the latest markup per slot and can emit a full page.
#[derive(Debug, Clone, Default)]
pub struct DocumentRenderer {
    slots: BTreeMap<Slot, String>,
    renders: usize,
}

impl DocumentRenderer {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup of a slot.
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    /// Number of `replace` calls received.
    pub fn replace_count(&self) -> usize {
        self.renders
    }

    /// Render a standalone HTML page with every slot in place.
    pub fn to_html(&self, title: &str) -> String {
        let slot = |s: Slot| self.get(s).unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<section id="options">
    <label>Page <select id="{page_id}">{pages}</select></label>
    <label>Brand <select id="{brand_id}">{brands}</select></label>
    <label>Sort <select id="{sort_id}">{sorts}</select></label>
</section>
<section id="indicators">
    <div>Number of products: <span id="{total_id}">{total}</span></div>
    <div>Number of recent products: <span id="{new_id}">{new}</span></div>
    <div>p50 price value: <span id="{p50_id}">{p50}</span></div>
    <div>p90 price value: <span id="{p90_id}">{p90}</span></div>
    <div>p95 price value: <span id="{p95_id}">{p95}</span></div>
    <div>Last released date: <span id="{last_id}">{last}</span></div>
</section>
<section id="{products_id}">
{products}
</section>
</body>
</html>
"#,
            title = crate::markup::html_escape(title),
            page_id = Slot::PageSelect.element_id(),
            pages = slot(Slot::PageSelect),
            brand_id = Slot::BrandSelect.element_id(),
            brands = slot(Slot::BrandSelect),
            sort_id = Slot::SortSelect.element_id(),
            sorts = slot(Slot::SortSelect),
            total_id = Slot::TotalCount.element_id(),
            total = slot(Slot::TotalCount),
            new_id = Slot::NewCount.element_id(),
            new = slot(Slot::NewCount),
            p50_id = Slot::P50.element_id(),
            p50 = slot(Slot::P50),
            p90_id = Slot::P90.element_id(),
            p90 = slot(Slot::P90),
            p95_id = Slot::P95.element_id(),
            p95 = slot(Slot::P95),
            last_id = Slot::LastReleased.element_id(),
            last = slot(Slot::LastReleased),
            products_id = Slot::Products.element_id(),
            products = slot(Slot::Products),
        )
    }
}

impl Renderer for DocumentRenderer {
    fn replace(&mut self, slot: Slot, markup: &str) {
        self.slots.insert(slot, markup.to_string());
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_overwrites_slot() {
        let mut doc = DocumentRenderer::new();
        doc.replace(Slot::TotalCount, "12");
        doc.replace(Slot::TotalCount, "13");

        assert_eq!(doc.get(Slot::TotalCount), Some("13"));
        assert_eq!(doc.get(Slot::P50), None);
        assert_eq!(doc.replace_count(), 2);
    }

    fn fill_new_count<R: Renderer>(mut renderer: R) {
        renderer.replace(Slot::NewCount, "4");
    }

    #[test]
    fn test_renderer_through_mutable_reference() {
        let mut doc = DocumentRenderer::new();
        fill_new_count(&mut doc);
        assert_eq!(doc.get(Slot::NewCount), Some("4"));
    }

    #[test]
    fn test_page_places_slots_by_element_id() {
        let mut doc = DocumentRenderer::new();
        doc.replace(Slot::P90, "77");
        doc.replace(Slot::Products, "<h2>Products</h2>");

        let html = doc.to_html("Clear <Fashion>");
        assert!(html.contains(r#"<span id="p90PriceValue">77</span>"#));
        assert!(html.contains("<section id=\"products\">\n<h2>Products</h2>"));
        assert!(html.contains("<title>Clear &lt;Fashion&gt;</title>"));
        assert_eq!(Slot::ALL.len(), 10);
    }
}
