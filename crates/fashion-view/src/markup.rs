//! Markup fragments for each render slot.

use chrono::NaiveDate;
use fashion_catalog::catalog::{FavoriteSet, Product};
use fashion_catalog::search::{PaginationMeta, SortKey};

/// Render the product listing.
pub fn render_products(products: &[Product], favorites: &FavoriteSet) -> String {
    let cards: String = products
        .iter()
        .map(|p| render_product_card(p, favorites.contains(&p.id)))
        .collect();

    format!("<h2>Products</h2>\n<div class=\"product-list\">{}</div>", cards)
}

fn render_product_card(product: &Product, is_favorite: bool) -> String {
    let (star, class) = if is_favorite {
        ("\u{2605}", "favorite active")
    } else {
        ("\u{2606}", "favorite")
    };

    format!(
        r#"
<div class="product" id="{id}">
    <span class="product-brand">{brand}</span>
    <a href="{link}" target="_blank" rel="noopener">{name}</a>
    <button class="{class}" data-uuid="{id}">{star}</button>
    <span class="product-price">{price}</span>
</div>"#,
        id = html_escape(product.id.as_str()),
        brand = html_escape(&product.brand),
        link = html_escape(&product.link),
        name = html_escape(&product.name),
        class = class,
        star = star,
        price = format_price(Some(product.price)),
    )
}

/// Render the page selector options, one per page, current page selected.
pub fn render_page_options(pagination: &PaginationMeta) -> String {
    pagination
        .page_numbers()
        .map(|page| {
            let selected = if page == pagination.current_page {
                " selected"
            } else {
                ""
            };
            format!(r#"<option value="{page}"{selected}>{page}</option>"#)
        })
        .collect()
}

/// Render the brand selector options with a leading "all brands" entry.
pub fn render_brand_options(brands: &[String], active: Option<&str>) -> String {
    let all_selected = if active.is_none() { " selected" } else { "" };
    let mut html = format!(r#"<option value=""{all_selected}>All brands</option>"#);

    for brand in brands {
        let selected = if active == Some(brand.as_str()) {
            " selected"
        } else {
            ""
        };
        let brand = html_escape(brand);
        html.push_str(&format!(r#"<option value="{brand}"{selected}>{brand}</option>"#));
    }
    html
}

/// Render the sort selector options with a leading "no sorting" entry.
pub fn render_sort_options(active: Option<SortKey>) -> String {
    let none_selected = if active.is_none() { " selected" } else { "" };
    let mut html = format!(r#"<option value=""{none_selected}>No sorting</option>"#);

    for key in SortKey::all() {
        let selected = if active == Some(key) { " selected" } else { "" };
        html.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            key.as_str(),
            selected,
            key.display_name()
        ));
    }
    html
}

/// Format a price with at most two decimals; `None` renders empty.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(price) => {
            let fixed = format!("{:.2}", price);
            fixed
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        }
        None => String::new(),
    }
}

/// Format a date as `YYYY-MM-DD`; `None` renders empty.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Simple HTML escape for text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use fashion_catalog::ProductId;

    #[test]
    fn test_product_card_marks_favorites() {
        let products = vec![
            Product::new("fav", "Shirt", "loom", 30.0, "2024-01-01", "https://loom.example/shirt"),
            Product::new("plain", "Socks", "loom", 9.5, "2024-01-01", "https://loom.example/socks"),
        ];
        let favorites: FavoriteSet = vec![ProductId::new("fav")].into_iter().collect();

        let html = render_products(&products, &favorites);
        assert!(html.starts_with("<h2>Products</h2>"));
        assert!(html.contains(r#"<button class="favorite active" data-uuid="fav">★</button>"#));
        assert!(html.contains(r#"<button class="favorite" data-uuid="plain">☆</button>"#));
        assert!(html.contains(r#"<span class="product-price">9.5</span>"#));
    }

    #[test]
    fn test_product_text_is_escaped() {
        let products = vec![Product::new("x", "<b>Tee</b>", "A&B", 1.0, "2024-01-01", "l")];
        let html = render_products(&products, &FavoriteSet::new());
        assert!(html.contains("&lt;b&gt;Tee&lt;/b&gt;"));
        assert!(html.contains("A&amp;B"));
    }

    #[test]
    fn test_page_options_select_current_page() {
        let html = render_page_options(&PaginationMeta::new(2, 3, 30));
        assert_eq!(
            html,
            r#"<option value="1">1</option><option value="2" selected>2</option><option value="3">3</option>"#
        );
    }

    #[test]
    fn test_brand_options() {
        let brands = vec!["loom".to_string(), "adresse".to_string()];
        let html = render_brand_options(&brands, Some("adresse"));
        assert!(html.starts_with(r#"<option value="">All brands</option>"#));
        assert!(html.contains(r#"<option value="adresse" selected>adresse</option>"#));

        let html = render_brand_options(&brands, None);
        assert!(html.starts_with(r#"<option value="" selected>All brands</option>"#));
    }

    #[test]
    fn test_sort_options() {
        let html = render_sort_options(Some(SortKey::PriceDesc));
        assert!(html.contains(r#"<option value="price-desc" selected>"#));
        assert!(html.contains(r#"<option value="date-asc">"#));
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Some(50.0)), "50");
        assert_eq!(format_price(Some(29.5)), "29.5");
        assert_eq!(format_price(Some(12.346)), "12.35");
        assert_eq!(format_price(None), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2024, 3, 9)), "2024-03-09");
        assert_eq!(format_date(None), "");
    }
}
