//! Product field extraction for the shop's product page layout.
//!
//! The page structure is fixed: the product name is the first `h1` and the
//! description lives in `div#opis`. Anything else on the page is ignored.

use scraper::{ElementRef, Html, Selector};

const NAME_SELECTOR: &str = "h1";
const DESCRIPTION_SELECTOR: &str = "div#opis";

/// Labels and placeholders used when assembling the product text.
///
/// Placeholders are plain content: they are sent to the model like any
/// extracted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductLabels {
    pub name_label: &'static str,
    pub description_label: &'static str,
    pub name_missing: &'static str,
    pub description_missing: &'static str,
}

impl ProductLabels {
    pub fn polish() -> Self {
        Self {
            name_label: "Nazwa produktu",
            description_label: "Opis",
            name_missing: "Nie znaleziono nazwy produktu",
            description_missing: "Nie znaleziono opisu produktu",
        }
    }

    pub fn english() -> Self {
        Self {
            name_label: "Product name",
            description_label: "Description",
            name_missing: "name not found",
            description_missing: "description not found",
        }
    }
}

impl Default for ProductLabels {
    fn default() -> Self {
        Self::polish()
    }
}

/// Extract the product name and description from page markup and combine
/// them into a single text: `"<name label>: <name>. <description label>: <description>."`
pub fn extract_product_text(markup: &str, labels: &ProductLabels) -> String {
    let document = Html::parse_document(markup);

    let name = first_text(&document, NAME_SELECTOR).unwrap_or_else(|| labels.name_missing.to_string());
    let description = first_text(&document, DESCRIPTION_SELECTOR)
        .unwrap_or_else(|| labels.description_missing.to_string());

    format!(
        "{}: {}. {}: {}.",
        labels.name_label, name, labels.description_label, description
    )
}

/// Text of the first element matching `selector`, or `None` when there is no
/// such element or it holds no visible text.
fn first_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    document
        .select(&selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// Whitespace inside a field collapses to single spaces, across and within text nodes
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
