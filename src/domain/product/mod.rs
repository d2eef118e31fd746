pub mod extractor;

pub use extractor::{extract_product_text, ProductLabels};
