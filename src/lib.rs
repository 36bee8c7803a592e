//! HTTP Cobalto 60 — the queryable core of a reference catalog of HTTP
//! status codes, each annotated with a Mexican cultural narrative and example
//! snippets in five languages.
//!
//! The catalog is built once (`Catalog::bundled` for the data that ships with
//! the crate, `Catalog::load` for an external document) and is immutable from
//! then on. Every query operation is a pure read that represents absence as
//! `Option`/empty rather than an error: unknown codes, empty searches, and
//! out-of-range classifications are expected outcomes, not faults.

pub mod catalog;
pub(crate) mod schema;

pub use catalog::{
    Adjacent, CATEGORIES, Catalog, CatalogMetadata, Category, CodeCategory, ExampleSet,
    FALLBACK_CATEGORY_COLOR, FEATURED_CODES, HttpCode, Language, category, category_color,
    category_label, category_range,
};
