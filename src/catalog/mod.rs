//! HTTP code catalog wiring.
//!
//! This module holds the catalog data model and its query surface. The
//! bundled documents under `catalogs/` (the code catalog plus one example
//! table per language) are embedded into the binary and assembled once by
//! `Catalog::bundled`; external documents in the same format load through
//! `Catalog::load`. Types here mirror the document schema fields; callers
//! query through `Catalog` and never mutate it.

pub mod categories;
pub mod index;
pub mod model;

pub use categories::{
    CATEGORIES, Category, CodeCategory, FALLBACK_CATEGORY_COLOR, category, category_color,
    category_label, category_range,
};
pub use index::{Adjacent, Catalog, FEATURED_CODES};
pub use model::{
    CATALOG_SCHEMA_VERSION, CatalogMetadata, CodeCatalogFile, EXAMPLE_TABLE_SCHEMA_VERSION,
    ExampleSet, ExampleTableFile, HttpCode, Language, load_catalog_from_path,
    load_example_table_from_path, parse_catalog, parse_example_table,
};

/// Default relative path to the bundled code catalog document.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/codes.json";
