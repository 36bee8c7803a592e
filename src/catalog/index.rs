//! Indexed, immutable view of a code catalog.
//!
//! `Catalog` owns the records in declaration order plus a derived index keyed
//! by status code. Construction validates the document (unique codes, class
//! invariant, non-empty metadata) and, for the bundled data, merges the
//! per-language example tables into each record. After construction the
//! catalog is never mutated; every query is a pure read, so a shared
//! reference can be handed to any number of callers without coordination.

use crate::catalog::categories::CodeCategory;
use crate::catalog::model::{
    CatalogMetadata, CodeCatalogFile, ExampleTableFile, HttpCode, Language, load_catalog_from_path,
    merge_examples, parse_catalog, parse_example_table,
};
use anyhow::{Result, bail};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The curated codes surfaced on the landing view, in display order.
///
/// A literal editorial constant, not derived from catalog properties.
pub const FEATURED_CODES: [u16; 8] = [404, 500, 200, 301, 422, 418, 503, 451];

const BUNDLED_CATALOG: &str = include_str!("../../catalogs/codes.json");

const BUNDLED_EXAMPLE_TABLES: [(Language, &str); 5] = [
    (
        Language::Javascript,
        include_str!("../../catalogs/examples/javascript.json"),
    ),
    (
        Language::Python,
        include_str!("../../catalogs/examples/python.json"),
    ),
    (
        Language::PhpLaravel,
        include_str!("../../catalogs/examples/php-laravel.json"),
    ),
    (
        Language::Rust,
        include_str!("../../catalogs/examples/rust.json"),
    ),
    (
        Language::Cpp,
        include_str!("../../catalogs/examples/cpp.json"),
    ),
];

#[derive(Debug)]
/// Code catalog plus a derived index from status code to array position.
pub struct Catalog {
    metadata: CatalogMetadata,
    codes: Vec<HttpCode>,
    by_code: BTreeMap<u16, usize>,
}

#[derive(Clone, Copy, Debug, Serialize)]
/// Array neighbors of a catalog entry. Both sides are `None` when the
/// requested code is not in the catalog at all.
pub struct Adjacent<'a> {
    pub previous: Option<&'a HttpCode>,
    pub next: Option<&'a HttpCode>,
}

impl Catalog {
    /// Build the catalog that ships with the crate, example tables merged.
    pub fn bundled() -> Result<Self> {
        let mut file = parse_catalog(BUNDLED_CATALOG, "bundled codes.json")?;
        let mut tables: Vec<ExampleTableFile> = Vec::with_capacity(BUNDLED_EXAMPLE_TABLES.len());
        for (language, data) in BUNDLED_EXAMPLE_TABLES {
            let table = parse_example_table(
                data,
                &format!("bundled examples/{}.json", language.as_str()),
            )?;
            if table.language != language {
                bail!(
                    "bundled example table for {} declares language {}",
                    language.as_str(),
                    table.language.as_str()
                );
            }
            tables.push(table);
        }
        merge_examples(&mut file.codes, &tables);
        Self::from_file(file)
    }

    /// Load and validate an external catalog document.
    ///
    /// External documents carry their snippets inline; absent snippets default
    /// to empty strings, which consumers must treat as "no example available".
    pub fn load(path: &Path) -> Result<Self> {
        Self::from_file(load_catalog_from_path(path)?)
    }

    /// Validate the parsed document and build the index.
    pub fn from_file(file: CodeCatalogFile) -> Result<Self> {
        if file.catalog.key.trim().is_empty() {
            bail!("catalog.key must not be empty");
        }
        if file.catalog.title.trim().is_empty() {
            bail!("catalog.title must not be empty");
        }
        if file.codes.is_empty() {
            bail!("catalog contains no codes");
        }

        let mut by_code = BTreeMap::new();
        for (position, record) in file.codes.iter().enumerate() {
            if record.title.trim().is_empty() {
                bail!("code {} has an empty title", record.code);
            }
            let expected = CodeCategory::from_code(record.code);
            if record.category != expected {
                bail!(
                    "code {} declares category {} but its numeric class is {}",
                    record.code,
                    record.category.as_str(),
                    expected.as_str()
                );
            }
            if by_code.insert(record.code, position).is_some() {
                bail!("duplicate code {}", record.code);
            }
        }

        Ok(Self {
            metadata: file.catalog,
            codes: file.codes,
            by_code,
        })
    }

    /// Identity block of the loaded document.
    pub fn metadata(&self) -> &CatalogMetadata {
        &self.metadata
    }

    /// Every entry, in declaration order.
    pub fn all(&self) -> &[HttpCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Resolve an entry by status code.
    ///
    /// Returns `None` instead of erroring; an unknown code is an expected
    /// outcome, not a fault.
    pub fn code(&self, number: u16) -> Option<&HttpCode> {
        self.by_code.get(&number).map(|&position| &self.codes[position])
    }

    /// All entries of one category, in declaration order.
    pub fn codes_in_category(&self, category: CodeCategory) -> Vec<&HttpCode> {
        self.codes
            .iter()
            .filter(|record| record.category == category)
            .collect()
    }

    /// Case-insensitive substring search over code, title, context,
    /// description, and narrative.
    ///
    /// An empty or whitespace-only query returns the universe unfiltered; a
    /// category argument restricts the universe first. Results keep
    /// declaration order; there is no ranking.
    pub fn search(&self, query: &str, category: Option<CodeCategory>) -> Vec<&HttpCode> {
        let universe: Vec<&HttpCode> = match category {
            Some(category) => self.codes_in_category(category),
            None => self.codes.iter().collect(),
        };

        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return universe;
        }

        universe
            .into_iter()
            .filter(|record| record_matches(record, &needle))
            .collect()
    }

    /// Array neighbors of the entry with the given code.
    ///
    /// Adjacency is positional, not numeric: the neighbors are whatever the
    /// catalog declares before and after the entry. An unknown code yields
    /// `None` on both sides; the position is checked before any index
    /// arithmetic so a miss can never wrap around to the far end.
    pub fn adjacent(&self, number: u16) -> Adjacent<'_> {
        let Some(&position) = self.by_code.get(&number) else {
            return Adjacent {
                previous: None,
                next: None,
            };
        };
        Adjacent {
            previous: position.checked_sub(1).map(|i| &self.codes[i]),
            next: self.codes.get(position + 1),
        }
    }

    /// The curated entries from `FEATURED_CODES`, in that literal order,
    /// skipping any code the catalog does not carry.
    pub fn featured(&self) -> Vec<&HttpCode> {
        FEATURED_CODES
            .iter()
            .filter_map(|&number| self.code(number))
            .collect()
    }
}

fn record_matches(record: &HttpCode, needle: &str) -> bool {
    record.code.to_string().contains(needle)
        || record.title.to_lowercase().contains(needle)
        || record.mexican_context.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.mexican.to_lowercase().contains(needle)
}
