//! Serde models for the catalog file format.
//!
//! Catalog documents live under `catalogs/` as JSON: one code catalog
//! (`codes.json`) plus one example table per language under
//! `catalogs/examples/`. Documents are validated against the bundled JSON
//! Schemas before deserialization so authoring mistakes fail loudly at load
//! time instead of surfacing as odd query results.

use crate::schema::{validate_catalog_document, validate_example_table_document};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Version marker for code catalog documents.
pub const CATALOG_SCHEMA_VERSION: &str = "code_catalog_v1";
/// Version marker for per-language example table documents.
pub const EXAMPLE_TABLE_SCHEMA_VERSION: &str = "example_table_v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// The closed set of languages an entry can carry a snippet for.
pub enum Language {
    Javascript,
    Python,
    PhpLaravel,
    Rust,
    Cpp,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Javascript,
        Language::Python,
        Language::PhpLaravel,
        Language::Rust,
        Language::Cpp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::PhpLaravel => "php-laravel",
            Language::Rust => "rust",
            Language::Cpp => "cpp",
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "javascript" => Ok(Language::Javascript),
            "python" => Ok(Language::Python),
            "php-laravel" => Ok(Language::PhpLaravel),
            "rust" => Ok(Language::Rust),
            "cpp" => Ok(Language::Cpp),
            other => bail!("Unknown language: {other}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// One snippet per supported language; a missing snippet is the empty string,
/// never an absent key.
pub struct ExampleSet {
    #[serde(default)]
    pub javascript: String,
    #[serde(default)]
    pub python: String,
    #[serde(default, rename = "php-laravel")]
    pub php_laravel: String,
    #[serde(default)]
    pub rust: String,
    #[serde(default)]
    pub cpp: String,
}

impl ExampleSet {
    /// Snippet for a language; empty string means "no example available".
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::Javascript => &self.javascript,
            Language::Python => &self.python,
            Language::PhpLaravel => &self.php_laravel,
            Language::Rust => &self.rust,
            Language::Cpp => &self.cpp,
        }
    }

    fn set(&mut self, language: Language, snippet: String) {
        match language {
            Language::Javascript => self.javascript = snippet,
            Language::Python => self.python = snippet,
            Language::PhpLaravel => self.php_laravel = snippet,
            Language::Rust => self.rust = snippet,
            Language::Cpp => self.cpp = snippet,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// One documented HTTP status code.
pub struct HttpCode {
    pub code: u16,
    pub title: String,
    pub mexican_context: String,
    pub category: crate::catalog::CodeCategory,
    pub description: String,
    pub mexican: String,
    #[serde(default)]
    pub examples: ExampleSet,
    pub best_practice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anti_pattern: Option<String>,
    /// Soft references; a listed code is not required to exist in the catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_codes: Vec<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Identity block of a catalog document.
pub struct CatalogMetadata {
    pub key: String,
    pub title: String,
}

#[derive(Clone, Debug, Deserialize)]
/// On-disk shape of a code catalog document.
pub struct CodeCatalogFile {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub codes: Vec<HttpCode>,
}

#[derive(Clone, Debug, Deserialize)]
/// On-disk shape of a per-language example table.
pub struct ExampleTableFile {
    pub schema_version: String,
    pub language: Language,
    pub examples: BTreeMap<u16, String>,
}

/// Parse a code catalog document, validating it against the bundled schema.
///
/// `origin` names the document in error messages (a path, or "bundled").
pub fn parse_catalog(data: &str, origin: &str) -> Result<CodeCatalogFile> {
    let document: Value =
        serde_json::from_str(data).with_context(|| format!("parsing catalog {origin}"))?;
    validate_catalog_document(&document)
        .with_context(|| format!("validating catalog {origin}"))?;
    let file: CodeCatalogFile = serde_json::from_value(document)
        .with_context(|| format!("deserializing catalog {origin}"))?;
    if file.schema_version != CATALOG_SCHEMA_VERSION {
        bail!(
            "unsupported catalog schema_version '{}', expected {}",
            file.schema_version,
            CATALOG_SCHEMA_VERSION
        );
    }
    Ok(file)
}

/// Parse an example table document, validating it against the bundled schema.
pub fn parse_example_table(data: &str, origin: &str) -> Result<ExampleTableFile> {
    let document: Value =
        serde_json::from_str(data).with_context(|| format!("parsing example table {origin}"))?;
    validate_example_table_document(&document)
        .with_context(|| format!("validating example table {origin}"))?;
    let file: ExampleTableFile = serde_json::from_value(document)
        .with_context(|| format!("deserializing example table {origin}"))?;
    if file.schema_version != EXAMPLE_TABLE_SCHEMA_VERSION {
        bail!(
            "unsupported example table schema_version '{}', expected {}",
            file.schema_version,
            EXAMPLE_TABLE_SCHEMA_VERSION
        );
    }
    Ok(file)
}

/// Read and parse a code catalog document from disk.
pub fn load_catalog_from_path(path: &Path) -> Result<CodeCatalogFile> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    parse_catalog(&data, &path.display().to_string())
}

/// Read and parse an example table document from disk.
pub fn load_example_table_from_path(path: &Path) -> Result<ExampleTableFile> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading example table {}", path.display()))?;
    parse_example_table(&data, &path.display().to_string())
}

/// Populate each record's examples from the per-language tables.
///
/// A table entry keyed by a code absent from the catalog is ignored; a record
/// with no table entry keeps the empty-string default. Runs once during
/// catalog construction.
pub(crate) fn merge_examples(codes: &mut [HttpCode], tables: &[ExampleTableFile]) {
    for record in codes.iter_mut() {
        for table in tables {
            if let Some(snippet) = table.examples.get(&record.code) {
                record.examples.set(table.language, snippet.clone());
            }
        }
    }
}
