#![allow(dead_code)]

use anyhow::{Context, Result};
use cobalto::Catalog;
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;

/// The catalog that ships with the crate; loading it must always succeed.
pub fn bundled() -> Catalog {
    Catalog::bundled().expect("bundled catalog loads")
}

/// Minimal valid record for guard-rail fixtures.
pub fn minimal_record(code: u16, category: &str) -> Value {
    json!({
        "code": code,
        "title": format!("Titulo {code}"),
        "mexican_context": format!("Contexto {code}"),
        "category": category,
        "description": format!("Descripcion {code}"),
        "mexican": format!("Narrativa {code}"),
        "best_practice": format!("Practica {code}")
    })
}

/// Wrap records in a valid catalog document envelope.
pub fn catalog_document(codes: Value) -> Value {
    json!({
        "schema_version": "code_catalog_v1",
        "catalog": { "key": "test_catalog_v1", "title": "Test catalog" },
        "codes": codes
    })
}

/// Write a document to a temp file for `Catalog::load` tests.
pub fn write_document(document: &Value) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("creating temp catalog")?;
    serde_json::to_writer(&mut file, document).context("writing temp catalog")?;
    file.flush().context("flushing temp catalog")?;
    Ok(file)
}
