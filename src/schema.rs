//! JSON Schema validation for catalog documents.
//!
//! The contracts for the two document kinds ship with the crate
//! (`catalogs/codes.schema.json` and `catalogs/examples.schema.json`) and are
//! compiled on demand. Validation runs before deserialization so schema
//! errors name the offending field instead of a serde type mismatch.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const CATALOG_SCHEMA: &str = include_str!("../catalogs/codes.schema.json");
const EXAMPLE_TABLE_SCHEMA: &str = include_str!("../catalogs/examples.schema.json");

pub(crate) fn validate_catalog_document(document: &Value) -> Result<()> {
    validate_against(CATALOG_SCHEMA, "codes.schema.json", document)
}

pub(crate) fn validate_example_table_document(document: &Value) -> Result<()> {
    validate_against(EXAMPLE_TABLE_SCHEMA, "examples.schema.json", document)
}

fn validate_against(schema_text: &str, schema_name: &str, document: &Value) -> Result<()> {
    let compiled = compile_bundled_schema(schema_text, schema_name)?;
    if let Err(errors) = compiled.validate(document) {
        let details = errors
            .map(|err| format!("{}: {err}", err.instance_path))
            .collect::<Vec<_>>()
            .join("\n");
        bail!("document failed {schema_name} validation:\n{details}");
    }
    Ok(())
}

// The compiler keeps references into the schema value, so the bundled schema
// is leaked to satisfy the 'static requirement.
fn compile_bundled_schema(schema_text: &str, schema_name: &str) -> Result<JSONSchema> {
    let value: Value = serde_json::from_str(schema_text)
        .with_context(|| format!("parsing bundled schema {schema_name}"))?;
    let leaked: &'static Value = Box::leak(Box::new(value));
    JSONSchema::compile(leaked)
        .map_err(|err| anyhow!("compiling bundled schema {schema_name}: {err}"))
}
