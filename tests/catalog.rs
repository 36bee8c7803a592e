// Catalog loading and validation guard rails.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use cobalto::{Catalog, CodeCategory, Language};
use serde_json::json;

use common::{bundled, catalog_document, minimal_record, write_document};

#[test]
fn bundled_catalog_loads_and_indexes() {
    let catalog = bundled();
    assert_eq!(catalog.len(), 39);
    assert_eq!(catalog.metadata().key, "http_cobalto_v1");
    assert_eq!(catalog.all().first().expect("first entry").code, 100);
    assert_eq!(catalog.all().last().expect("last entry").code, 511);
}

#[test]
fn bundled_examples_cover_every_language() {
    let catalog = bundled();
    for entry in catalog.all() {
        for language in Language::ALL {
            assert!(
                !entry.examples.get(language).is_empty(),
                "code {} is missing its {} snippet",
                entry.code,
                language.as_str()
            );
        }
    }
}

#[test]
fn bundled_categories_match_declared_classes() {
    let catalog = bundled();
    for entry in catalog.all() {
        assert_eq!(entry.category, CodeCategory::from_code(entry.code));
    }
}

#[test]
fn external_catalog_round_trips_through_disk() -> Result<()> {
    let document = catalog_document(json!([
        minimal_record(200, "success"),
        minimal_record(404, "client-error"),
    ]));
    let file = write_document(&document)?;

    let catalog = Catalog::load(file.path())?;
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.metadata().key, "test_catalog_v1");
    assert_eq!(catalog.code(404).expect("404 present").title, "Titulo 404");
    Ok(())
}

#[test]
fn external_catalog_without_snippets_defaults_to_empty() -> Result<()> {
    let document = catalog_document(json!([minimal_record(200, "success")]));
    let file = write_document(&document)?;

    let catalog = Catalog::load(file.path())?;
    let entry = catalog.code(200).expect("200 present");
    for language in Language::ALL {
        assert_eq!(entry.examples.get(language), "");
    }
    Ok(())
}

#[test]
fn unexpected_schema_version_is_rejected() -> Result<()> {
    let mut document = catalog_document(json!([minimal_record(200, "success")]));
    document["schema_version"] = json!("code_catalog_v2");
    let file = write_document(&document)?;
    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}

#[test]
fn duplicate_codes_are_rejected_on_load() -> Result<()> {
    let document = catalog_document(json!([
        minimal_record(200, "success"),
        minimal_record(200, "success"),
    ]));
    let file = write_document(&document)?;
    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}

#[test]
fn category_class_mismatch_is_rejected_on_load() -> Result<()> {
    // 200 is numerically a success code; declaring it info must fail.
    let document = catalog_document(json!([minimal_record(200, "info")]));
    let file = write_document(&document)?;
    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}

#[test]
fn missing_required_fields_are_rejected_on_load() -> Result<()> {
    let mut record = minimal_record(200, "success");
    record.as_object_mut().expect("record object").remove("title");
    let document = catalog_document(json!([record]));
    let file = write_document(&document)?;
    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}

#[test]
fn unknown_record_fields_are_rejected_on_load() -> Result<()> {
    let mut record = minimal_record(200, "success");
    record["color"] = json!("#FFFFFF");
    let document = catalog_document(json!([record]));
    let file = write_document(&document)?;
    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}

#[test]
fn empty_code_list_is_rejected_on_load() -> Result<()> {
    let document = catalog_document(json!([]));
    let file = write_document(&document)?;
    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}

#[test]
fn unknown_category_token_is_rejected_on_load() -> Result<()> {
    let document = catalog_document(json!([minimal_record(200, "informational")]));
    let file = write_document(&document)?;
    assert!(Catalog::load(file.path()).is_err());
    Ok(())
}
