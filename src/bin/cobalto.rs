//! Query the HTTP code catalog from the command line.
//!
//! Usage:
//!   cobalto code 404
//!   cobalto search teapot --category client-error
//!   cobalto example 503 rust
//!   cobalto validate catalogs/codes.json
//!
//! Results print as JSON on stdout; `example` prints the raw snippet. Absence
//! is data (`null` or an empty array), not an error — the exit code is
//! nonzero only when a document fails to load or an argument fails to parse.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cobalto::{CATEGORIES, Catalog, CodeCategory, Language};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cobalto")]
#[command(about = "Query the HTTP Cobalto 60 status code catalog")]
struct Cli {
    /// Optional external catalog document; uses the bundled catalog when omitted.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one entry by status code.
    Code { number: u16 },
    /// Substring search across code, title, context, description, and narrative.
    Search {
        query: String,
        /// Restrict to one category (info, success, redirect, client-error, server-error).
        #[arg(long)]
        category: Option<String>,
    },
    /// List every entry of one category.
    Category { id: String },
    /// Catalog-order neighbors of one entry.
    Adjacent { number: u16 },
    /// The curated landing-page entries.
    Featured,
    /// The five category metadata records.
    Categories,
    /// Print one entry's snippet for a language.
    Example { number: u16, language: String },
    /// Classify any status code by numeric range.
    Classify { number: u16 },
    /// Load and validate a catalog document, reporting its identity.
    Validate { file: PathBuf },
}

#[derive(Serialize)]
struct ValidateReport<'a> {
    key: &'a str,
    title: &'a str,
    codes: usize,
}

fn open_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => Catalog::bundled().context("loading bundled catalog"),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serializing output")?
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Code { number } => {
            let catalog = open_catalog(cli.catalog.as_ref())?;
            print_json(&catalog.code(number))?;
        }
        Command::Search { query, category } => {
            let category = category
                .as_deref()
                .map(CodeCategory::try_from)
                .transpose()?;
            let catalog = open_catalog(cli.catalog.as_ref())?;
            print_json(&catalog.search(&query, category))?;
        }
        Command::Category { id } => {
            let category = CodeCategory::try_from(id.as_str())?;
            let catalog = open_catalog(cli.catalog.as_ref())?;
            print_json(&catalog.codes_in_category(category))?;
        }
        Command::Adjacent { number } => {
            let catalog = open_catalog(cli.catalog.as_ref())?;
            print_json(&catalog.adjacent(number))?;
        }
        Command::Featured => {
            let catalog = open_catalog(cli.catalog.as_ref())?;
            print_json(&catalog.featured())?;
        }
        Command::Categories => {
            print_json(&CATEGORIES)?;
        }
        Command::Example { number, language } => {
            let language = Language::try_from(language.as_str())?;
            let catalog = open_catalog(cli.catalog.as_ref())?;
            match catalog.code(number) {
                Some(entry) => println!("{}", entry.examples.get(language)),
                None => println!(),
            }
        }
        Command::Classify { number } => {
            println!("{}", CodeCategory::from_code(number).as_str());
        }
        Command::Validate { file } => {
            let catalog = Catalog::load(&file)
                .with_context(|| format!("validating catalog {}", file.display()))?;
            print_json(&ValidateReport {
                key: &catalog.metadata().key,
                title: &catalog.metadata().title,
                codes: catalog.len(),
            })?;
        }
    }

    Ok(())
}
