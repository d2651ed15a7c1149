//! Build script for dunning-i18n crate
//!
//! Validates every Fluent catalog at compile time so that:
//! - All Fluent syntax is valid
//! - Every language defines exactly the same message keys

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::Entry;
use fluent_syntax::parser::parse;

/// Catalog file name inside each language directory
const CATALOG_FILE: &str = "failed-payment.ftl";

/// Extract message keys from a Fluent file
fn extract_message_keys(content: &str) -> Result<BTreeSet<String>, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    Ok(resource
        .body
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Message(message) => Some(message.id.name.to_string()),
            _ => None,
        })
        .collect())
}

/// Find the catalog of every language directory
fn find_catalogs(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    let mut catalogs = BTreeMap::new();

    for entry in fs::read_dir(locales_dir).map_err(|e| format!("Failed to read locales directory: {e}"))? {
        let path = entry
            .map_err(|e| format!("Failed to read directory entry: {e}"))?
            .path();

        if !path.is_dir() {
            continue;
        }

        let language = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?;

        let catalog = path.join(CATALOG_FILE);
        if !catalog.exists() {
            return Err(format!("{language}: missing {CATALOG_FILE}"));
        }
        catalogs.insert(language.to_string(), catalog);
    }

    if catalogs.is_empty() {
        return Err("No locale catalogs found".to_string());
    }

    Ok(catalogs)
}

fn validate_locales() -> Result<(), String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");

    println!("cargo:rerun-if-changed={}", locales_dir.display());

    let mut keys_by_language = BTreeMap::new();
    let mut errors = Vec::new();

    for (language, path) in find_catalogs(&locales_dir)? {
        println!("cargo:rerun-if-changed={}", path.display());

        let parsed = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))
            .and_then(|content| extract_message_keys(&content));

        match parsed {
            Ok(keys) => {
                keys_by_language.insert(language, keys);
            }
            Err(e) => errors.push(format!("{language}: {e}")),
        }
    }

    if let Some((reference_language, reference_keys)) = keys_by_language.iter().next() {
        for (language, keys) in &keys_by_language {
            for missing in reference_keys.difference(keys) {
                errors.push(format!("{language}: missing message '{missing}' (present in {reference_language})"));
            }
            for extra in keys.difference(reference_keys) {
                errors.push(format!("{language}: extra message '{extra}' (absent from {reference_language})"));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("\n"))
    }
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
