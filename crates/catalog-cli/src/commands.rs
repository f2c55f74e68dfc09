//! Menu actions: prompt for input, run the catalog operation, print the
//! outcome.
//!
//! Catalog failures come back as [`CatalogError`] inside the `anyhow`
//! error; the shell reports them and keeps going. Console I/O failures end
//! the session.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use catalog_core::{
    Catalog, CatalogError, blank_record, format_listing_line, is_affirmative, normalize_modality,
    select_file,
};
use catalog_model::fields;

use crate::console::Console;
use crate::summary::{statistics_lines, statistics_table};

/// Prompt that must be answered; end of input cancels the action.
fn ask<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str) -> Result<String> {
    match console.prompt(label)? {
        Some(answer) => Ok(answer),
        None => Err(CatalogError::UserCancelled.into()),
    }
}

/// Prompt where an empty answer cancels the action.
fn ask_required<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str) -> Result<String> {
    let answer = ask(console, label)?;
    if answer.is_empty() {
        return Err(CatalogError::UserCancelled.into());
    }
    Ok(answer)
}

pub fn run_list<R: BufRead, W: Write>(catalog: &Catalog, console: &mut Console<R, W>) -> Result<()> {
    let entries = catalog.list_all()?;
    if entries.is_empty() {
        console.say("No records found.")?;
        return Ok(());
    }
    for entry in &entries {
        console.say(format_listing_line(entry))?;
    }
    Ok(())
}

/// Offer the discovered data files and return the chosen one.
pub fn choose_file<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<PathBuf> {
    let files = catalog.files();
    if files.is_empty() {
        return Err(CatalogError::NothingToDo {
            what: "no CSV files in the catalog tree",
        }
        .into());
    }
    console.say("Choose a CSV file:")?;
    for (number, path) in files.iter().enumerate() {
        console.say(format!("{}) {}", number + 1, path.display()))?;
    }
    let answer = ask(console, "Number (Enter to cancel): ")?;
    Ok(select_file(&files, &answer)?)
}

pub fn run_add<R: BufRead, W: Write>(catalog: &Catalog, console: &mut Console<R, W>) -> Result<()> {
    let path = choose_file(catalog, console)?;
    let file = catalog.load(&path)?;

    let mut record = blank_record(&file.columns);
    for column in &file.columns {
        let mut value = ask(console, &format!("{column}: "))?;
        if column == fields::MODALITY {
            value = normalize_modality(&value);
        }
        record.set(column.as_str(), value);
    }

    catalog.add(&path, record)?;
    console.say("Program added.")?;
    Ok(())
}

pub fn run_edit<R: BufRead, W: Write>(catalog: &Catalog, console: &mut Console<R, W>) -> Result<()> {
    let id = ask_required(console, "Id of the program to edit: ")?;
    let located = catalog
        .find_by_key(&id)?
        .ok_or_else(|| CatalogError::NotFound { id: id.clone() })?;

    console.say("Current record:")?;
    let record = located.record();
    for column in &located.file.columns {
        console.say(format!("  {column}: {}", record.get_or_empty(column)))?;
    }

    let mut changes = BTreeMap::new();
    for column in located.file.columns.iter().filter(|c| c.as_str() != fields::ID) {
        let answer = ask(
            console,
            &format!("{column} [{}]: ", record.get_or_empty(column)),
        )?;
        if !answer.is_empty() {
            changes.insert(column.clone(), answer);
        }
    }

    catalog.edit(&id, &changes)?;
    console.say("Updated.")?;
    Ok(())
}

pub fn run_delete<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<()> {
    let id = ask_required(console, "Id of the program to delete: ")?;
    if catalog.find_by_key(&id)?.is_none() {
        return Err(CatalogError::NotFound { id }.into());
    }

    let answer = console
        .prompt(&format!("Confirm delete {id} (s/N): "))?
        .unwrap_or_default();
    let removed = catalog.delete(&id, is_affirmative(&answer))?;
    console.say(format!("Deleted {removed} record(s)."))?;
    Ok(())
}

pub fn run_statistics<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<()> {
    let stats = catalog.statistics()?;
    let lines = statistics_lines(&stats);
    if lines.is_empty() {
        console.say("No data.")?;
        return Ok(());
    }
    for line in lines {
        console.say(line)?;
    }
    if stats.files.len() > 1 {
        console.say(statistics_table(&stats, &catalog.config().base_dir))?;
    }
    Ok(())
}

pub fn run_export<R: BufRead, W: Write>(
    catalog: &Catalog,
    console: &mut Console<R, W>,
) -> Result<()> {
    let consolidated = catalog.consolidate()?;
    let output = ask_required(console, "Output file name (e.g. consolidated.csv): ")?;
    let output = Path::new(&output);
    catalog.write_export(output, &consolidated)?;
    console.say(format!(
        "Exported {} records to {}",
        consolidated.len(),
        output.display()
    ))?;
    Ok(())
}
