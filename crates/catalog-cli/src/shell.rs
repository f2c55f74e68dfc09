//! Interactive menu loop.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use catalog_core::{Catalog, CatalogError};

use crate::commands::{run_add, run_delete, run_edit, run_export, run_list, run_statistics};
use crate::console::Console;
use crate::menu::{MenuCommand, render_menu};

/// Show the menu and dispatch choices until Exit or end of input.
///
/// Catalog errors are reported and the menu is shown again. Only console
/// I/O failures end the loop with an error.
pub fn run_shell<R: BufRead, W: Write>(catalog: &Catalog, console: &mut Console<R, W>) -> Result<()> {
    loop {
        console.say(render_menu())?;
        let Some(choice) = console.prompt("Option: ")? else {
            info!("end of input, leaving shell");
            return Ok(());
        };
        let Some(command) = MenuCommand::parse(&choice) else {
            console.say("Invalid option.")?;
            continue;
        };
        debug!(?command, "menu selection");

        let outcome = match command {
            MenuCommand::List => run_list(catalog, console),
            MenuCommand::Add => run_add(catalog, console),
            MenuCommand::Edit => run_edit(catalog, console),
            MenuCommand::Delete => run_delete(catalog, console),
            MenuCommand::Statistics => run_statistics(catalog, console),
            MenuCommand::Export => run_export(catalog, console),
            MenuCommand::Exit => {
                console.say("Goodbye.")?;
                return Ok(());
            }
        };

        if let Err(error) = outcome {
            report(console, error)?;
        }
    }
}

fn report<R: BufRead, W: Write>(console: &mut Console<R, W>, error: anyhow::Error) -> Result<()> {
    let Some(catalog_error) = error.downcast_ref::<CatalogError>() else {
        return Err(error);
    };
    debug!(error = %catalog_error, "operation aborted");

    let message = match catalog_error {
        CatalogError::NotFound { id } => format!("Not found: {id}"),
        CatalogError::Validation(issue) => format!("Validation error: {issue}"),
        CatalogError::UserCancelled => "Cancelled.".to_string(),
        CatalogError::InvalidSelection { .. } => "Invalid selection.".to_string(),
        CatalogError::NothingToDo { what } => format!("Nothing to do: {what}."),
        CatalogError::Format(_) | CatalogError::MissingBaseDir { .. } => {
            format!("Error: {catalog_error}")
        }
    };
    console.say(message)?;
    Ok(())
}
