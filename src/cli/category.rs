//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::models::CategoryRegistry;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List the available categories
    List,
}

/// Handle a category command
pub fn handle_category_command(registry: &CategoryRegistry, cmd: CategoryCommands) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(registry));
        }
    }

    Ok(())
}
