//! `add` command: place a new module at the origin.

use crate::cli::common::{print_json, CliContext, CliError, CliResult};
use crate::models::ModuleType;
use crate::services::Session;
use clap::Args;

/// Add a module of the given type at the origin
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Module type (see `types`)
    #[arg(value_name = "TYPE")]
    pub module_type: String,

    /// Output the new module as JSON
    #[arg(long)]
    pub json: bool,
}

impl AddArgs {
    /// Execute the add command against the save slot
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        ctx.edit(|session| self.apply(session))
    }

    /// Apply to an open session
    pub fn apply(&self, session: &mut Session) -> CliResult<()> {
        let module_type: ModuleType = self
            .module_type
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        let id = session.add_module(module_type)?;
        let module = session
            .layout()
            .get(id)
            .ok_or_else(|| CliError::validation(format!("Module {id} vanished after add")))?;

        if self.json {
            print_json(module)?;
        } else {
            println!(
                "Added {} ({}) as {}",
                module_type.spec().display_name,
                module_type,
                module.short_id()
            );
        }
        Ok(())
    }
}
