//! `move` command: set one position coordinate.

use crate::cli::common::{print_json, resolve_id, CliContext, CliError, CliResult};
use crate::models::Axis;
use crate::services::Session;
use clap::Args;

/// Move a module along one axis
#[derive(Debug, Clone, Args)]
pub struct MoveArgs {
    /// Module id or unique prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Axis to change (x, y or z)
    #[arg(value_name = "AXIS")]
    pub axis: String,

    /// New coordinate
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub value: f64,

    /// Output the moved module as JSON
    #[arg(long)]
    pub json: bool,
}

impl MoveArgs {
    /// Execute the move command against the save slot
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        ctx.edit(|session| self.apply(session))
    }

    /// Apply to an open session
    pub fn apply(&self, session: &mut Session) -> CliResult<()> {
        let id = resolve_id(session.layout(), &self.id)?;
        let axis: Axis = self
            .axis
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;

        session.reposition_module(id, axis, self.value)?;

        let module = session
            .layout()
            .get(id)
            .ok_or_else(|| CliError::validation(format!("Module {id} not found")))?;
        if self.json {
            print_json(module)?;
        } else {
            let p = module.position;
            println!(
                "Moved {} to ({:.2}, {:.2}, {:.2})",
                module.short_id(),
                p.x,
                p.y,
                p.z
            );
        }
        Ok(())
    }
}
