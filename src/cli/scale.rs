//! `scale` command: resize a module.

use crate::cli::common::{print_json, resolve_id, CliContext, CliError, CliResult};
use crate::services::Session;
use clap::Args;

/// Set a module's uniform scale; cost, mass and volume follow scale³
#[derive(Debug, Clone, Args)]
pub struct ScaleArgs {
    /// Module id or unique prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// New scale (greater than zero)
    #[arg(value_name = "SCALE", allow_negative_numbers = true)]
    pub scale: f64,

    /// Output the rescaled module as JSON
    #[arg(long)]
    pub json: bool,
}

impl ScaleArgs {
    /// Execute the scale command against the save slot
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        ctx.edit(|session| self.apply(session))
    }

    /// Apply to an open session
    pub fn apply(&self, session: &mut Session) -> CliResult<()> {
        let id = resolve_id(session.layout(), &self.id)?;
        session.rescale_module(id, self.scale)?;

        let module = session
            .layout()
            .get(id)
            .ok_or_else(|| CliError::validation(format!("Module {id} not found")))?;
        if self.json {
            print_json(module)?;
        } else {
            println!(
                "Scaled {} to {:.2}: cost {:.1}M, mass {:.0} kg, volume {:.1} m³",
                module.short_id(),
                module.scale,
                module.cost,
                module.mass,
                module.volume
            );
        }
        Ok(())
    }
}
