//! `rotate` command: set one rotation component in degrees.

use crate::cli::common::{print_json, resolve_id, CliContext, CliError, CliResult};
use crate::models::Axis;
use crate::services::Session;
use clap::Args;

/// Rotate a module about one axis (cosmetic; never collides)
#[derive(Debug, Clone, Args)]
pub struct RotateArgs {
    /// Module id or unique prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Axis (x/pitch, y/yaw, z/roll)
    #[arg(value_name = "AXIS")]
    pub axis: String,

    /// Angle in degrees
    #[arg(value_name = "DEGREES", allow_negative_numbers = true)]
    pub degrees: f64,

    /// Output the rotated module as JSON
    #[arg(long)]
    pub json: bool,
}

impl RotateArgs {
    /// Execute the rotate command against the save slot
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

        session.rotate_module(id, axis, self.degrees)?;

        let module = session
            .layout()
            .get(id)
            .ok_or_else(|| CliError::validation(format!("Module {id} not found")))?;
        if self.json {
            print_json(module)?;
        } else {
            println!(
                "Rotated {} about {axis} to {:.1}°",
                module.short_id(),
                module.rotation_degrees(axis)
            );
        }
        Ok(())
    }
}
