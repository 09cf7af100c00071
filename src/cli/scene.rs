//! `scene` command: render nodes for a display front end.

use crate::cli::common::{print_json, CliContext, CliResult};
use crate::services::Session;
use clap::Args;

/// Print render-ready nodes (shape, colour, transform) for the layout
#[derive(Debug, Clone, Args)]
pub struct SceneArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SceneArgs {
    /// Execute the scene command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let session = ctx.open_session()?;
        self.apply(&session)
    }

    /// Print the scene for the session
    pub fn apply(&self, session: &Session) -> CliResult<()> {
        let nodes = session.scene();
        if self.json {
            return print_json(&nodes);
        }

        for node in &nodes {
            let p = node.position;
            println!(
                "{}{} {:?} {} size {:.2} at ({:.2}, {:.2}, {:.2})",
                if node.selected { "*" } else { " " },
                node.id,
                node.shape,
                node.color,
                node.size,
                p.x,
                p.y,
                p.z
            );
        }
        Ok(())
    }
}
