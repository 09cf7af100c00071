//! `delete` command: remove a module.

use crate::cli::common::{print_json, CliContext, CliResult};
use crate::models::ResolveError;
use crate::services::Session;
use clap::Args;
use serde::Serialize;

/// Delete a module by id or unique id prefix
#[derive(Debug, Clone, Args)]
pub struct DeleteArgs {
    /// Module id or unique prefix
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: String,
    deleted: bool,
}

impl DeleteArgs {
    /// Execute the delete command against the save slot.
    ///
    /// The slot is only rewritten when a module was actually removed.
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let mut session = ctx.open_session()?;
        if self.apply(&mut session)? {
            session.save()?;
        }
        Ok(())
    }

    /// Apply to an open session and report whether a module was removed.
    ///
    /// An id that matches nothing is reported but not treated as an error;
    /// an ambiguous prefix is.
    pub fn apply(&self, session: &mut Session) -> CliResult<bool> {
        let deleted = match session.layout().resolve(&self.id) {
            Ok(id) => session.delete_module(id),
            Err(ResolveError::NotFound(_)) => false,
            Err(err) => return Err(err.into()),
        };

        if self.json {
            print_json(&DeleteResponse {
                id: self.id.clone(),
                deleted,
            })?;
        } else if deleted {
            println!("Deleted {}", self.id);
        } else {
            println!("No module matches '{}'; nothing deleted", self.id);
        }
        Ok(deleted)
    }
}
