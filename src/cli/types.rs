//! `types` command: the module catalogue.

use crate::cli::common::{print_json, CliResult};
use crate::models::ModuleType;
use clap::Args;
use serde::Serialize;

/// List available module types with their base figures
#[derive(Debug, Clone, Args)]
pub struct TypesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct TypeItem {
    #[serde(rename = "type")]
    module_type: ModuleType,
    #[serde(flatten)]
    spec: crate::models::ModuleSpec,
}

impl TypesArgs {
    /// Execute the types command
    pub fn execute(&self) -> CliResult<()> {
        let items: Vec<TypeItem> = ModuleType::ALL
            .iter()
            .map(|&module_type| TypeItem {
                module_type,
                spec: *module_type.spec(),
            })
            .collect();

        if self.json {
            return print_json(&items);
        }

        println!("Module types ({}):", items.len());
        println!();
        for item in items {
            println!(
                "  {:<12} {:<28} cost {:>6.1}M  mass {:>6.0} kg  volume {:>5.1} m³",
                item.module_type.as_str(),
                item.spec.display_name,
                item.spec.base_cost,
                item.spec.base_mass,
                item.spec.base_volume
            );
        }
        Ok(())
    }
}
