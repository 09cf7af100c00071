//! `report` command: derived mission figures.

use crate::cli::common::{print_json, CliContext, CliResult};
use crate::services::compliance::Check;
use crate::services::{MissionReport, Session};
use clap::Args;

/// Show cost, mass, compliance and logistics for the saved layout
#[derive(Debug, Clone, Args)]
pub struct ReportArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ReportArgs {
    /// Execute the report command
    pub fn execute(&self, ctx: &CliContext) -> CliResult<()> {
        let session = ctx.open_session()?;
        self.apply(&session)
    }

    /// Print the report for the session's layout
    pub fn apply(&self, session: &Session) -> CliResult<()> {
        let report = session.report();
        if self.json {
            print_json(&report)
        } else {
            print_human(&report);
            Ok(())
        }
    }
}

fn verdict(check: &Check) -> &'static str {
    if check.passed {
        "PASS"
    } else {
        "FAIL"
    }
}

fn print_human(report: &MissionReport) {
    let m = &report.metrics;
    println!("Mission Metrics");
    println!("===============");
    println!("  Modules:        {}", m.module_count);
    println!("  Hardware cost:  ${:.1}M", m.hardware_cost);
    println!("  Launch cost:    ${:.1}M", m.launch_cost);
    println!("  Total cost:     ${:.1}M", m.total_cost);
    println!("  Total mass:     {:.0} kg", m.total_mass);
    println!("  Total volume:   {:.1} m³", m.total_volume);
    println!();

    let c = &report.compliance;
    println!("Compliance");
    println!("==========");
    println!(
        "  Radiation shielding: {} (score {:.1}, min {:.0})",
        verdict(&c.radiation),
        c.radiation.value,
        c.radiation.threshold
    );
    println!(
        "  Structural load:     {} (pressure {:.1}, max {:.0})",
        verdict(&c.structural),
        c.structural.value,
        c.structural.threshold
    );
    println!(
        "  Habitable volume:    {} ({:.2} m³, need {:.2})",
        verdict(&c.nhv),
        c.nhv.value,
        c.nhv.threshold
    );
    println!();

    let l = &report.logistics;
    println!("Logistics");
    println!("=========");
    println!("  Dry mass:        {:.0} kg", l.dry_mass);
    println!("  Propellant:      {:.0} kg", l.propellant_mass);
    println!("  Delivery mass:   {:.0} kg", l.total_delivery_mass);
    println!("  Structure:       {:.0} kg", l.structure_mass);
    println!("  Payload:         {:.0} kg", l.payload_mass);
    println!("  Vehicle:         {}", l.vehicle_label);
    println!("  Launch windows:  {}", l.launch_windows.join(", "));
}
