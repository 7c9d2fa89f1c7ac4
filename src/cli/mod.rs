use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::application::SyncService;

const DEFAULT_PATH: &str = "delivery/README.md";

/// todo-hours - Markdown TODO hour tally
#[derive(Parser)]
#[command(name = "todo-hours")]
#[command(about = "Sum TODO hours from markdown files with section subtotals")]
#[command(version)]
#[command(after_help = "The tool looks for TODO items matching: - [ ] ... <N>h\n\
    And expects a total line: Total planned hours from TODO items: <N>h")]
pub struct Cli {
    /// Path to file to parse
    #[arg(default_value = DEFAULT_PATH)]
    pub path: PathBuf,

    /// Replace the total-hours line in place with the computed sum
    #[arg(short, long)]
    pub write: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let service = SyncService::new(&self.path, self.write);
        let outcome = service.run()?;

        if self.verbose {
            tracing::info!(
                path = %self.path.display(),
                matched = outcome.report.matched_lines,
                total = outcome.report.total_hours,
                sections = outcome.report.subtotals.len(),
                "scan complete"
            );
        }

        println!("matched_lines={}", outcome.report.matched_lines);
        println!("total_hours={}", outcome.report.total_hours);
        println!("total_line_matches={}", usize::from(outcome.summary_found));
        for (section, subtotal) in &outcome.report.subtotals {
            println!("subtotal[{section}]={subtotal}");
        }
        if self.write {
            println!("updated={}", if outcome.updated { "yes" } else { "no" });
        }

        Ok(())
    }
}
