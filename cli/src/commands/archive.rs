use clap::Args;
use colored::*;
use seminar_common::config::Config;
use seminar_core::Archive;
use tracing::warn;

use crate::terminal::{colors, format, print};

#[derive(Args)]
pub struct ArchiveArgs {
    /// Records to archive, in order, as TEXT=NUMBER
    #[arg(required = true, value_name = "TEXT=NUMBER")]
    pub records: Vec<String>,
}

/// Feeds every record into the global archive.
///
/// Rejected records are reported and skipped; the command fails at the end
/// if any were rejected.
pub fn archive(args: ArchiveArgs, cfg: &Config) -> anyhow::Result<()> {
    print::header("archive", cfg.quiet);

    let mut rejected: usize = 0;
    for (idx, record) in args.records.iter().enumerate() {
        let Some((text, number)) = record.split_once('=') else {
            warn!("Skipping '{record}': expected TEXT=NUMBER");
            rejected += 1;
            continue;
        };

        if let Err(e) = Archive::with_global(|archive| archive.submit(text, number).map(|_| ())) {
            warn!("Skipping '{record}': {e}");
            rejected += 1;
            continue;
        }

        if cfg.quiet == 0 {
            print::tree_head(idx + 1, record);
        }
    }

    Archive::with_global(|archive| {
        print::header("archive contents", cfg.quiet);
        match cfg.quiet {
            2 => print::print(&archive.to_string()),
            _ => print::details(format::archive_details(archive)),
        }
    });
    print::fat_separator(cfg.quiet);

    if rejected > 0 {
        let unit: &str = if rejected == 1 { "record was" } else { "records were" };
        print::print_status(format!("{} {unit} rejected", rejected.to_string().color(colors::ACCENT)));
        anyhow::bail!("{rejected} of {} records rejected", args.records.len());
    }

    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
