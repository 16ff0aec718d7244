pub mod archive;
pub mod employee;
pub mod rectangle;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use seminar_common::config::{Config, Exercise};

#[derive(Parser)]
#[command(name = "seminar")]
#[command(about = "Rectangle, archive and employee exercises.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory for the per-exercise log files
    #[arg(long, global = true, default_value = ".")]
    pub log_dir: PathBuf,

    /// Do not write a log file
    #[arg(long, global = true)]
    pub no_log_file: bool,

    /// Reduce output; repeat for less (-qq prints results only)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a rectangle and optionally combine or compare it with another one
    #[command(alias = "r")]
    Rectangle(rectangle::RectangleArgs),
    /// Feed TEXT=NUMBER records into the archive
    #[command(alias = "a")]
    Archive(archive::ArchiveArgs),
    /// Hire an employee and optionally raise their salary
    #[command(alias = "e")]
    Employee(employee::EmployeeArgs),
}

impl Commands {
    pub fn exercise(&self) -> Exercise {
        match self {
            Commands::Rectangle(_) => Exercise::Rectangle,
            Commands::Archive(_) => Exercise::Archive,
            Commands::Employee(_) => Exercise::Employee,
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            log_dir: self.log_dir.clone(),
            no_log_file: self.no_log_file,
            quiet: self.quiet,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn test_parse_rectangle() {
        let cli = CommandLine::try_parse_from(["seminar", "r", "-w", "5", "-H", "4", "--add", "3"]).unwrap();
        assert_eq!(cli.command.exercise(), Exercise::Rectangle);
        let Commands::Rectangle(args) = cli.command else {
            panic!("expected rectangle command");
        };
        assert_eq!(args.width, 5.0);
        assert_eq!(args.height, Some(4.0));
        assert_eq!(args.add.as_deref(), Some("3"));
    }

    #[test]
    fn test_parse_negative_width() {
        let cli = CommandLine::try_parse_from(["seminar", "rectangle", "--width", "-5"]).unwrap();
        let Commands::Rectangle(args) = cli.command else {
            panic!("expected rectangle command");
        };
        assert_eq!(args.width, -5.0);
        assert_eq!(args.height, None);
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = CommandLine::try_parse_from([
            "seminar", "archive", "a=1", "b=2", "-qq", "--log-dir", "/tmp/x", "--no-log-file",
        ])
        .unwrap();
        let cfg = cli.config();
        assert_eq!(cfg.quiet, 2);
        assert!(cfg.no_log_file);
        assert_eq!(cfg.log_dir, PathBuf::from("/tmp/x"));
        assert_eq!(cli.command.exercise(), Exercise::Archive);
    }

    #[test]
    fn test_parse_employee_underscore_aliases() {
        let cli = CommandLine::try_parse_from([
            "seminar", "employee", "--last_name", "ivanov", "--first_name", "ivan",
            "-p", "ivanovich", "-a", "30", "-P", "manager", "-s", "200000", "--raise", "30",
        ])
        .unwrap();
        let Commands::Employee(args) = cli.command else {
            panic!("expected employee command");
        };
        assert_eq!(args.last_name, "ivanov");
        assert_eq!(args.first_name, "ivan");
        assert_eq!(args.age, 30);
        assert_eq!(args.raise, Some(30.0));
        assert!(!args.birthday);
    }

    #[test]
    fn test_missing_width_is_rejected() {
        assert!(CommandLine::try_parse_from(["seminar", "rectangle"]).is_err());
    }
}
