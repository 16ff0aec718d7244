use std::fmt;
use std::path::{Path, PathBuf};

pub struct Config {
    /// Directory the per-exercise log files are written to.
    pub log_dir: PathBuf,
    /// Skips the log file entirely; terminal output is unaffected.
    pub no_log_file: bool,
    /// 0 prints headers and details, 1 hides headers, 2 prints only results.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            no_log_file: false,
            quiet: 0,
        }
    }
}

impl Config {
    /// Full path of the log file the given exercise appends to.
    pub fn log_path(&self, exercise: Exercise) -> PathBuf {
        self.log_dir.join(exercise.log_file_name())
    }
}

/// The three independent exercises, each with its own fixed log file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exercise {
    Rectangle,
    Archive,
    Employee,
}

impl Exercise {
    pub fn log_file_name(self) -> &'static Path {
        Path::new(match self {
            Exercise::Rectangle => "rectangle_info.txt",
            Exercise::Archive => "archive_info.txt",
            Exercise::Employee => "employee_info.txt",
        })
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Exercise::Rectangle => "rectangle",
            Exercise::Archive => "archive",
            Exercise::Employee => "employee",
        };
        f.write_str(name)
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

    #[test]
    fn test_log_path_joins_dir_and_file() {
        let cfg = Config {
            log_dir: PathBuf::from("/tmp/logs"),
            ..Config::default()
        };
        assert_eq!(
            cfg.log_path(Exercise::Rectangle),
            PathBuf::from("/tmp/logs/rectangle_info.txt")
        );
        assert_eq!(
            cfg.log_path(Exercise::Employee),
            PathBuf::from("/tmp/logs/employee_info.txt")
        );
    }

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.log_dir, PathBuf::from("."));
        assert!(!cfg.no_log_file);
        assert_eq!(cfg.quiet, 0);
    }

    #[test]
    fn test_exercise_display() {
        assert_eq!(Exercise::Archive.to_string(), "archive");
        assert_eq!(
            Exercise::Archive.log_file_name(),
            Path::new("archive_info.txt")
        );
    }
}
