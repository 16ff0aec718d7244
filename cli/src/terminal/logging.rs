use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::Context;
use colored::*;
use seminar_common::config::{Config, Exercise};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::{EnvFilter, LevelFilter, Targets};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Events on this target are user-facing output, written without decoration
/// and kept out of the log file.
pub const PRINT_TARGET: &str = "seminar::print";

const ENV_FILTER: &str = "SEMINAR_LOG";

/// Terminal format: a colored status symbol followed by the message.
pub struct SeminarFormatter;

impl<S, N> FormatEvent<S, N> for SeminarFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() != PRINT_TARGET {
            let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            };
            write!(writer, "{} ", color_func(symbol.into()))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Log file format: `LEVEL - time. message`.
pub struct LogFileFormatter;

impl<S, N> FormatEvent<S, N> for LogFileFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} - ", event.metadata().level())?;
        SystemTime.format_time(&mut writer)?;
        write!(writer, ". ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Terminal filter: user-facing output plus command-level warnings.
///
/// Domain events stay out of the terminal unless `SEMINAR_LOG` asks for
/// them; their errors reach the user through the command's return value.
fn terminal_filter() -> anyhow::Result<EnvFilter> {
    let filter = EnvFilter::try_from_env(ENV_FILTER)
        .unwrap_or_else(|_| EnvFilter::new("off,seminar::commands=warn"))
        .add_directive(format!("{PRINT_TARGET}=info").parse()?);
    Ok(filter)
}

/// Log file filter: INFO and above from everywhere except user-facing output.
fn file_filter() -> Targets {
    Targets::new()
        .with_default(LevelFilter::INFO)
        .with_target(PRINT_TARGET, LevelFilter::OFF)
}

/// Installs the global subscriber: colored terminal output plus, unless
/// disabled, an append-only log file for the given exercise.
pub fn init_logging(cfg: &Config, exercise: Exercise) -> anyhow::Result<()> {
    let terminal_layer = tracing_subscriber::fmt::layer()
        .event_format(SeminarFormatter)
        .with_filter(terminal_filter()?);

    let file_layer = if cfg.no_log_file {
        None
    } else {
        fs::create_dir_all(&cfg.log_dir)
            .with_context(|| format!("failed to create log directory {}", cfg.log_dir.display()))?;

        let path = cfg.log_path(exercise);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;

        Some(
            tracing_subscriber::fmt::layer()
                .event_format(LogFileFormatter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .with_filter(file_filter()),
        )
    };

    tracing_subscriber::registry()
        .with(terminal_layer)
        .with(file_layer)
        .try_init()?;

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
