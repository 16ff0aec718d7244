use clap::Args;
use colored::*;
use seminar_common::config::Config;
use seminar_core::Rectangle;

use crate::terminal::{colors, format, print};

#[derive(Args)]
pub struct RectangleArgs {
    /// Width of the rectangle
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: f64,

    /// Height of the rectangle; defaults to the width
    #[arg(short = 'H', long, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Add another rectangle, given as W or WxH
    #[arg(long, value_name = "W[xH]")]
    pub add: Option<String>,

    /// Subtract another rectangle, given as W or WxH
    #[arg(long, value_name = "W[xH]")]
    pub sub: Option<String>,

    /// Compare areas with another rectangle, given as W or WxH
    #[arg(long, value_name = "W[xH]")]
    pub compare: Option<String>,
}

pub fn rectangle(args: RectangleArgs, cfg: &Config) -> anyhow::Result<()> {
    let rect = match args.height {
        Some(height) => Rectangle::new(args.width, height)?,
        None => Rectangle::square(args.width)?,
    };

    print::header("rectangle", cfg.quiet);
    show(&rect, cfg);

    if let Some(raw) = &args.add {
        let other: Rectangle = raw.parse()?;
        let sum = (rect + other)?;
        print::header("sum", cfg.quiet);
        result_line(&format!("{rect:#} + {other:#} = {sum:#}"), cfg);
        show(&sum, cfg);
    }

    if let Some(raw) = &args.sub {
        let other: Rectangle = raw.parse()?;
        let difference = (rect - other)?;
        print::header("difference", cfg.quiet);
        result_line(&format!("{rect:#} - {other:#} = {difference:#}"), cfg);
        show(&difference, cfg);
    }

    if let Some(raw) = &args.compare {
        let other: Rectangle = raw.parse()?;
        let symbol = format::ordering_symbol(rect.cmp(&other));
        print::header("comparison", cfg.quiet);
        result_line(
            &format!("{rect:#} {} {other:#} (areas {} and {})", symbol, rect.area(), other.area()),
            cfg,
        );
    }

    print::fat_separator(cfg.quiet);
    Ok(())
}

fn show(rect: &Rectangle, cfg: &Config) {
    match cfg.quiet {
        2 => {}
        _ => print::details(format::rectangle_details(rect)),
    }
}

fn result_line(line: &str, cfg: &Config) {
    match cfg.quiet {
        2 => print::print(line),
        _ => print::print_status(format!("{}", line.color(colors::ACCENT))),
    }
}
