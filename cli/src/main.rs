mod commands;
mod terminal;

use commands::{CommandLine, Commands, archive, employee, rectangle};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging(&cfg, commands.command.exercise())?;

    match commands.command {
        Commands::Rectangle(args) => rectangle::rectangle(args, &cfg),
        Commands::Archive(args) => archive::archive(args, &cfg),
        Commands::Employee(args) => employee::employee(args, &cfg),
    }
}
