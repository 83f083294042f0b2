use anyhow::bail;
use clap::Parser;
use tracing::debug;

use voyager_observe::{LoggerConfig, init_logger};

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = LoggerConfig {
        format: cli.log_format,
        level: cli.log_level.clone(),
        use_color: !cli.no_color,
        ..Default::default()
    };
    init_logger(&cfg)?;
    debug!(format = %cfg.format, level = cfg.level.as_str(), "logger initialized");

    let output = match cli.command {
        Command::Describe(args) => commands::describe(&args)?,
        Command::Parse { file } => commands::parse_input(file.as_deref())?,
        Command::Labels { service, label } => commands::labels(&service, &label)?,
        Command::CheckName { names } => {
            let report = commands::check_names(&names);
            if report.invalid > 0 {
                println!("{}", report.render());
                bail!("{} of {} resource names are invalid", report.invalid, names.len());
            }
            report.render()
        }
        Command::Schema => commands::schema()?,
    };
    println!("{output}");
    Ok(())
}
