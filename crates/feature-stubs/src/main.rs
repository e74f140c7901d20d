//! feature-stubs - Generate test stubs from feature files.

use clap::Parser;
use miette::Result;
use std::process::ExitCode;

mod cli;
mod config;
mod error;
mod logging;
mod orchestrator;
mod output;
mod paths;

use cli::Args;
use config::Config;
use orchestrator::Orchestrator;

fn main() -> ExitCode {
    let args = Args::parse();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::load(&args)?;
    logging::init_logging(&config);

    let orchestrator = Orchestrator::new(config);
    orchestrator.run()?;
    Ok(())
}
