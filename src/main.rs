use std::process;

use birb_grammar::config::{Config, Format, FORMAT_ENV, LOG_ENV};
use birb_grammar::logging::init_tracing;
use birb_grammar::report::{
    check, InterfaceReport, ModuleSummary, Render, TerminalsReport,
};
use birb_grammar::{find_module, select_modules};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser)]
#[command(name = "grammar-check")]
#[command(about = "Verify the import/export interface of grammar modules", long_about = None)]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, env = FORMAT_ENV, default_value_t = Format::Text)]
    format: Format,
    /// Log filter, e.g. `debug` or `grammar=debug` (defaults to RUST_LOG)
    #[arg(long, global = true, env = LOG_ENV)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify modules against their declared interface (all when none given)
    Check {
        modules: Vec<String>,
    },
    /// Print the terminal literals of a module
    Terminals {
        module: String,
    },
    /// Print the declared and inferred interface of a module
    Interface {
        module: String,
    },
    /// List the modules in the catalog
    List,
}

/// Run a command and return whether it succeeded.
fn run(command: Commands, config: &Config) -> anyhow::Result<bool> {
    match command {
        Commands::Check { modules } => {
            let modules = select_modules(&modules)?;
            let outcomes = check(&modules);
            let failed = outcomes.iter().filter(|o| !o.ok).count();
            info!(modules = outcomes.len(), failed, "checked grammar modules");
            print!("{}", outcomes.render(config.format)?);
            Ok(failed == 0)
        }
        Commands::Terminals { module } => {
            let module = find_module(&module)?;
            print!("{}", TerminalsReport::from_module(&module).render(config.format)?);
            Ok(true)
        }
        Commands::Interface { module } => {
            let module = find_module(&module)?;
            let report = InterfaceReport::from_module(&module);
            print!("{}", report.render(config.format)?);
            Ok(report.matches())
        }
        Commands::List => {
            let summaries: Vec<ModuleSummary> = surface::modules()
                .iter()
                .map(ModuleSummary::from_module)
                .collect();
            print!("{}", summaries.render(config.format)?);
            Ok(true)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = Config::new(cli.format, cli.log_level);

    if let Err(err) = init_tracing(config.log_level.as_deref()) {
        eprintln!("error: {:#}", err);
        process::exit(2);
    }

    match run(cli.command, &config) {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(1);
        }
    }
}
