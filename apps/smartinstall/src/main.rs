mod render;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use platform_authz::PermissionEngine;
use platform_config::{Settings, initialize_environment};
use platform_obs::{ObsConfig, init_tracing};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "smartinstall", version, about = "SmartInstall installment-sales back office")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a role may perform an action on a module.
    Check {
        role: String,
        module: String,
        action: String,
    },
    /// List roles and their display labels.
    Roles,
    /// Print the permission matrix.
    Matrix {
        #[arg(long, help = "Emit JSON instead of a table")]
        json: bool,
    },
    /// Create the resource, export and backup directories.
    Init,
    /// Print the effective settings summary.
    Config,
}

/// Exit status: 0 done, 1 permission denied, 2 operational error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Done,
    Denied,
}

impl Outcome {
    fn code(self) -> u8 {
        match self {
            Outcome::Done => 0,
            Outcome::Denied => 1,
        }
    }
}

const ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(outcome) => ExitCode::from(outcome.code()),
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn run(command: Command) -> Result<Outcome> {
    let settings = Settings::load();

    let obs = match &settings {
        // The log file sits in the base directory; skip it until that exists.
        Ok(settings) => ObsConfig {
            env_filter: Some(settings.logging.level.directive().to_string()),
            log_file: settings
                .paths
                .base_dir
                .is_dir()
                .then(|| settings.logging.file.clone()),
            ..ObsConfig::default()
        },
        Err(_) => ObsConfig::default(),
    };
    init_tracing(obs)?;
    if let Err(err) = &settings {
        warn!(error = %err, "settings unavailable, using defaults for logging");
    }

    execute(command, settings)
}

/// `check`, `roles` and `matrix` never consult `settings`.
fn execute(command: Command, settings: Result<Settings>) -> Result<Outcome> {
    let engine = PermissionEngine::default();
    match command {
        Command::Check {
            role,
            module,
            action,
        } => {
            if check(&engine, &role, &module, &action) {
                Ok(Outcome::Done)
            } else {
                Ok(Outcome::Denied)
            }
        }
        Command::Roles => {
            print!("{}", render::roles());
            Ok(Outcome::Done)
        }
        Command::Matrix { json } => {
            if json {
                let rendered = serde_json::to_string_pretty(engine.matrix())
                    .context("failed to encode permission matrix")?;
                println!("{rendered}");
            } else {
                print!("{}", render::matrix_table(engine.matrix()));
            }
            Ok(Outcome::Done)
        }
        Command::Init => {
            let settings = settings?;
            let ensured = initialize_environment(&settings.paths)?;
            for dir in &ensured {
                println!("{}", dir.display());
            }
            info!(count = ensured.len(), "environment initialized");
            Ok(Outcome::Done)
        }
        Command::Config => {
            let settings = settings?;
            print!("{}", render::settings_summary(&settings));
            Ok(Outcome::Done)
        }
    }
}

fn check(engine: &PermissionEngine, role: &str, module: &str, action: &str) -> bool {
    let granted = engine.check_permission(role, module, action);
    println!("{}", if granted { "granted" } else { "denied" });
    granted
}
