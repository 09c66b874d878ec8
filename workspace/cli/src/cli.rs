use super::args::{ActionType, FleetBuilderArgs};
use super::render::{ProfileDetails, WorkerDetails, WorkerLine};
use clap::Parser;
use env_logger::Env;
use fleet::error::FleetError;
use fleet::fleet::{Fleet, FleetDefinition};
use fleet::validation::Validation;
use fleet::worker::BuildWorker;
use log::{error, info};
use semver::Version;
use thiserror::Error;
use types::config::{ConfigError, ConfigFile};

#[derive(Error, Debug)]
pub enum FleetBuilderError {
    #[error(transparent)]
    FleetError(#[from] FleetError),

    #[error(transparent)]
    ConfigError(#[from] ConfigError),

    #[error("Invalid program version: {0}")]
    ProgramVersion(#[from] semver::Error),
}

type Result<T> = std::result::Result<T, FleetBuilderError>;

/// Loads the fleet from `config_path`, or the built-in tables when absent
pub fn load_fleet(config_path: Option<String>, program_version: &str) -> Result<Fleet> {
    match config_path {
        Some(path) => {
            let config_file = ConfigFile::<FleetDefinition>::load(Some(path))?;
            info!("Loading fleet definition {}", config_file.path.display());
            let mut definition = config_file.parse()?;
            definition.fleet = definition
                .fleet
                .validate_and_apply_defaults(program_version)?;
            Ok(definition.into_fleet()?)
        }
        None => Ok(Fleet::builtin()?),
    }
}

pub fn run_cli() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = FleetBuilderArgs::parse();
    let program_version: &str = env!("CARGO_PKG_VERSION");

    if let ActionType::Version = &args.action {
        let program_name: &str = env!("CARGO_PKG_NAME");

        println!("{} version: {}", program_name, program_version);
        return Ok(());
    }

    if let ActionType::Init = &args.action {
        let definition = FleetDefinition::builtin(Version::parse(program_version)?)?;
        print!("{}", definition.to_toml()?);
        return Ok(());
    }

    let fleet = load_fleet(args.config.clone(), program_version)?;

    match &args.action {
        ActionType::Profiles => {
            for name in fleet.profiles().names() {
                println!("{}", name);
            }
        }
        ActionType::Profile(command) => {
            let profile = fleet.get_profile(&command.name)?;
            print!(
                "{}",
                ProfileDetails {
                    name: &command.name,
                    profile,
                }
            );
        }
        ActionType::Workers(command) => {
            let workers: Vec<&BuildWorker> = match command.machine.as_deref() {
                Some(machine) => fleet.workers_for_machine(machine).collect(),
                None if command.uploadable => fleet.uploadable_workers().collect(),
                None => fleet.list_workers().iter().collect(),
            };
            for worker in workers {
                println!("{}", WorkerLine(worker));
            }
        }
        ActionType::Worker(command) => {
            let worker = fleet.worker_by_name(&command.name)?;
            print!("{}", WorkerDetails(worker));
        }
        ActionType::Platforms => {
            for platform in fleet.registered_platforms() {
                println!("{}", platform);
            }
        }
        ActionType::Dump => print!("{}", fleet.to_toml()?),
        ActionType::Validate => {
            if let Err(reports) = fleet.validate() {
                for report in &reports {
                    error!("{}", report);
                }
                return Err(FleetError::Validation(reports).into());
            }
            info!(
                "Fleet is valid: {} workers, {} profiles",
                fleet.list_workers().len(),
                fleet.profiles().len()
            );
        }
        ActionType::Init | ActionType::Version => {}
    }

    Ok(())
}
