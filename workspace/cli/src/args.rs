use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(author, version, about)]
pub struct FleetBuilderArgs {
    /// location of a fleet definition, either full path
    /// or directory where fleet.toml is located
    /// if not given the built-in fleet is used
    #[clap(long, global = true)]
    pub config: Option<String>,

    #[clap(subcommand)]
    pub action: ActionType,
}

#[derive(Debug, Subcommand)]
pub enum ActionType {
    /// list profile names
    Profiles,
    /// show a single profile
    Profile(NameCommand),
    /// list active workers in dispatch order
    Workers(WorkersCommand),
    /// show the worker producing an artifact
    Worker(NameCommand),
    /// list platform names registered downstream
    Platforms,
    /// print the resolved fleet as TOML
    Dump,
    /// print the built-in fleet as a fleet.toml definition
    Init,
    /// check naming and uniqueness of every worker
    Validate,
    // fleet-builder version
    Version,
}

#[derive(Debug, Args)]
pub struct NameCommand {
    pub name: String,
}

#[derive(Debug, Args)]
pub struct WorkersCommand {
    /// only workers whose binaries are published
    #[clap(long)]
    pub uploadable: bool,

    /// only workers running on this machine
    #[clap(long, conflicts_with = "uploadable")]
    pub machine: Option<String>,
}
