use log::{debug, info};
use semver::Version;
use serde::{Deserialize, Serialize};
use types::{
    config::{ConfigError, ConfigType, FleetHeader},
    defaults::CONFIG_FILE_NAME,
};

use crate::{
    builtin::{builder_list, builder_profiles},
    capabilities::CapabilityRules,
    error::FleetError,
    profile::{BuilderProfile, ProfileTable},
    worker::{BuildWorker, WorkerSpec},
};

/// Fleet definition as written in `fleet.toml`
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct FleetDefinition {
    pub fleet: FleetHeader,
    #[serde(default)]
    pub rules: CapabilityRules,
    #[serde(default)]
    pub workers: Vec<WorkerSpec>,
    pub profiles: ProfileTable,
}

impl ConfigType for FleetDefinition {
    fn default_config_path() -> &'static str {
        CONFIG_FILE_NAME
    }
}

impl FleetDefinition {
    /// The built-in tables, stamped with `builder_version`
    pub fn builtin(builder_version: Version) -> Result<Self, FleetError> {
        Ok(FleetDefinition {
            fleet: FleetHeader { builder_version },
            rules: CapabilityRules::latest(),
            workers: builder_list(),
            profiles: builder_profiles()?,
        })
    }

    pub fn to_toml(&self) -> Result<String, FleetError> {
        toml::to_string(self).map_err(|err| FleetError::Config(ConfigError::from(err)))
    }

    pub fn into_fleet(self) -> Result<Fleet, FleetError> {
        Fleet::build(self.profiles, self.workers, self.rules)
    }
}

/// Resolved fleet: profiles plus the workers built from them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fleet {
    rules: CapabilityRules,
    workers: Vec<BuildWorker>,
    disabled: Vec<BuildWorker>,
    profiles: ProfileTable,
}

/// Shape of a dumped [`Fleet`]; re-resolved before it is trusted
#[derive(Deserialize)]
struct FleetDump {
    rules: CapabilityRules,
    workers: Vec<BuildWorker>,
    #[serde(default)]
    disabled: Vec<BuildWorker>,
    profiles: ProfileTable,
}

impl Fleet {
    /// Resolves every spec against `profiles`
    ///
    /// Fails on the first spec naming a profile that does not exist; a
    /// partially resolved fleet is never returned.
    pub fn build(
        profiles: ProfileTable,
        specs: Vec<WorkerSpec>,
        rules: CapabilityRules,
    ) -> Result<Self, FleetError> {
        let mut workers = Vec::with_capacity(specs.len());
        let mut disabled = Vec::new();

        for spec in specs {
            let profile = profiles
                .get_profile(&spec.profile)
                .map_err(|_| FleetError::UnknownProfile {
                    worker: spec.name.clone(),
                    profile: spec.profile.clone(),
                })?;

            let enabled = spec.enabled;
            let worker = BuildWorker::new(spec, profile, &rules);
            if enabled {
                debug!(
                    "Resolved worker {} on {} with profile {}",
                    worker.name, worker.worker, worker.profile
                );
                workers.push(worker);
            } else {
                debug!("Worker {} is disabled", worker.name);
                disabled.push(worker);
            }
        }

        info!(
            "Loaded {} profiles and {} workers ({} disabled)",
            profiles.len(),
            workers.len(),
            disabled.len()
        );

        Ok(Fleet {
            rules,
            workers,
            disabled,
            profiles,
        })
    }

    pub fn builtin() -> Result<Self, FleetError> {
        Fleet::build(builder_profiles()?, builder_list(), CapabilityRules::latest())
    }

    pub fn get_profile(&self, name: &str) -> Result<&BuilderProfile, FleetError> {
        self.profiles.get_profile(name)
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Active workers in declaration order
    pub fn list_workers(&self) -> &[BuildWorker] {
        &self.workers
    }

    pub fn disabled_workers(&self) -> &[BuildWorker] {
        &self.disabled
    }

    pub fn worker_by_name(&self, name: &str) -> Result<&BuildWorker, FleetError> {
        self.workers
            .iter()
            .find(|worker| worker.name == name)
            .ok_or_else(|| FleetError::WorkerNotFound(name.to_string()))
    }

    pub fn workers_for_machine<'a>(
        &'a self,
        machine: &'a str,
    ) -> impl Iterator<Item = &'a BuildWorker> + 'a {
        self.workers
            .iter()
            .filter(move |worker| worker.worker == machine)
    }

    pub fn uploadable_workers(&self) -> impl Iterator<Item = &BuildWorker> {
        self.workers.iter().filter(|worker| worker.upload)
    }

    /// Downstream platform names of the active workers, first occurrence wins
    pub fn registered_platforms(&self) -> Vec<&str> {
        let mut platforms: Vec<&str> = Vec::new();
        for tlname in self.workers.iter().filter_map(|worker| worker.tlname.as_deref()) {
            if !platforms.contains(&tlname) {
                platforms.push(tlname);
            }
        }
        platforms
    }

    pub fn to_toml(&self) -> Result<String, FleetError> {
        toml::to_string(self).map_err(|err| FleetError::Config(ConfigError::from(err)))
    }

    /// Parses a dump produced by [`Fleet::to_toml`]
    ///
    /// The workers are resolved again against the dumped profiles and rules,
    /// so a dangling profile key fails with `UnknownProfile` and a worker
    /// whose copied fields or capabilities were edited fails with
    /// `WorkerMismatch`.
    pub fn from_toml(content: &str) -> Result<Self, FleetError> {
        let dump: FleetDump =
            toml::from_str(content).map_err(|err| FleetError::Config(ConfigError::from(err)))?;

        let specs = dump
            .workers
            .iter()
            .map(|worker| worker.spec(true))
            .chain(dump.disabled.iter().map(|worker| worker.spec(false)))
            .collect();
        let fleet = Fleet::build(dump.profiles, specs, dump.rules)?;

        let dumped = dump.workers.iter().chain(dump.disabled.iter());
        let resolved = fleet.workers.iter().chain(fleet.disabled.iter());
        if let Some((worker, _)) = dumped.zip(resolved).find(|(dumped, resolved)| dumped != resolved) {
            return Err(FleetError::WorkerMismatch(worker.name.clone()));
        }

        Ok(fleet)
    }
}
