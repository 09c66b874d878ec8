use serde::{Deserialize, Serialize};
use types::{
    env::{CmakeDefs, Env},
    platform::Platform,
};

use crate::{
    capabilities::{Capabilities, CapabilityRules},
    profile::BuilderProfile,
};

fn default_enabled() -> bool {
    true
}

/// Declaration of a worker, before its profile is resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerSpec {
    /// Machine that runs the job
    pub worker: String,
    /// Maintainer/location group owning the machine
    pub code: String,
    /// Key into the profile table
    pub profile: String,
    /// Artifact name, `{os}-{arch}[-{distro}].{code}`
    pub name: String,
    pub arch: String,
    /// Platform name registered downstream; `None` builds without registering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tlname: Option<String>,
    #[serde(default)]
    pub upload: bool,
    /// Disabled workers stay declared but are not part of the active list
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl WorkerSpec {
    pub fn new(worker: &str, code: &str, profile: &str, name: &str, arch: &str) -> Self {
        WorkerSpec {
            worker: worker.to_string(),
            code: code.to_string(),
            profile: profile.to_string(),
            name: name.to_string(),
            arch: arch.to_string(),
            tlname: None,
            upload: false,
            enabled: true,
        }
    }

    pub fn tlname(mut self, tlname: &str) -> Self {
        self.tlname = Some(tlname.to_string());
        self
    }

    pub fn upload(mut self, upload: bool) -> Self {
        self.upload = upload;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// One build job: a profile applied to produce one named artifact
///
/// The profile-derived fields are copies taken when the worker is built,
/// so a worker never observes later edits to its profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildWorker {
    pub worker: String,
    pub code: String,
    pub profile: String,
    pub name: String,
    pub arch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tlname: Option<String>,
    pub upload: bool,

    pub platform: Platform,
    pub cmd_make: String,
    pub cmd_tar: String,
    pub cmake_generator: String,
    pub build: Capabilities,
    pub env: Env,
    pub cmake_defs: CmakeDefs,
}

impl BuildWorker {
    pub fn new(spec: WorkerSpec, profile: &BuilderProfile, rules: &CapabilityRules) -> Self {
        let build = rules.derive(profile.platform, &spec.arch, &spec.name, &spec.code);

        BuildWorker {
            worker: spec.worker,
            code: spec.code,
            profile: spec.profile,
            name: spec.name,
            arch: spec.arch,
            tlname: spec.tlname,
            upload: spec.upload,
            platform: profile.platform,
            env: profile.env.clone(),
            cmake_defs: profile.cmake_defs.clone(),
            cmd_make: profile.cmd_make.clone(),
            cmd_tar: profile.cmd_tar.clone(),
            cmake_generator: profile.cmake_generator.clone(),
            build,
        }
    }

    /// `None` on platforms that are not driven by make.
    pub fn make_command(&self) -> Option<&str> {
        self.platform
            .uses_make_tools()
            .then_some(self.cmd_make.as_str())
    }

    /// `None` on platforms that are not driven by make.
    pub fn tar_command(&self) -> Option<&str> {
        self.platform.uses_make_tools().then_some(self.cmd_tar.as_str())
    }

    /// The declaration this worker was built from
    pub fn spec(&self, enabled: bool) -> WorkerSpec {
        WorkerSpec {
            worker: self.worker.clone(),
            code: self.code.clone(),
            profile: self.profile.clone(),
            name: self.name.clone(),
            arch: self.arch.clone(),
            tlname: self.tlname.clone(),
            upload: self.upload,
            enabled,
        }
    }
}
