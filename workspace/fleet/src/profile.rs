use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use types::{
    defaults::{DEFAULT_CMAKE_GENERATOR, DEFAULT_CMD_MAKE, DEFAULT_CMD_TAR},
    env::{CmakeDefs, Env},
    platform::Platform,
};

use crate::error::FleetError;

fn default_cmd_make() -> String {
    DEFAULT_CMD_MAKE.to_string()
}

fn default_cmd_tar() -> String {
    DEFAULT_CMD_TAR.to_string()
}

fn default_cmake_generator() -> String {
    DEFAULT_CMAKE_GENERATOR.to_string()
}

/// Toolchain and environment shared by every worker built on it
///
/// Only `platform` is required; the remaining fields fall back to an empty
/// environment, no CMake defines, `make`, `tar` and the Ninja generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuilderProfile {
    pub platform: Platform,
    #[serde(default)]
    pub env: Env,
    #[serde(default)]
    pub cmake_defs: CmakeDefs,
    #[serde(default = "default_cmd_make")]
    pub cmd_make: String,
    #[serde(default = "default_cmd_tar")]
    pub cmd_tar: String,
    #[serde(default = "default_cmake_generator")]
    pub cmake_generator: String,
}

impl BuilderProfile {
    pub fn new(platform: Platform) -> Self {
        BuilderProfile {
            platform,
            env: Env::new(),
            cmake_defs: CmakeDefs::new(),
            cmd_make: default_cmd_make(),
            cmd_tar: default_cmd_tar(),
            cmake_generator: default_cmake_generator(),
        }
    }

    pub fn env(mut self, env: Env) -> Self {
        self.env = env;
        self
    }

    pub fn cmake_defs(mut self, cmake_defs: CmakeDefs) -> Self {
        self.cmake_defs = cmake_defs;
        self
    }

    pub fn cmd_make(mut self, cmd_make: &str) -> Self {
        self.cmd_make = cmd_make.to_string();
        self
    }

    pub fn cmd_tar(mut self, cmd_tar: &str) -> Self {
        self.cmd_tar = cmd_tar.to_string();
        self
    }

    pub fn cmake_generator(mut self, cmake_generator: &str) -> Self {
        self.cmake_generator = cmake_generator.to_string();
        self
    }
}

/// Named profiles, looked up when workers are resolved
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileTable(BTreeMap<String, BuilderProfile>);

impl ProfileTable {
    pub fn get_profile(&self, name: &str) -> Result<&BuilderProfile, FleetError> {
        self.0
            .get(name)
            .ok_or_else(|| FleetError::ProfileNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, BuilderProfile)> for ProfileTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, BuilderProfile)>>(iter: I) -> Self {
        ProfileTable(
            iter.into_iter()
                .map(|(name, profile)| (name.to_string(), profile))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_from_platform_only_uses_defaults() {
        let profile = BuilderProfile::new(Platform::Linux);
        assert!(profile.env.is_empty());
        assert!(profile.cmake_defs.is_empty());
        assert_eq!(profile.cmd_make, "make");
        assert_eq!(profile.cmd_tar, "tar");
        assert_eq!(profile.cmake_generator, "Ninja");
    }

    #[test]
    fn parses_profile_with_only_platform() {
        let profile: BuilderProfile = toml::from_str(r#"platform = "freebsd""#).unwrap();
        assert_eq!(profile, BuilderProfile::new(Platform::Freebsd));
    }

    #[test]
    fn builder_methods_override_defaults() {
        let profile = BuilderProfile::new(Platform::Solaris)
            .cmd_make("gmake")
            .cmd_tar("gtar");
        assert_eq!(profile.cmd_make, "gmake");
        assert_eq!(profile.cmd_tar, "gtar");
        assert_eq!(profile.cmake_generator, "Ninja");
    }

    #[test]
    fn get_profile_reports_missing_name() {
        let table: ProfileTable = [("linux", BuilderProfile::new(Platform::Linux))]
            .into_iter()
            .collect();

        assert!(table.get_profile("linux").is_ok());
        assert!(matches!(
            table.get_profile("haiku"),
            Err(FleetError::ProfileNotFound(name)) if name == "haiku"
        ));
    }
}
