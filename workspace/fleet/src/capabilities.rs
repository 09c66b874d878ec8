//! Which sub-projects a worker builds.
//!
//! The predicates changed over the life of the fleet (the `code` guard on
//! luametatex, the luatex and texlive exclusions), so they are data in
//! [`CapabilityRules`] rather than hard-coded. [`CapabilityRules::latest`]
//! is the rule set used by the built-in fleet.

use serde::{Deserialize, Serialize};
use std::{fmt, ops::Index};
use types::platform::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Luametatex,
    Pplib,
    Luatex,
    Texlive,
}

impl Component {
    pub const ALL: [Component; 4] = [
        Component::Luametatex,
        Component::Pplib,
        Component::Luatex,
        Component::Texlive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Luametatex => "luametatex",
            Component::Pplib => "pplib",
            Component::Luatex => "luatex",
            Component::Texlive => "texlive",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    pub luametatex: bool,
    pub pplib: bool,
    pub luatex: bool,
    pub texlive: bool,
}

impl Capabilities {
    pub fn get(&self, component: Component) -> bool {
        match component {
            Component::Luametatex => self.luametatex,
            Component::Pplib => self.pplib,
            Component::Luatex => self.luatex,
            Component::Texlive => self.texlive,
        }
    }

    pub fn enabled(&self) -> impl Iterator<Item = Component> + '_ {
        Component::ALL
            .into_iter()
            .filter(move |component| self.get(*component))
    }
}

impl Index<Component> for Capabilities {
    type Output = bool;

    fn index(&self, component: Component) -> &bool {
        match component {
            Component::Luametatex => &self.luametatex,
            Component::Pplib => &self.pplib,
            Component::Luatex => &self.luatex,
            Component::Texlive => &self.texlive,
        }
    }
}

/// Parameters of the capability predicates
///
/// ```text
/// luametatex = platform in luametatex_platforms && no excluded marker in name
///              && (luametatex_codes is empty || code in luametatex_codes)
/// pplib      = platform in pplib_platforms && no excluded marker in name
/// luatex     = !(platform in luatex_excluded_platforms || arch in luatex_excluded_arches)
/// texlive    = !(platform in texlive_excluded_platforms || name in texlive_excluded_names)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityRules {
    pub luametatex_platforms: Vec<Platform>,
    /// Worker codes allowed to build luametatex; empty allows every code
    pub luametatex_codes: Vec<String>,
    pub pplib_platforms: Vec<Platform>,
    /// Substrings of the artifact name that disable luametatex and pplib
    pub excluded_name_markers: Vec<String>,
    pub luatex_excluded_platforms: Vec<Platform>,
    pub luatex_excluded_arches: Vec<String>,
    pub texlive_excluded_platforms: Vec<Platform>,
    pub texlive_excluded_names: Vec<String>,
}

impl CapabilityRules {
    pub fn latest() -> Self {
        CapabilityRules {
            luametatex_platforms: vec![
                Platform::Darwin,
                Platform::Freebsd,
                Platform::Openbsd,
                Platform::Linux,
                Platform::Mingw,
                Platform::Windows,
            ],
            luametatex_codes: vec!["prg".to_string()],
            pplib_platforms: vec![
                Platform::Darwin,
                Platform::Freebsd,
                Platform::Openbsd,
                Platform::Linux,
            ],
            excluded_name_markers: vec!["debian8".to_string()],
            luatex_excluded_platforms: vec![Platform::Windows],
            luatex_excluded_arches: vec!["sparc".to_string()],
            texlive_excluded_platforms: vec![Platform::Mingw, Platform::Windows],
            texlive_excluded_names: vec!["darwin10-x86_64.prg".to_string()],
        }
    }

    fn has_excluded_marker(&self, name: &str) -> bool {
        self.excluded_name_markers
            .iter()
            .any(|marker| name.contains(marker.as_str()))
    }

    pub fn derive(&self, platform: Platform, arch: &str, name: &str, code: &str) -> Capabilities {
        let excluded = self.has_excluded_marker(name);

        let luametatex = self.luametatex_platforms.contains(&platform)
            && !excluded
            && (self.luametatex_codes.is_empty() || self.luametatex_codes.iter().any(|c| c == code));
        let pplib = self.pplib_platforms.contains(&platform) && !excluded;
        let luatex = !(self.luatex_excluded_platforms.contains(&platform)
            || self.luatex_excluded_arches.iter().any(|a| a == arch));
        let texlive = !(self.texlive_excluded_platforms.contains(&platform)
            || self.texlive_excluded_names.iter().any(|n| n == name));

        Capabilities {
            luametatex,
            pplib,
            luatex,
            texlive,
        }
    }
}

impl Default for CapabilityRules {
    fn default() -> Self {
        CapabilityRules::latest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("linux-x86_64-debian8.prg", false ; "debian8 is excluded")]
    #[test_case("linux-x86_64-debian9.prg", true ; "debian9 is included")]
    fn pplib_skips_debian8(name: &str, expected: bool) {
        let build = CapabilityRules::latest().derive(Platform::Linux, "x86_64", name, "prg");
        assert_eq!(build[Component::Pplib], expected);
        assert_eq!(build[Component::Luametatex], expected);
    }

    #[test]
    fn windows_builds_neither_texlive_nor_luatex() {
        let build =
            CapabilityRules::latest().derive(Platform::Windows, "x86_64", "windows-x86_64.prg", "prg");
        assert!(!build.texlive);
        assert!(!build.luatex);
        assert!(!build.pplib);
        assert!(build.luametatex);
    }

    #[test]
    fn luametatex_requires_prg_code() {
        let rules = CapabilityRules::latest();
        let tho = rules.derive(Platform::Darwin, "x86_64", "darwin10-x86_64.tho", "tho");
        let prg = rules.derive(Platform::Darwin, "x86_64", "darwin10-x86_64.prg", "prg");
        assert!(!tho.luametatex);
        assert!(prg.luametatex);
    }

    #[test]
    fn luametatex_without_code_guard() {
        let rules = CapabilityRules {
            luametatex_codes: Vec::new(),
            ..CapabilityRules::latest()
        };
        let build = rules.derive(Platform::Darwin, "x86_64", "darwin10-x86_64.tho", "tho");
        assert!(build.luametatex);
    }

    #[test]
    fn sparc_skips_luatex() {
        let build =
            CapabilityRules::latest().derive(Platform::Solaris, "sparc", "solaris-sparc.csw", "csw");
        assert_eq!(build, Capabilities {
            luametatex: false,
            pplib: false,
            luatex: false,
            texlive: true,
        });
    }

    #[test_case(Platform::Mingw, "mingw-x86_64.prg", false)]
    #[test_case(Platform::Darwin, "darwin10-x86_64.prg", false)]
    #[test_case(Platform::Darwin, "darwin10-x86_64.tho", true)]
    #[test_case(Platform::Linux, "linux-aarch64-ubuntu.prg", true)]
    fn texlive_exclusions(platform: Platform, name: &str, expected: bool) {
        let code = name.rsplit('.').next().unwrap();
        let build = CapabilityRules::latest().derive(platform, "x86_64", name, code);
        assert_eq!(build.texlive, expected);
    }

    #[test]
    fn derive_is_deterministic() {
        let rules = CapabilityRules::latest();
        let first = rules.derive(Platform::Openbsd, "amd64", "openbsd-amd64-6.8.prg", "prg");
        for _ in 0..10 {
            assert_eq!(
                rules.derive(Platform::Openbsd, "amd64", "openbsd-amd64-6.8.prg", "prg"),
                first
            );
        }
    }

    #[test]
    fn enabled_lists_components_in_order() {
        let build = Capabilities {
            luametatex: true,
            pplib: false,
            luatex: true,
            texlive: true,
        };
        let enabled: Vec<_> = build.enabled().collect();
        assert_eq!(
            enabled,
            vec![Component::Luametatex, Component::Luatex, Component::Texlive]
        );
    }

    #[test]
    fn partial_rules_fall_back_to_latest() {
        let rules: CapabilityRules = toml::from_str(r#"luametatex_codes = ["csw"]"#).unwrap();
        assert_eq!(rules.luametatex_codes, vec!["csw".to_string()]);
        assert_eq!(rules.pplib_platforms, CapabilityRules::latest().pplib_platforms);
    }
}
