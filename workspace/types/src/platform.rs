use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PlatformError {
    #[error("Unsupported platform: {0}")]
    Unsupported(String),
}

/// Operating system family a build profile targets
///
/// The lower-case name is what ends up in configuration files and
/// in the `platform` field handed to the build orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Linux,
    Darwin,
    Windows,
    /// Windows binaries cross-compiled with a MinGW-w64 toolchain
    Mingw,
    Solaris,
    Freebsd,
    Openbsd,
}

impl Platform {
    pub const ALL: [Platform; 7] = [
        Platform::Linux,
        Platform::Darwin,
        Platform::Windows,
        Platform::Mingw,
        Platform::Solaris,
        Platform::Freebsd,
        Platform::Openbsd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Linux => "linux",
            Platform::Darwin => "darwin",
            Platform::Windows => "windows",
            Platform::Mingw => "mingw",
            Platform::Solaris => "solaris",
            Platform::Freebsd => "freebsd",
            Platform::Openbsd => "openbsd",
        }
    }

    /// Windows builds are driven by a CMake generator, not by make/tar.
    pub fn uses_make_tools(&self) -> bool {
        !matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| PlatformError::Unsupported(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("linux", Platform::Linux)]
    #[test_case("darwin", Platform::Darwin)]
    #[test_case("windows", Platform::Windows)]
    #[test_case("mingw", Platform::Mingw)]
    #[test_case("solaris", Platform::Solaris)]
    #[test_case("freebsd", Platform::Freebsd)]
    #[test_case("openbsd", Platform::Openbsd)]
    fn parses_known_platforms(name: &str, expected: Platform) {
        assert_eq!(name.parse::<Platform>(), Ok(expected));
        assert_eq!(expected.to_string(), name);
    }

    #[test]
    fn rejects_unknown_platform() {
        assert_eq!(
            "haiku".parse::<Platform>(),
            Err(PlatformError::Unsupported("haiku".to_string()))
        );
    }

    #[test]
    fn only_windows_skips_make_tools() {
        for platform in Platform::ALL {
            assert_eq!(platform.uses_make_tools(), platform != Platform::Windows);
        }
    }
}
