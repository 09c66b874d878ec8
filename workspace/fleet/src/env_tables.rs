//! Environment and CMake define tables shared by the built-in profiles.
//!
//! Every function here builds a fresh map from literal templates; nothing
//! reads the environment of the running process.

use thiserror::Error;
use types::env::{CmakeDefs, Env, EnvValue};

#[derive(Debug, Error, PartialEq)]
pub enum EnvTableError {
    #[error("Unsupported darwin10 architecture: {0}")]
    UnsupportedDarwinArch(String),

    #[error("Unsupported word size: {0}-bit")]
    UnsupportedBits(u8),
}

const DARWIN10_CC: &str = "/opt/local/bin/clang-mp-10";
const DARWIN10_CXX: &str = "/opt/local/bin/clang++-mp-10 -stdlib=libc++";
const DARWIN10_TARGET: &str = "10.6";
const DARWIN10_SDK: &str = "10.6";
const DARWIN10_PYTHON: &str = "/opt/local/bin/python3.8";

const SOLARIS10_CC: &str = "/opt/csw/bin/gcc-5.5";
const SOLARIS10_CXX: &str = "/opt/csw/bin/g++-5.5";

fn env_from<const N: usize>(pairs: [(&str, EnvValue); N]) -> Env {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn defs_from<const N: usize>(pairs: [(&str, String); N]) -> CmakeDefs {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

fn check_bits(bits: u8) -> Result<u8, EnvTableError> {
    match bits {
        32 | 64 => Ok(bits),
        other => Err(EnvTableError::UnsupportedBits(other)),
    }
}

/// Universal clang toolchain from MacPorts targeting Mac OS X 10.6.
pub fn darwin10_env(arch: &str) -> Result<Env, EnvTableError> {
    if !matches!(arch, "i386" | "x86_64") {
        return Err(EnvTableError::UnsupportedDarwinArch(arch.to_string()));
    }

    let libdir = format!("-L/Developer/SDKs/MacOSX{}.sdk/usr/lib", DARWIN10_SDK);
    let sysroot = format!(
        "-isysroot /Developer/SDKs/MacOSX{}.sdk -mmacosx-version-min={}",
        DARWIN10_SDK, DARWIN10_TARGET
    );
    let ldflags = format!("{} {}", libdir, sysroot);

    let cc = format!("{} -arch {}", DARWIN10_CC, arch);
    let cxx = format!("{} -arch {}", DARWIN10_CXX, arch);
    let cflags = format!("-Os {}", sysroot);

    Ok(env_from([
        ("CC", cc.clone().into()),
        ("OBJC", cc.into()),
        ("CXX", cxx.clone().into()),
        ("OBJCXX", cxx.into()),
        ("CFLAGS", cflags.clone().into()),
        ("OBJCFLAGS", cflags.clone().into()),
        ("CXXFLAGS", cflags.clone().into()),
        ("OBJCXXFLAGS", cflags.into()),
        ("LDFLAGS", format!("-Os {}", ldflags).into()),
        ("STRIP", "strip -u -r".into()),
        ("PYTHON", DARWIN10_PYTHON.into()),
    ]))
}

/// OpenCSW gcc on Solaris 10; `/usr/ccs/bin` provides the SysV tools.
pub fn solaris10_env(bits: u8) -> Result<Env, EnvTableError> {
    let suffix = match check_bits(bits)? {
        64 => " -m64",
        _ => "",
    };

    Ok(env_from([
        ("CC", format!("{}{}", SOLARIS10_CC, suffix).into()),
        ("CXX", format!("{}{}", SOLARIS10_CXX, suffix).into()),
        ("PATH", EnvValue::list(["${PATH}", "/usr/ccs/bin"])),
    ]))
}

fn clang_env() -> Env {
    env_from([("CC", "clang".into()), ("CXX", "clang++".into())])
}

pub fn openbsd_env() -> Env {
    clang_env()
}

pub fn linux_clang_env() -> Env {
    clang_env()
}

pub fn freebsd_env() -> Env {
    Env::new()
}

pub fn linux_env() -> Env {
    Env::new()
}

/// Modern darwin workers use whatever toolchain is installed.
pub fn darwin_env() -> Env {
    Env::new()
}

/// Base environment for CMake driven MinGW cross builds; the toolchain
/// file selects the compilers.
pub fn mingw_any_env() -> Env {
    Env::new()
}

pub fn mingw_triplet(bits: u8) -> Result<&'static str, EnvTableError> {
    match check_bits(bits)? {
        32 => Ok("i686-w64-mingw32"),
        _ => Ok("x86_64-w64-mingw32"),
    }
}

/// Autotools driven MinGW cross build.
pub fn mingw_env(bits: u8) -> Result<Env, EnvTableError> {
    let triplet = mingw_triplet(bits)?;

    Ok(env_from([
        (
            "CFLAGS",
            "-mtune=nocona -g -O3 -fno-lto -fno-use-linker-plugin ${CFLAGS}".into(),
        ),
        (
            "CXXFLAGS",
            "-mtune=nocona -g -O3 -fno-lto -fno-use-linker-plugin ${CXXFLAGS}".into(),
        ),
        (
            "LDFLAGS",
            "${LDFLAGS} -fno-lto -fno-use-linker-plugin -static-libgcc -static-libstdc++".into(),
        ),
        ("RANLIB", format!("{}-ranlib", triplet).into()),
        ("STRIP", format!("{}-strip", triplet).into()),
    ]))
}

pub fn mingw_cmake_defs(bits: u8) -> Result<CmakeDefs, EnvTableError> {
    let bits = check_bits(bits)?;
    Ok(defs_from([(
        "CMAKE_TOOLCHAIN_FILE",
        format!("./cmake/mingw-{}.cmake", bits),
    )]))
}

pub fn windows_clang_cmake_defs() -> CmakeDefs {
    defs_from([("CMAKE_GENERATOR_TOOLSET", "ClangCL".to_string())])
}

pub fn windows_arm64_cmake_defs() -> CmakeDefs {
    defs_from([("CMAKE_GENERATOR_PLATFORM", "ARM64".to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("i386")]
    #[test_case("x86_64")]
    fn darwin10_env_interpolates_arch(arch: &str) {
        let env = darwin10_env(arch).unwrap();

        assert_eq!(
            env["CC"],
            EnvValue::from(format!("/opt/local/bin/clang-mp-10 -arch {}", arch))
        );
        assert_eq!(env["OBJC"], env["CC"]);
        assert_eq!(
            env["CXX"],
            EnvValue::from(format!(
                "/opt/local/bin/clang++-mp-10 -stdlib=libc++ -arch {}",
                arch
            ))
        );
        assert_eq!(env["OBJCXX"], env["CXX"]);
        assert_eq!(env.len(), 11);
    }

    #[test]
    fn darwin10_flags_target_the_10_6_sdk() {
        let env = darwin10_env("x86_64").unwrap();
        let sysroot = "-isysroot /Developer/SDKs/MacOSX10.6.sdk -mmacosx-version-min=10.6";

        for flags in ["CFLAGS", "OBJCFLAGS", "CXXFLAGS", "OBJCXXFLAGS"] {
            assert_eq!(env[flags], EnvValue::from(format!("-Os {}", sysroot)));
        }
        assert_eq!(
            env["LDFLAGS"],
            EnvValue::from(format!(
                "-Os -L/Developer/SDKs/MacOSX10.6.sdk/usr/lib {}",
                sysroot
            ))
        );
    }

    #[test]
    fn darwin10_env_rejects_unknown_arch() {
        assert_eq!(
            darwin10_env("arm64"),
            Err(EnvTableError::UnsupportedDarwinArch("arm64".to_string()))
        );
    }

    #[test]
    fn darwin10_env_is_deterministic() {
        assert_eq!(darwin10_env("i386"), darwin10_env("i386"));
    }

    #[test_case(32, "/opt/csw/bin/gcc-5.5", "/opt/csw/bin/g++-5.5")]
    #[test_case(64, "/opt/csw/bin/gcc-5.5 -m64", "/opt/csw/bin/g++-5.5 -m64")]
    fn solaris10_env_selects_word_size(bits: u8, cc: &str, cxx: &str) {
        let env = solaris10_env(bits).unwrap();
        assert_eq!(env["CC"], EnvValue::from(cc));
        assert_eq!(env["CXX"], EnvValue::from(cxx));
        assert_eq!(env["PATH"], EnvValue::list(["${PATH}", "/usr/ccs/bin"]));
    }

    #[test_case(32, "i686-w64-mingw32")]
    #[test_case(64, "x86_64-w64-mingw32")]
    fn mingw_env_uses_triplet_tools(bits: u8, triplet: &str) {
        let env = mingw_env(bits).unwrap();
        assert_eq!(env["RANLIB"], EnvValue::from(format!("{}-ranlib", triplet)));
        assert_eq!(env["STRIP"], EnvValue::from(format!("{}-strip", triplet)));
        assert!(env["CFLAGS"].render().ends_with("${CFLAGS}"));
        assert!(env["CXXFLAGS"].render().ends_with("${CXXFLAGS}"));
    }

    #[test]
    fn mingw_cmake_defs_point_at_distinct_toolchains() {
        let defs32 = mingw_cmake_defs(32).unwrap();
        let defs64 = mingw_cmake_defs(64).unwrap();
        assert_eq!(defs32["CMAKE_TOOLCHAIN_FILE"], "./cmake/mingw-32.cmake");
        assert_eq!(defs64["CMAKE_TOOLCHAIN_FILE"], "./cmake/mingw-64.cmake");
    }

    #[test]
    fn rejects_unsupported_word_size() {
        assert_eq!(mingw_env(16), Err(EnvTableError::UnsupportedBits(16)));
        assert_eq!(solaris10_env(128), Err(EnvTableError::UnsupportedBits(128)));
    }

    #[test]
    fn ambient_toolchain_profiles_are_empty() {
        assert!(darwin_env().is_empty());
        assert!(linux_env().is_empty());
        assert!(freebsd_env().is_empty());
        assert!(mingw_any_env().is_empty());
    }
}
