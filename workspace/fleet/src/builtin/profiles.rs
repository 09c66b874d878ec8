use types::{
    env::{CmakeDefs, Env},
    platform::Platform,
};

use crate::{
    env_tables::{
        darwin10_env, darwin_env, freebsd_env, linux_clang_env, linux_env, mingw_any_env,
        mingw_cmake_defs, mingw_env, openbsd_env, solaris10_env, windows_arm64_cmake_defs,
        windows_clang_cmake_defs, EnvTableError,
    },
    profile::{BuilderProfile, ProfileTable},
};

const WINDOWS_GENERATOR: &str = "Visual Studio 16 2019";

fn gnu_tools(platform: Platform) -> BuilderProfile {
    BuilderProfile::new(platform).cmd_make("gmake").cmd_tar("gtar")
}

fn darwin(env: Env) -> BuilderProfile {
    BuilderProfile::new(Platform::Darwin)
        .env(env)
        .cmd_make("make")
        .cmd_tar("gnutar")
}

fn windows(cmake_defs: CmakeDefs) -> BuilderProfile {
    BuilderProfile::new(Platform::Windows)
        .cmake_generator(WINDOWS_GENERATOR)
        .cmake_defs(cmake_defs)
}

/// Builds the `builder_profiles` table.
pub fn builder_profiles() -> Result<ProfileTable, EnvTableError> {
    let profiles = [
        ("solaris10-sparc", gnu_tools(Platform::Solaris).env(solaris10_env(32)?)),
        ("solaris10-i386", gnu_tools(Platform::Solaris).env(solaris10_env(32)?)),
        ("solaris10-x86_64", gnu_tools(Platform::Solaris).env(solaris10_env(64)?)),
        ("freebsd", gnu_tools(Platform::Freebsd).env(freebsd_env())),
        ("openbsd", gnu_tools(Platform::Openbsd).env(openbsd_env())),
        (
            "linux",
            BuilderProfile::new(Platform::Linux)
                .env(linux_env())
                .cmd_make("make")
                .cmd_tar("tar"),
        ),
        (
            "linux-clang",
            BuilderProfile::new(Platform::Linux)
                .env(linux_clang_env())
                .cmd_make("make")
                .cmd_tar("tar"),
        ),
        ("darwin10-i386", darwin(darwin10_env("i386")?)),
        ("darwin10-x86_64", darwin(darwin10_env("x86_64")?)),
        ("darwin", darwin(darwin_env())),
        ("linux-mingw32", BuilderProfile::new(Platform::Mingw).env(mingw_env(32)?)),
        ("linux-mingw64", BuilderProfile::new(Platform::Mingw).env(mingw_env(64)?)),
        (
            "mingw-cross32",
            BuilderProfile::new(Platform::Mingw)
                .env(mingw_any_env())
                .cmake_defs(mingw_cmake_defs(32)?),
        ),
        (
            "mingw-cross64",
            BuilderProfile::new(Platform::Mingw)
                .env(mingw_any_env())
                .cmake_defs(mingw_cmake_defs(64)?),
        ),
        ("windows-msvc", windows(CmakeDefs::new())),
        ("windows-clang", windows(windows_clang_cmake_defs())),
        ("windows-arm64", windows(windows_arm64_cmake_defs())),
    ];

    Ok(profiles.into_iter().collect())
}
