use crate::worker::WorkerSpec;

/// Builds the `builder_list`, in the order jobs are dispatched.
pub fn builder_list() -> Vec<WorkerSpec> {
    vec![
        WorkerSpec::new("solaris10-i386", "csw", "solaris10-i386", "solaris-i386.csw", "i386")
            .tlname("i386-solaris")
            .upload(true),
        WorkerSpec::new("solaris10-i386", "csw", "solaris10-x86_64", "solaris-x86_64.csw", "x86_64")
            .tlname("x86_64-solaris")
            .upload(true),
        WorkerSpec::new("solaris10-sparc", "csw", "solaris10-sparc", "solaris-sparc.csw", "sparc")
            .tlname("sparc-solaris")
            .upload(false),
        WorkerSpec::new("pragma-openbsd67-i386", "prg", "openbsd", "openbsd-i386-6.7.prg", "i386")
            .tlname("i386-openbsd6.7")
            .upload(true),
        WorkerSpec::new("pragma-openbsd68-i386", "prg", "openbsd", "openbsd-i386-6.8.prg", "i386")
            .tlname("i386-openbsd6.8")
            .upload(true),
        WorkerSpec::new("pragma-openbsd67-amd64", "prg", "openbsd", "openbsd-amd64-6.7.prg", "amd64")
            .tlname("amd64-openbsd6.7")
            .upload(true),
        WorkerSpec::new("pragma-openbsd68-amd64", "prg", "openbsd", "openbsd-amd64-6.8.prg", "amd64")
            .tlname("amd64-openbsd6.8")
            .upload(true),
        WorkerSpec::new("pragma-freebsd-i386", "prg", "freebsd", "freebsd-i386.prg", "i386")
            .tlname("i386-freebsd")
            .upload(true),
        WorkerSpec::new("pragma-freebsd-amd64", "prg", "freebsd", "freebsd-amd64.prg", "amd64")
            .tlname("amd64-freebsd")
            .upload(true),
        WorkerSpec::new(
            "pragma-linux-alpine-x86_64",
            "prg",
            "linux-clang",
            "linuxmusl-x86_64-alpine.prg",
            "x86_64",
        )
        .tlname("x86_64-linuxmusl")
        .upload(true),
        WorkerSpec::new(
            "pragma-linux-debian10-armhf",
            "prg",
            "linux",
            "linux-armhf-debian10.prg",
            "armhf",
        )
        .tlname("armhf-linux")
        .upload(true),
        WorkerSpec::new(
            "pragma-linux-ubuntu-aarch64",
            "prg",
            "linux",
            "linux-aarch64-ubuntu.prg",
            "aarch64",
        )
        .tlname("aarch64-linux")
        .upload(true),
        WorkerSpec::new("pragma-linux-debian8-i386", "prg", "linux", "linux-i386-debian8.prg", "i386")
            .tlname("i386-linux")
            .upload(false),
        WorkerSpec::new("pragma-linux-debian9-i386", "prg", "linux", "linux-i386-debian9.prg", "i386")
            .tlname("i386-linux")
            .upload(true),
        WorkerSpec::new(
            "pragma-linux-debian8-x86_64",
            "prg",
            "linux",
            "linux-x86_64-debian8.prg",
            "x86_64",
        )
        .tlname("x86_64-linux")
        .upload(false),
        WorkerSpec::new(
            "pragma-linux-debian9-x86_64",
            "prg",
            "linux",
            "linux-x86_64-debian9.prg",
            "x86_64",
        )
        .tlname("x86_64-linux")
        .upload(true),
        WorkerSpec::new(
            "thomas-darwin10-x86_64",
            "tho",
            "darwin10-x86_64",
            "darwin10-x86_64.tho",
            "x86_64",
        )
        .tlname("x86_64-darwinlegacy")
        .upload(true),
        WorkerSpec::new("darwin10-x86_64", "prg", "darwin10-x86_64", "darwin10-x86_64.prg", "x86_64")
            .tlname("x86_64-darwinlegacy")
            .upload(false),
        WorkerSpec::new("darwin17-x86_64", "prg", "darwin", "darwin-x86_64.prg", "x86_64")
            .tlname("x86_64-darwin")
            .upload(false),
        // both mingw cross builds run on the same debian host
        WorkerSpec::new(
            "pragma-linux-debian10-x86_64",
            "prg",
            "mingw-cross32",
            "mingw-i686.prg",
            "i386",
        )
        .tlname("i686-w64-mingw32")
        .upload(true),
        WorkerSpec::new(
            "pragma-linux-debian10-x86_64",
            "prg",
            "mingw-cross64",
            "mingw-x86_64.prg",
            "x86_64",
        )
        .tlname("x86_64-w64-mingw32")
        .upload(true),
        WorkerSpec::new(
            "pragma-windows10-x86_64",
            "prg",
            "windows-msvc",
            "windows-x86_64.prg",
            "x86_64",
        )
        .tlname("win64")
        .upload(true),
        WorkerSpec::new(
            "pragma-windows10-x86_64",
            "prg",
            "windows-clang",
            "windows-clang-x86_64.prg",
            "x86_64",
        )
        .tlname("win64-clang")
        .upload(false),
        WorkerSpec::new(
            "pragma-windows10-x86_64",
            "prg",
            "windows-arm64",
            "windows-arm64.prg",
            "arm64",
        )
        .tlname("arm64-windows")
        .upload(true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_is_kept() {
        let names: Vec<_> = builder_list().into_iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), 24);
        assert_eq!(names.first().map(String::as_str), Some("solaris-i386.csw"));
        assert_eq!(names.last().map(String::as_str), Some("windows-arm64.prg"));
        assert_eq!(names[12], "linux-i386-debian8.prg");
        assert_eq!(names[13], "linux-i386-debian9.prg");
    }

    #[test]
    fn every_builtin_worker_is_enabled_and_registered() {
        for spec in builder_list() {
            assert!(spec.enabled, "{} is disabled", spec.name);
            assert!(spec.tlname.is_some(), "{} has no tlname", spec.name);
        }
    }
}
