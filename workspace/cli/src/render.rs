use fleet::{profile::BuilderProfile, worker::BuildWorker};
use std::fmt;
use types::env::{CmakeDefs, Env};

fn write_env(f: &mut fmt::Formatter<'_>, env: &Env) -> fmt::Result {
    if env.is_empty() {
        return Ok(());
    }
    writeln!(f, "env:")?;
    for (key, value) in env {
        writeln!(f, "  {}={}", key, value.render())?;
    }
    Ok(())
}

fn write_defs(f: &mut fmt::Formatter<'_>, defs: &CmakeDefs) -> fmt::Result {
    if defs.is_empty() {
        return Ok(());
    }
    writeln!(f, "cmake defines:")?;
    for (key, value) in defs {
        writeln!(f, "  -D{}={}", key, value)?;
    }
    Ok(())
}

/// Multi-line view of a profile, used by `profile`
pub struct ProfileDetails<'a> {
    pub name: &'a str,
    pub profile: &'a BuilderProfile,
}

impl fmt::Display for ProfileDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.profile;
        writeln!(f, "profile:         {}", self.name)?;
        writeln!(f, "platform:        {}", profile.platform)?;
        if profile.platform.uses_make_tools() {
            writeln!(f, "make:            {}", profile.cmd_make)?;
            writeln!(f, "tar:             {}", profile.cmd_tar)?;
        }
        writeln!(f, "cmake generator: {}", profile.cmake_generator)?;
        write_env(f, &profile.env)?;
        write_defs(f, &profile.cmake_defs)
    }
}

/// One line per worker, used by `workers`
pub struct WorkerLine<'a>(pub &'a BuildWorker);

impl fmt::Display for WorkerLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let worker = self.0;
        write!(
            f,
            "{:<30} {:<30} {:<18} {:<8} {:<20} {}",
            worker.name,
            worker.worker,
            worker.profile,
            worker.arch,
            worker.tlname.as_deref().unwrap_or("-"),
            if worker.upload { "upload" } else { "no-upload" }
        )
    }
}

/// Multi-line view of a worker, used by `worker`
pub struct WorkerDetails<'a>(pub &'a BuildWorker);

impl fmt::Display for WorkerDetails<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let worker = self.0;
        writeln!(f, "name:            {}", worker.name)?;
        writeln!(f, "worker:          {}", worker.worker)?;
        writeln!(f, "code:            {}", worker.code)?;
        writeln!(f, "profile:         {}", worker.profile)?;
        writeln!(f, "platform:        {}", worker.platform)?;
        writeln!(f, "arch:            {}", worker.arch)?;
        writeln!(
            f,
            "tlname:          {}",
            worker.tlname.as_deref().unwrap_or("(not registered)")
        )?;
        writeln!(f, "upload:          {}", worker.upload)?;
        if let (Some(make), Some(tar)) = (worker.make_command(), worker.tar_command()) {
            writeln!(f, "make:            {}", make)?;
            writeln!(f, "tar:             {}", tar)?;
        }
        writeln!(f, "cmake generator: {}", worker.cmake_generator)?;
        let components: Vec<_> = worker.build.enabled().map(|c| c.as_str()).collect();
        writeln!(f, "builds:          {}", components.join(", "))?;
        write_env(f, &worker.env)?;
        write_defs(f, &worker.cmake_defs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet::fleet::Fleet;

    #[test]
    fn windows_details_omit_make_tools() {
        let fleet = Fleet::builtin().unwrap();
        let worker = fleet.worker_by_name("windows-arm64.prg").unwrap();
        let details = WorkerDetails(worker).to_string();

        assert!(!details.contains("make:"));
        assert!(details.contains("-DCMAKE_GENERATOR_PLATFORM=ARM64"));
        assert!(details.contains("builds:          luametatex\n"));
    }

    #[test]
    fn solaris_profile_renders_path_list() {
        let fleet = Fleet::builtin().unwrap();
        let profile = fleet.get_profile("solaris10-x86_64").unwrap();
        let details = ProfileDetails {
            name: "solaris10-x86_64",
            profile,
        }
        .to_string();

        assert!(details.contains("make:            gmake"));
        assert!(details.contains("  PATH=${PATH}:/usr/ccs/bin"));
        assert!(details.contains("  CC=/opt/csw/bin/gcc-5.5 -m64"));
    }

    #[test]
    fn worker_line_marks_unregistered_workers() {
        let fleet = Fleet::builtin().unwrap();
        let mut worker = fleet.worker_by_name("darwin-x86_64.prg").unwrap().clone();
        worker.tlname = None;
        let line = WorkerLine(&worker).to_string();
        assert!(line.contains(" - "));
        assert!(line.ends_with("no-upload"));
        assert!(WorkerDetails(&worker).to_string().contains("tlname:          (not registered)\n"));
    }
}
