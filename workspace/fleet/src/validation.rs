use eyre::{eyre, Report, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::{
    fleet::Fleet,
    worker::{BuildWorker, WorkerSpec},
};

/// `{os}-{arch}[-{distro}...].{code}`
static ARTIFACT_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]+-[A-Za-z0-9_]+(-[A-Za-z0-9_.]+)*\.(?P<code>[a-z]+)$")
        .expect("Invalid artifact name regex")
});

pub trait Validation {
    fn validate(&self) -> Result<(), Vec<Report>>;
}

pub fn validate_not_empty(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(eyre!("field: {} cannot be empty", name));
    }
    Ok(())
}

pub fn validate_artifact_name(name: &str, code: &str) -> Result<()> {
    let captures = ARTIFACT_NAME_REGEX
        .captures(name)
        .ok_or_else(|| eyre!("artifact name '{}' does not match {{os}}-{{arch}}[-{{distro}}].{{code}}", name))?;

    if &captures["code"] != code {
        return Err(eyre!(
            "artifact name '{}' ends in '.{}' but the worker code is '{}'",
            name,
            &captures["code"],
            code
        ));
    }
    Ok(())
}

fn validate_worker_fields(
    fields: [(&str, &str); 5],
    tlname: Option<&str>,
    name: &str,
    code: &str,
) -> Result<(), Vec<Report>> {
    let mut errors = Vec::new();

    for (field, value) in fields {
        if let Err(err) = validate_not_empty(field, value) {
            errors.push(err);
        }
    }

    if let Some(tlname) = tlname {
        if let Err(err) = validate_not_empty("tlname", tlname) {
            errors.push(err);
        }
    }

    // naming is only checked once the fields themselves are present
    if errors.is_empty() {
        if let Err(err) = validate_artifact_name(name, code) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

impl Validation for WorkerSpec {
    fn validate(&self) -> Result<(), Vec<Report>> {
        validate_worker_fields(
            [
                ("worker", self.worker.as_str()),
                ("code", self.code.as_str()),
                ("profile", self.profile.as_str()),
                ("name", self.name.as_str()),
                ("arch", self.arch.as_str()),
            ],
            self.tlname.as_deref(),
            &self.name,
            &self.code,
        )
    }
}

impl Validation for BuildWorker {
    fn validate(&self) -> Result<(), Vec<Report>> {
        validate_worker_fields(
            [
                ("worker", self.worker.as_str()),
                ("code", self.code.as_str()),
                ("profile", self.profile.as_str()),
                ("name", self.name.as_str()),
                ("arch", self.arch.as_str()),
            ],
            self.tlname.as_deref(),
            &self.name,
            &self.code,
        )
    }
}

impl Validation for Fleet {
    fn validate(&self) -> Result<(), Vec<Report>> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for worker in self.list_workers() {
            if let Err(mut err) = worker.validate() {
                errors.append(&mut err);
            }
            if !seen.insert(worker.name.as_str()) {
                errors.push(eyre!("artifact name '{}' is produced twice", worker.name));
            }
        }

        for worker in self.disabled_workers() {
            if let Err(mut err) = worker.validate() {
                errors.append(&mut err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
