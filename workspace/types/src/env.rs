use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::defaults::ENV_LIST_SEPARATOR;

/// Value of a single environment variable in a build profile
///
/// `List` is used for variables like `PATH` whose first element is
/// usually a reference to the value already present on the worker
/// (`${PATH}`), followed by the entries to append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnvValue {
    Single(String),
    List(Vec<String>),
}

impl EnvValue {
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnvValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Value as it would be exported, list entries joined with `:`.
    pub fn render(&self) -> String {
        match self {
            EnvValue::Single(value) => value.clone(),
            EnvValue::List(values) => values.join(ENV_LIST_SEPARATOR),
        }
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::Single(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        EnvValue::Single(value)
    }
}

pub type Env = BTreeMap<String, EnvValue>;

pub type CmakeDefs = BTreeMap<String, String>;
