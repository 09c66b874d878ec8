pub const CONFIG_FILE_NAME: &str = "fleet.toml";

pub const DEFAULT_CMD_MAKE: &str = "make";
pub const DEFAULT_CMD_TAR: &str = "tar";
pub const DEFAULT_CMAKE_GENERATOR: &str = "Ninja";

/// Separator used when a list-valued environment variable is exported.
pub const ENV_LIST_SEPARATOR: &str = ":";
