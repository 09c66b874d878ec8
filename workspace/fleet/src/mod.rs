pub mod builtin;
pub mod capabilities;
pub mod env_tables;
pub mod error;
pub mod fleet;
pub mod profile;
pub mod validation;
pub mod worker;
