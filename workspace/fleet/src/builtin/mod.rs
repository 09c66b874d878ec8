//! The fleet as it is actually deployed.

mod profiles;
mod workers;

pub use profiles::builder_profiles;
pub use workers::builder_list;
