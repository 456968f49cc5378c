#[cfg(feature = "cli")]
pub mod cli;
pub mod profile;

pub use profile::SessionProfile;
