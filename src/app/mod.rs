pub mod bundles;
#[cfg(feature = "cli")]
pub mod runner;
