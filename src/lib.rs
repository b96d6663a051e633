pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use app::bundles;
pub use crate::core::emitter::{ArtifactEmitter, EmitReport, VerifyStatus};
pub use crate::core::{Artifact, Bundle, BundleKind, Payload, Product};
pub use utils::error::{ArtifactError, Result};
