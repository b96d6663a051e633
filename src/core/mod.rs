pub mod emitter;

pub use crate::domain::model::{Announcement, Artifact, Bundle, BundleKind, Payload, Product};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
