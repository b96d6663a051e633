pub mod catalog;
pub mod docs;
pub mod infra;
pub mod social;

pub use catalog::catalog;
pub use docs::docs;
pub use infra::infra;
pub use social::social;

use crate::core::{Bundle, BundleKind, Result};

pub fn build(kind: BundleKind) -> Result<Bundle> {
    match kind {
        BundleKind::Catalog => catalog(),
        BundleKind::Infra => Ok(infra()),
        BundleKind::Docs => Ok(docs()),
        BundleKind::Social => Ok(social()),
    }
}

/// Build the requested bundles in canonical order, each at most once.
/// An empty selection yields every bundle.
pub fn select(kinds: &[BundleKind]) -> Result<Vec<Bundle>> {
    BundleKind::ALL
        .into_iter()
        .filter(|kind| kinds.is_empty() || kinds.contains(kind))
        .map(build)
        .collect()
}
