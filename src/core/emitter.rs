use crate::core::{Artifact, Bundle, Storage};
use crate::utils::error::{ArtifactError, Result};
use std::io::Write;

/// Outcome of writing a single artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitReport {
    pub file_name: &'static str,
    pub location: String,
    pub bytes_written: usize,
    pub element_count: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStatus {
    UpToDate,
    Stale,
    Missing,
}

pub struct ArtifactEmitter<S: Storage> {
    storage: S,
}

impl<S: Storage> ArtifactEmitter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write one artifact, overwriting any existing file, then print its
    /// announcement lines to `out`.
    pub fn emit<W: Write>(&self, artifact: &Artifact, out: &mut W) -> Result<EmitReport> {
        let data = artifact.render()?;

        tracing::debug!(
            "Writing {} ({}, {} bytes)",
            artifact.file_name,
            artifact.payload.format_name(),
            data.len()
        );
        self.storage.write_file(artifact.file_name, &data)?;

        let element_count = artifact.payload.element_count();
        writeln!(out, "{}", artifact.announcement.success)?;
        if let (Some(label), Some(count)) = (artifact.announcement.total_label, element_count) {
            writeln!(out, "{}: {}", label, count)?;
        }

        Ok(EmitReport {
            file_name: artifact.file_name,
            location: self.storage.location(artifact.file_name),
            bytes_written: data.len(),
            element_count,
        })
    }

    /// Emit every artifact of the bundle in order, stopping at the first failure.
    pub fn emit_bundle<W: Write>(&self, bundle: &Bundle, out: &mut W) -> Result<Vec<EmitReport>> {
        tracing::info!(
            "Emitting bundle '{}' ({} artifacts)",
            bundle.kind,
            bundle.artifacts.len()
        );

        bundle
            .artifacts
            .iter()
            .map(|artifact| self.emit(artifact, out))
            .collect()
    }

    pub fn emit_all<W: Write>(&self, bundles: &[Bundle], out: &mut W) -> Result<Vec<EmitReport>> {
        let mut reports = Vec::new();
        for bundle in bundles {
            reports.extend(self.emit_bundle(bundle, out)?);
        }
        tracing::info!("Emitted {} artifacts", reports.len());
        Ok(reports)
    }

    /// Compare the file on disk with what `emit` would write. Never writes.
    pub fn verify(&self, artifact: &Artifact) -> Result<VerifyStatus> {
        let expected = artifact.render()?;

        match self.storage.read_file(artifact.file_name) {
            Ok(actual) if actual == expected => Ok(VerifyStatus::UpToDate),
            Ok(_) => {
                tracing::debug!("{} differs from its payload", artifact.file_name);
                Ok(VerifyStatus::Stale)
            }
            Err(ArtifactError::ReadError { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Ok(VerifyStatus::Missing)
            }
            Err(e) => Err(e),
        }
    }
}
