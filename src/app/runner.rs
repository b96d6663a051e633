use crate::app::bundles;
use crate::config::{CliConfig, LocalStorage};
use crate::core::emitter::{ArtifactEmitter, VerifyStatus};
use crate::core::{Bundle, ConfigProvider, Storage};
use crate::utils::error::Result;
use std::io::Write;

/// Execute one CLI invocation, writing every user-facing line to `out`.
///
/// Returns `Ok(false)` when `--verify` found stale or missing files.
pub fn run<W: Write>(config: &CliConfig, out: &mut W) -> Result<bool> {
    let selected = bundles::select(config.bundles())?;

    if config.list {
        print_plan(&selected, None, out)?;
        return Ok(true);
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        print_plan(&selected, Some(config.output_path()), out)?;
        return Ok(true);
    }

    let emitter = ArtifactEmitter::new(LocalStorage::new(config.output_path()));

    if config.verify {
        return verify(&emitter, &selected, out);
    }

    let reports = emitter.emit_all(&selected, out)?;
    out.flush()?;

    for report in &reports {
        tracing::debug!("{} -> {} bytes", report.location, report.bytes_written);
    }
    Ok(true)
}

pub fn print_plan<W: Write>(
    selected: &[Bundle],
    output_path: Option<&str>,
    out: &mut W,
) -> Result<()> {
    for bundle in selected {
        writeln!(out, "{}:", bundle.kind)?;
        for artifact in &bundle.artifacts {
            match output_path {
                Some(dir) => writeln!(
                    out,
                    "  {} -> {}/{} ({} bytes, {})",
                    artifact.file_name,
                    dir.trim_end_matches('/'),
                    artifact.file_name,
                    artifact.render()?.len(),
                    artifact.payload.format_name()
                )?,
                None => writeln!(
                    out,
                    "  {} ({})",
                    artifact.file_name,
                    artifact.payload.format_name()
                )?,
            }
        }
    }
    Ok(())
}

/// Report the state of every selected artifact; `true` only if all are up to date.
pub fn verify<S: Storage, W: Write>(
    emitter: &ArtifactEmitter<S>,
    selected: &[Bundle],
    out: &mut W,
) -> Result<bool> {
    let mut clean = true;

    for artifact in selected.iter().flat_map(|b| &b.artifacts) {
        let status = emitter.verify(artifact)?;
        let marker = match status {
            VerifyStatus::UpToDate => "✅",
            VerifyStatus::Stale => "⚠️",
            VerifyStatus::Missing => "❌",
        };
        writeln!(out, "{} {} ({:?})", marker, artifact.file_name, status)?;
        clean &= status == VerifyStatus::UpToDate;
    }

    Ok(clean)
}
