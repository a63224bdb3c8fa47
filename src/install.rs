// src/install.rs

use crate::error::InstallError;
use crate::model::DriverRef;
use crate::reorder::{ReorderSummary, Reorderer};
use crate::vrpathreg::{ToolRunner, VrPathReg};
use std::path::Path;
use tracing::info;

/// Checks both paths and prints one diagnostic per missing path.
pub fn validate_paths(to_install: &Path, tool: &Path) -> Result<(), InstallError> {
    let mut diagnostics = Vec::new();

    if !to_install.exists() {
        diagnostics.push(format!("Driver path [{}] does not exist", to_install.display()));
    }

    if !tool.exists() {
        diagnostics.push(format!("Path to vrpathreg [{}] does not exist", tool.display()));
    }

    if diagnostics.is_empty() {
        return Ok(());
    }

    for diagnostic in &diagnostics {
        println!("❌ {}", diagnostic);
    }
    Err(InstallError::Validation { diagnostics })
}

/// Registers `to_install` as the first external driver using the `vrpathreg` at `tool`.
pub fn run_install(to_install: &Path, tool: &Path) -> Result<ReorderSummary, InstallError> {
    let mut vrpathreg = VrPathReg::new(tool);
    run_with_runner(&mut vrpathreg, to_install, tool)
}

pub fn run_with_runner<R: ToolRunner>(
    runner: R,
    to_install: &Path,
    tool: &Path,
) -> Result<ReorderSummary, InstallError> {
    validate_paths(to_install, tool)?;

    let new_driver = DriverRef::from_path(to_install);
    info!(driver = %new_driver, "moving driver to the front of the registration order");

    let summary = Reorderer::new(runner).reorder(&new_driver)?;

    println!(
        "✅ {} registered first ({} removed, {} re-added)",
        new_driver, summary.removed, summary.restored
    );
    for driver in &summary.dropped {
        println!("🗑️ Not re-added: {}", driver);
    }
    if summary.failed > 0 {
        println!("⚠️ {} vrpathreg call(s) reported a failure", summary.failed);
    }

    Ok(summary)
}
