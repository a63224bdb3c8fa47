// src/vrpathreg.rs

use crate::error::InstallError;
use crate::model::DriverRef;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, warn};

/// Header line that precedes the external driver entries in `vrpathreg` status output.
pub const EXTERNAL_DRIVERS_MARKER: &str = "External Drivers:";

/// Function that parses `vrpathreg` status output (testable).
///
/// Every non-empty line after the first line containing [`EXTERNAL_DRIVERS_MARKER`]
/// is an entry of the form `<label>: <reference>`. Without a marker the
/// result is empty.
pub fn parse_driver_listing(s: &str) -> Vec<DriverRef> {
    let lines: Vec<&str> = s.lines().collect();

    let start = lines
        .iter()
        .position(|line| line.contains(EXTERNAL_DRIVERS_MARKER))
        .map(|idx| idx + 1)
        .unwrap_or(lines.len());

    let mut drivers = Vec::new();
    for line in &lines[start..] {
        if line.is_empty() {
            continue;
        }

        // Sample line:
        //   path: /home/user/.steam/steam/steamapps/common/SteamVR/drivers/lighthouse
        match line.split_once(':') {
            Some((_, reference)) => drivers.push(DriverRef::new(reference.trim())),
            None => warn!(line = %line.trim(), "driver entry without ':' ignored"),
        }
    }

    drivers
}

/// Result of one tool invocation. stdout and stderr are interleaved in `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub text: String,
}

/// Runs the registration tool with the given arguments and waits for it to exit.
pub trait ToolRunner {
    fn run(&mut self, args: &[&str]) -> Result<ToolOutput, InstallError>;

    /// Path shown when echoing the command line.
    fn program(&self) -> &Path;
}

impl<R: ToolRunner + ?Sized> ToolRunner for &mut R {
    fn run(&mut self, args: &[&str]) -> Result<ToolOutput, InstallError> {
        (**self).run(args)
    }

    fn program(&self) -> &Path {
        (**self).program()
    }
}

/// `vrpathreg.sh` / `vrpathreg.exe` from a SteamVR installation.
#[derive(Debug, Clone)]
pub struct VrPathReg {
    tool: PathBuf,
}

impl VrPathReg {
    pub fn new(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }
}

impl ToolRunner for VrPathReg {
    fn run(&mut self, args: &[&str]) -> Result<ToolOutput, InstallError> {
        let launch_err = |e: io::Error| InstallError::launch(self.tool.clone(), e);

        let (mut reader, writer) = io::pipe().map_err(launch_err)?;
        let stderr_writer = writer.try_clone().map_err(launch_err)?;

        // The Command owns the write ends; it has to be dropped before reading
        // or the pipe never reaches EOF.
        let mut child = {
            let mut cmd = Command::new(&self.tool);
            cmd.args(args).stdout(writer).stderr(stderr_writer);
            cmd.spawn().map_err(launch_err)?
        };

        let mut raw = Vec::new();
        let read_result = reader.read_to_end(&mut raw);
        let status = child.wait().map_err(launch_err)?;
        read_result.map_err(launch_err)?;

        let text = String::from_utf8_lossy(&raw).into_owned();
        debug!(tool = %self.tool.display(), ?args, %status, output = %text, "vrpathreg finished");

        Ok(ToolOutput {
            success: status.success(),
            code: status.code(),
            text,
        })
    }

    fn program(&self) -> &Path {
        &self.tool
    }
}
