// tests/common/mod.rs

#![allow(dead_code)]

use spacecal_driver_install::error::InstallError;
use spacecal_driver_install::vrpathreg::{ToolOutput, ToolRunner};
use std::io;
use std::path::{Path, PathBuf};

/// Records every invocation and answers the status call with a fixed listing.
pub struct MockRunner {
    pub program: PathBuf,
    pub listing: String,
    pub calls: Vec<Vec<String>>,
    /// Subcommand calls whose reference contains this exit nonzero.
    pub reject: Option<String>,
    /// Invocation number (0-based) that fails to launch.
    pub launch_failure_at: Option<usize>,
}

impl MockRunner {
    pub fn with_listing(listing: &str) -> Self {
        Self {
            program: PathBuf::from("/steam/SteamVR/bin/vrpathreg.sh"),
            listing: listing.to_string(),
            calls: Vec::new(),
            reject: None,
            launch_failure_at: None,
        }
    }

    /// `removedriver`/`adddriver` calls as (subcommand, reference) pairs.
    pub fn registry_calls(&self) -> Vec<(String, String)> {
        self.calls
            .iter()
            .filter(|call| call.len() == 2)
            .map(|call| (call[0].clone(), call[1].clone()))
            .collect()
    }
}

impl ToolRunner for MockRunner {
    fn run(&mut self, args: &[&str]) -> Result<ToolOutput, InstallError> {
        if self.launch_failure_at == Some(self.calls.len()) {
            return Err(InstallError::launch(
                self.program.clone(),
                io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            ));
        }
        self.calls.push(args.iter().map(|arg| arg.to_string()).collect());

        if args.is_empty() {
            return Ok(ToolOutput {
                success: true,
                code: Some(0),
                text: self.listing.clone(),
            });
        }

        let rejected = match &self.reject {
            Some(needle) => args[1].contains(needle.as_str()),
            None => false,
        };
        Ok(ToolOutput {
            success: !rejected,
            code: Some(if rejected { 1 } else { 0 }),
            text: if rejected { "Driver not found\n".to_string() } else { String::new() },
        })
    }

    fn program(&self) -> &Path {
        &self.program
    }
}

pub fn pair(subcommand: &str, reference: &str) -> (String, String) {
    (subcommand.to_string(), reference.to_string())
}
