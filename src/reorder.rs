// src/reorder.rs

use crate::error::InstallError;
use crate::model::{DriverRef, RegistryCommand};
use crate::vrpathreg::{parse_driver_listing, ToolOutput, ToolRunner};
use tracing::{info, warn};

/// Drivers whose reference contains this are removed and never registered again.
pub const SPACE_CALIBRATOR_MARKER: &str = "01spacecalibrator";

pub fn is_space_calibrator(driver: &DriverRef) -> bool {
    driver.as_str().contains(SPACE_CALIBRATOR_MARKER)
}

/// Builds the command sequence that puts `new_driver` first (testable).
///
/// Every current driver is removed in listed order, `new_driver` is added,
/// then the current drivers are added back in reverse order, minus any
/// space calibrator entry.
pub fn plan_reorder(current: &[DriverRef], new_driver: &DriverRef) -> Vec<RegistryCommand> {
    let mut plan: Vec<RegistryCommand> = current
        .iter()
        .cloned()
        .map(RegistryCommand::Remove)
        .collect();

    plan.push(RegistryCommand::Add(new_driver.clone()));

    plan.extend(
        current
            .iter()
            .rev()
            .filter(|driver| !is_space_calibrator(driver))
            .cloned()
            .map(RegistryCommand::Add),
    );

    plan
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReorderSummary {
    pub removed: usize,
    pub restored: usize,
    pub dropped: Vec<DriverRef>,
    /// Invocations that exited nonzero. They do not stop the sequence.
    pub failed: usize,
}

pub struct Reorderer<R: ToolRunner> {
    runner: R,
}

impl<R: ToolRunner> Reorderer<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn list_drivers(&mut self) -> Result<Vec<DriverRef>, InstallError> {
        let output = self.runner.run(&[])?;
        let drivers = parse_driver_listing(&output.text);
        info!(count = drivers.len(), "external drivers registered");
        Ok(drivers)
    }

    pub fn remove_driver(&mut self, driver: &DriverRef) -> Result<ToolOutput, InstallError> {
        self.execute(&RegistryCommand::Remove(driver.clone()))
    }

    pub fn add_driver(&mut self, driver: &DriverRef) -> Result<ToolOutput, InstallError> {
        self.execute(&RegistryCommand::Add(driver.clone()))
    }

    pub fn reorder(&mut self, new_driver: &DriverRef) -> Result<ReorderSummary, InstallError> {
        let current = self.list_drivers()?;
        let plan = plan_reorder(&current, new_driver);

        let dropped: Vec<DriverRef> = current
            .iter()
            .filter(|driver| is_space_calibrator(driver))
            .cloned()
            .collect();

        let mut summary = ReorderSummary {
            removed: current.len(),
            restored: current.len() - dropped.len(),
            dropped,
            failed: 0,
        };

        for command in &plan {
            if !self.execute(command)?.success {
                summary.failed += 1;
            }
        }

        Ok(summary)
    }

    fn execute(&mut self, command: &RegistryCommand) -> Result<ToolOutput, InstallError> {
        let icon = match command {
            RegistryCommand::Remove(_) => "➖",
            RegistryCommand::Add(_) => "➕",
        };
        let args = command.args();
        println!("{} {} {} {}", icon, self.runner.program().display(), args[0], args[1]);

        let output = self.runner.run(&args)?;
        if !output.success {
            warn!(
                subcommand = command.subcommand(),
                driver = %command.driver(),
                code = ?output.code,
                output = %output.text.trim(),
                "vrpathreg reported a failure, continuing"
            );
        }

        Ok(output)
    }
}
