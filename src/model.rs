// src/model.rs

use std::fmt;
use std::path::Path;

/// A driver as `vrpathreg` reports it: a folder path or registered name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DriverRef(String);

impl DriverRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DriverRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DriverRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryCommand {
    Remove(DriverRef),
    Add(DriverRef),
}

impl RegistryCommand {
    pub fn subcommand(&self) -> &'static str {
        match self {
            RegistryCommand::Remove(_) => "removedriver",
            RegistryCommand::Add(_) => "adddriver",
        }
    }

    pub fn driver(&self) -> &DriverRef {
        match self {
            RegistryCommand::Remove(driver) | RegistryCommand::Add(driver) => driver,
        }
    }

    pub fn args(&self) -> [&str; 2] {
        [self.subcommand(), self.driver().as_str()]
    }
}
