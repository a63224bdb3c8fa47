// src/lib.rs

pub mod error;
pub mod install;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod vrpathreg;
