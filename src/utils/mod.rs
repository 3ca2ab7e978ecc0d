//! Utility modules shared by the hook and the icon packer.

pub mod exec;
pub mod log;
