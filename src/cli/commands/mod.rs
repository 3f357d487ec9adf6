//! CLI command modules

pub mod clean;
pub mod generate;
pub mod index;
pub mod init;
pub mod validate;
