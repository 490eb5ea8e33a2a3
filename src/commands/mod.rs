//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Provides implementations for all CLI commands.
//! Each command is in its own submodule for maintainability.

pub mod generate;
pub mod init;
pub mod list;
pub mod validate;

pub use generate::{execute_generate, GenerateOptions};
pub use init::{execute_init, InitOptions};
pub use list::{execute_list, ListOptions};
pub use validate::{execute_validate, ValidateOptions};
