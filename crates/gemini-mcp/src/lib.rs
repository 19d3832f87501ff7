pub mod server;

pub mod error;
pub mod config;
pub mod prompts;
pub mod tools;
pub mod catalog;

#[cfg(test)]
pub(crate) mod testing;

pub use crate::catalog::{chat_server, design_server, ServerCatalog};
pub use crate::config::Config;
pub use crate::error::{CoreError, CoreResult};
pub use crate::tools::{Dispatcher, ResponseEnvelope};
