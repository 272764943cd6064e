pub mod config;
pub mod errors;
mod macros;

pub use config::ServerConfig;
pub use errors::*;
