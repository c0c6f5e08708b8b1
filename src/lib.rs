//! Unified research console.
//!
//! The console embeds four independently hosted tools. Everything it knows about them is a
//! static registry plus environment configuration; the only real logic is deriving each embed
//! URL, including the four image tagger surfaces, from that configuration.

mod color;
mod config;
mod errors;
pub mod http;
mod probe;
mod registry;
mod resolve;
mod server;
mod shell;
mod surfaces;
mod telemetry;
pub mod util;

pub use color::*;
pub use config::*;
pub use errors::*;
pub use probe::*;
pub use registry::*;
pub use resolve::*;
pub use server::*;
pub use shell::*;
pub use surfaces::*;
pub use telemetry::*;
