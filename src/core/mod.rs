/*!
 * Core Module
 * Fundamental types, configuration and error handling
 */

pub mod config;
pub mod data_structures;
pub mod errors;
pub mod id;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use config::AllocatorConfig;
pub use data_structures::InlineString;
pub use errors::*;
pub use id::{next_process_id, IdGenerator};
pub use types::*;
