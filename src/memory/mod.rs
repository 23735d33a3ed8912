/*!
 * Memory Module
 * Quick-fit segment allocation
 */

pub mod manager;
pub mod process;
pub mod segment;
pub mod traits;
pub mod types;

// Re-export for convenience
pub use manager::{QuickFitAllocator, SharedAllocator};
pub use process::Process;
pub use segment::Segment;
pub use traits::*;
pub use types::*;
