/*!
 * Core Types
 * Common types used across the allocator
 */

pub use super::id::{ProcessId, SegmentId};

/// Size type for segment capacities and process requests
pub type Size = usize;

/// Percentage in the range 0.0..=100.0
pub type Percentage = f64;
