/*!
 * Quick-Fit Memory Allocator
 * Segregated free lists over a fixed pool of fixed-size segments
 */

pub mod cli;
pub mod core;
pub mod memory;
pub mod monitoring;

// Re-exports
pub use crate::core::{
    AllocatorConfig, ConfigError, InlineString, InputError, ProcessId, QuickFitError,
    QuickFitResult, SegmentId, Size,
};
pub use memory::{
    AllocationOutcome, AllocationPath, DeallocationOutcome, FreeListPolicy, MemoryInfo,
    MemoryLayout, MemoryPressure, MemoryStats, Process, QuickFitAllocator, Segment,
    SegmentAllocator, SegmentReport, SegmentStatus, SharedAllocator,
};
pub use monitoring::init_tracing;
