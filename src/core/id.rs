/*!
 * ID Generation System
 * Type-safe identifiers for processes and segments
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// Type-Safe ID Wrappers
// ============================================================================

/// Opaque process identity, assigned once at process creation
///
/// Names are display labels only; every lookup inside the allocator goes
/// through this id, so two processes sharing a name never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub u64);

/// Stable index of a segment inside the allocator's arena (construction order)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub usize);

impl SegmentId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// ID Generator Trait
// ============================================================================

/// Generic ID generator interface
pub trait IdGenerator<T> {
    /// Generate next ID
    fn next(&self) -> T;

    /// Peek at the ID the next call will hand out (for debugging)
    fn current(&self) -> T;
}

// ============================================================================
// Atomic Counter Generator
// ============================================================================

/// Lock-free monotonically increasing counter
///
/// # Performance
/// - Cache-line aligned to prevent false sharing
/// - Usable from a `static`, so ids are unique across every allocator in the process
///
/// The counter is 64 bits wide; at one id per nanosecond it would take
/// centuries to wrap, so ids are never reused in practice.
#[repr(C, align(64))]
pub struct AtomicGenerator<T> {
    counter: AtomicU64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> AtomicGenerator<T> {
    /// Create new generator starting at given value
    #[inline]
    pub const fn new(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
            _marker: PhantomData,
        }
    }
}

impl IdGenerator<ProcessId> for AtomicGenerator<ProcessId> {
    #[inline]
    fn next(&self) -> ProcessId {
        ProcessId(self.counter.fetch_add(1, Ordering::SeqCst))
    }

    #[inline]
    fn current(&self) -> ProcessId {
        ProcessId(self.counter.load(Ordering::Relaxed))
    }
}

/// Global process id source
static PROCESS_IDS: AtomicGenerator<ProcessId> = AtomicGenerator::new(1);

/// Allocate a fresh, never-before-seen process id
#[inline]
pub fn next_process_id() -> ProcessId {
    PROCESS_IDS.next()
}
