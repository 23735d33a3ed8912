/*!
 * Shared Allocator
 * Thread-safe handle over a single quick-fit allocator
 */

use super::QuickFitAllocator;
use crate::core::types::{ProcessId, SegmentId, Size};
use crate::core::AllocatorConfig;
use crate::memory::process::Process;
use crate::memory::types::{AllocationOutcome, DeallocationOutcome, MemoryLayout, MemoryStats};
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle; all clones see the same segments and free lists
///
/// One mutex guards the whole allocator, so popping a queue head and
/// marking the segment occupied happen in a single critical section.
#[derive(Clone)]
pub struct SharedAllocator {
    inner: Arc<Mutex<QuickFitAllocator>>,
}

impl SharedAllocator {
    pub fn new(allocator: QuickFitAllocator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(allocator)),
        }
    }

    pub fn with_config(segment_sizes: &[Size], config: &AllocatorConfig) -> Self {
        Self::new(QuickFitAllocator::with_config(segment_sizes, config))
    }

    /// Run `f` with exclusive access to the allocator
    pub fn with_lock<R>(&self, f: impl FnOnce(&mut QuickFitAllocator) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn allocate_process(&self, process: &Process) -> AllocationOutcome {
        self.inner.lock().allocate_process(process)
    }

    pub fn deallocate_process(&self, process: &Process) -> DeallocationOutcome {
        self.inner.lock().deallocate_process(process)
    }

    pub fn display_memory(&self) -> MemoryLayout {
        self.inner.lock().display_memory()
    }

    pub fn stats(&self) -> MemoryStats {
        self.inner.lock().stats()
    }

    pub fn locate(&self, process: ProcessId) -> Option<SegmentId> {
        self.inner.lock().locate(process)
    }

    /// Clone of the current state, detached from this handle
    pub fn snapshot(&self) -> QuickFitAllocator {
        self.inner.lock().clone()
    }
}

impl From<QuickFitAllocator> for SharedAllocator {
    fn from(allocator: QuickFitAllocator) -> Self {
        Self::new(allocator)
    }
}
