/*!
 * Memory Traits
 * Seams between the allocation engine and its callers
 */

use super::manager::{QuickFitAllocator, SharedAllocator};
use super::process::Process;
use super::types::*;

/// The three operations collaborators are allowed to call
pub trait SegmentAllocator {
    fn allocate_process(&mut self, process: &Process) -> AllocationOutcome;

    fn deallocate_process(&mut self, process: &Process) -> DeallocationOutcome;

    fn display_memory(&self) -> MemoryLayout;
}

/// Memory statistics provider
pub trait MemoryInfo {
    fn stats(&self) -> MemoryStats;

    fn pressure(&self) -> MemoryPressure {
        self.stats().memory_pressure()
    }
}

impl SegmentAllocator for QuickFitAllocator {
    fn allocate_process(&mut self, process: &Process) -> AllocationOutcome {
        QuickFitAllocator::allocate_process(self, process)
    }

    fn deallocate_process(&mut self, process: &Process) -> DeallocationOutcome {
        QuickFitAllocator::deallocate_process(self, process)
    }

    fn display_memory(&self) -> MemoryLayout {
        QuickFitAllocator::display_memory(self)
    }
}

impl SegmentAllocator for SharedAllocator {
    fn allocate_process(&mut self, process: &Process) -> AllocationOutcome {
        SharedAllocator::allocate_process(self, process)
    }

    fn deallocate_process(&mut self, process: &Process) -> DeallocationOutcome {
        SharedAllocator::deallocate_process(self, process)
    }

    fn display_memory(&self) -> MemoryLayout {
        SharedAllocator::display_memory(self)
    }
}

impl MemoryInfo for QuickFitAllocator {
    fn stats(&self) -> MemoryStats {
        QuickFitAllocator::stats(self)
    }
}

impl MemoryInfo for SharedAllocator {
    fn stats(&self) -> MemoryStats {
        SharedAllocator::stats(self)
    }
}
