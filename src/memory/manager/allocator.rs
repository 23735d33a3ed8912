/*!
 * Quick-Fit Allocation Logic
 * Free-list probing, fallback scan and deallocation
 */

use super::QuickFitAllocator;
use crate::core::types::SegmentId;
use crate::memory::process::Process;
use crate::memory::types::{
    AllocationOutcome, AllocationPath, DeallocationOutcome, FreeListPolicy,
};
use tracing::{debug, info, warn};

impl QuickFitAllocator {
    /// Place a process into a segment
    ///
    /// Common-size queues are searched smallest qualifying class first, taking
    /// the head of the first non-empty one. If none yields a segment, every
    /// segment is scanned in construction order. Nothing changes on failure.
    pub fn allocate_process(&mut self, process: &Process) -> AllocationOutcome {
        let placed = self
            .allocate_from_free_lists(process)
            .or_else(|| self.allocate_by_scan(process));

        match placed {
            Some((segment, path)) => {
                let capacity = self.segments[segment.index()].capacity();
                info!(
                    process = %process.id(),
                    name = %process.name(),
                    size = process.size(),
                    segment = %segment,
                    capacity,
                    ?path,
                    "Allocated process"
                );
                AllocationOutcome::Allocated {
                    process: process.id(),
                    name: process.name().clone(),
                    segment,
                    capacity,
                    path,
                }
            }
            None => {
                warn!(
                    process = %process.id(),
                    name = %process.name(),
                    size = process.size(),
                    "No segment available"
                );
                AllocationOutcome::NotAllocated {
                    process: process.id(),
                    name: process.name().clone(),
                }
            }
        }
    }

    fn allocate_from_free_lists(&mut self, process: &Process) -> Option<(SegmentId, AllocationPath)> {
        for class in self.free_list.classes_for(process.size()) {
            let Some(segment) = self.free_list.pop_front(class) else {
                continue;
            };
            let size_class = self.free_list.size_class(class);

            if self.segments[segment.index()].allocate(process) {
                return Some((segment, AllocationPath::FreeList { size_class }));
            }

            // The slot is consumed either way; keep searching larger classes
            debug!(
                segment = %segment,
                size_class,
                "Queued segment refused process, continuing search"
            );
        }
        None
    }

    fn allocate_by_scan(&mut self, process: &Process) -> Option<(SegmentId, AllocationPath)> {
        let index = self
            .segments
            .iter()
            .position(|segment| segment.fits(process))?;

        debug!(segment = index, "Free lists exhausted, fallback scan hit");
        self.segments[index]
            .allocate(process)
            .then_some((SegmentId(index), AllocationPath::FallbackScan))
    }

    /// Release the segment holding `process`
    ///
    /// Lookup is by process id. Under `Strict` the freed segment does not
    /// return to its free-list queue.
    pub fn deallocate_process(&mut self, process: &Process) -> DeallocationOutcome {
        let Some(segment) = self.locate(process.id()) else {
            warn!(
                process = %process.id(),
                name = %process.name(),
                "Deallocation requested for process not in memory"
            );
            return DeallocationOutcome::NotFound {
                process: process.id(),
                name: process.name().clone(),
            };
        };

        let slot = &mut self.segments[segment.index()];
        slot.deallocate();
        let capacity = slot.capacity();

        if self.policy == FreeListPolicy::Replenishing && self.free_list.requeue(capacity, segment) {
            debug!(segment = %segment, capacity, "Segment returned to free list");
        }

        info!(
            process = %process.id(),
            name = %process.name(),
            segment = %segment,
            capacity,
            "Deallocated process"
        );
        DeallocationOutcome::Deallocated {
            process: process.id(),
            name: process.name().clone(),
            segment,
            capacity,
        }
    }
}
