/*!
 * Segment
 * Fixed-capacity block holding at most one process
 */

use super::process::Process;
use super::types::SegmentStatus;
use crate::core::types::Size;

/// A fixed-size memory segment
///
/// Capacity never changes after construction. The occupant, when present,
/// always satisfies `occupant.size() <= capacity`.
#[derive(Debug, Clone)]
pub struct Segment {
    capacity: Size,
    occupant: Option<Process>,
}

impl Segment {
    pub fn new(capacity: Size) -> Self {
        Self {
            capacity,
            occupant: None,
        }
    }

    /// Place `process` here if the segment is free and large enough
    ///
    /// Leaves the segment untouched on failure. Whether the process already
    /// lives elsewhere is the allocator's concern, not the segment's.
    pub fn allocate(&mut self, process: &Process) -> bool {
        if self.occupant.is_none() && process.size() <= self.capacity {
            self.occupant = Some(process.clone());
            true
        } else {
            false
        }
    }

    /// Clear the occupant, returning whoever was there
    pub fn deallocate(&mut self) -> Option<Process> {
        self.occupant.take()
    }

    #[inline(always)]
    pub fn capacity(&self) -> Size {
        self.capacity
    }

    #[inline(always)]
    pub fn occupant(&self) -> Option<&Process> {
        self.occupant.as_ref()
    }

    #[inline(always)]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// True if `process` could be placed here right now
    #[inline]
    pub fn fits(&self, process: &Process) -> bool {
        self.is_free() && process.size() <= self.capacity
    }

    pub fn status(&self) -> SegmentStatus {
        match &self.occupant {
            None => SegmentStatus::Free,
            Some(process) => SegmentStatus::Occupied {
                process: process.id(),
                name: process.name().clone(),
            },
        }
    }
}
