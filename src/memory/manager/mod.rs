/*!
 * Quick-Fit Allocation
 *
 * A fixed pool of fixed-size segments shared out among processes.
 *
 * ## Allocation Policy
 *
 * - **Free lists first**: every common size class owns a FIFO queue of
 *   segments whose capacity matches it exactly. Classes are searched from the
 *   smallest one that can hold the request upward.
 * - **Fallback scan**: if no queue yields a segment, all segments are scanned
 *   in construction order and the first free one that is large enough wins.
 *
 * Segments are never split or merged. Deallocation clears the occupant; under
 * the default `Strict` policy the segment does not rejoin its queue and is
 * reachable afterwards only through the fallback scan.
 */

mod allocator;
mod free_list;
mod shared;
mod stats;

pub use shared::SharedAllocator;

use super::segment::Segment;
use super::types::FreeListPolicy;
use crate::core::types::{ProcessId, SegmentId, Size};
use crate::core::AllocatorConfig;
use free_list::SegregatedFreeList;
use tracing::info;

/// Quick-fit allocator over an arena of segments
#[derive(Debug, Clone)]
pub struct QuickFitAllocator {
    // Arena in construction order; SegmentId is the index
    segments: Vec<Segment>,
    free_list: SegregatedFreeList,
    policy: FreeListPolicy,
}

impl QuickFitAllocator {
    /// Build an allocator with the default common sizes and `Strict` policy
    pub fn new(segment_sizes: &[Size]) -> Self {
        Self::with_config(segment_sizes, &AllocatorConfig::default())
    }

    pub fn with_common_sizes(segment_sizes: &[Size], common_sizes: &[Size]) -> Self {
        Self::with_config(segment_sizes, &AllocatorConfig::new(common_sizes))
    }

    pub fn with_config(segment_sizes: &[Size], config: &AllocatorConfig) -> Self {
        let segments: Vec<Segment> = segment_sizes.iter().copied().map(Segment::new).collect();
        let mut free_list = SegregatedFreeList::new(&config.common_sizes);

        for (index, segment) in segments.iter().enumerate() {
            free_list.push(segment.capacity(), SegmentId(index));
        }

        info!(
            segments = segments.len(),
            queued = free_list.len(),
            size_classes = ?free_list.size_classes(),
            policy = %config.policy,
            "Quick-fit allocator initialized"
        );

        Self {
            segments,
            free_list,
            policy: config.policy,
        }
    }

    pub fn policy(&self) -> FreeListPolicy {
        self.policy
    }

    /// Common sizes in ascending order, without duplicates
    pub fn size_classes(&self) -> &[Size] {
        self.free_list.size_classes()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.get(id.index())
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment currently holding the process, if any
    pub fn locate(&self, process: ProcessId) -> Option<SegmentId> {
        self.segments
            .iter()
            .position(|segment| segment.occupant().is_some_and(|p| p.id() == process))
            .map(SegmentId)
    }

    /// Number of segments queued under a common size; None if `size` is not one
    pub fn free_list_len(&self, size: Size) -> Option<usize> {
        self.free_list.queue_len(size)
    }

    /// Queue contents for a common size, head first
    pub fn free_list_entries(&self, size: Size) -> Option<Vec<SegmentId>> {
        self.free_list.entries(size)
    }
}
