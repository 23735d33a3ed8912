/*!
 * Memory Reporting
 * Read-only views over the segment arena
 */

use super::QuickFitAllocator;
use crate::core::types::{SegmentId, Size};
use crate::memory::types::{MemoryLayout, MemoryStats, SegmentReport};

impl QuickFitAllocator {
    /// Capacity and occupancy of every segment, in construction order
    pub fn display_memory(&self) -> MemoryLayout {
        MemoryLayout(
            self.segments
                .iter()
                .enumerate()
                .map(|(index, segment)| SegmentReport {
                    segment: SegmentId(index),
                    capacity: segment.capacity(),
                    status: segment.status(),
                })
                .collect(),
        )
    }

    /// Occupancy totals; sums past `Size::MAX` saturate
    pub fn stats(&self) -> MemoryStats {
        // Capacities are arbitrary; sum wide so usage stays exact
        let mut total_capacity: u128 = 0;
        let mut occupied_capacity: u128 = 0;
        let mut requested: u128 = 0;
        let mut occupied_segments = 0;

        for segment in &self.segments {
            total_capacity += segment.capacity() as u128;
            if let Some(process) = segment.occupant() {
                occupied_capacity += segment.capacity() as u128;
                requested += process.size() as u128;
                occupied_segments += 1;
            }
        }

        let usage_percentage = if total_capacity == 0 {
            0.0
        } else {
            (occupied_capacity as f64 / total_capacity as f64) * 100.0
        };

        MemoryStats {
            total_capacity: saturate(total_capacity),
            occupied_capacity: saturate(occupied_capacity),
            free_capacity: saturate(total_capacity - occupied_capacity),
            requested: saturate(requested),
            internal_fragmentation: saturate(occupied_capacity - requested),
            segment_count: self.segments.len(),
            occupied_segments,
            free_segments: self.segments.len() - occupied_segments,
            queued_segments: self.free_list.len(),
            usage_percentage,
        }
    }
}

#[inline]
fn saturate(value: u128) -> Size {
    Size::try_from(value).unwrap_or(Size::MAX)
}
