/*!
 * Segregated Free List
 * One FIFO queue of segment ids per common size
 */

use crate::core::types::{SegmentId, Size};
use std::collections::VecDeque;
use std::ops::Range;

/// Queues of free segments, segregated by exact capacity
///
/// Size classes are sorted and deduplicated once at construction and never
/// change, so "every class >= n" is a contiguous index range. Queues hold
/// arena indices, never the segments themselves.
#[derive(Debug, Clone)]
pub(super) struct SegregatedFreeList {
    size_classes: Vec<Size>,
    queues: Vec<VecDeque<SegmentId>>,
}

impl SegregatedFreeList {
    pub fn new(common_sizes: &[Size]) -> Self {
        let mut size_classes = common_sizes.to_vec();
        size_classes.sort_unstable();
        size_classes.dedup();

        let queues = vec![VecDeque::new(); size_classes.len()];
        Self {
            size_classes,
            queues,
        }
    }

    #[inline]
    fn class_index(&self, size: Size) -> Option<usize> {
        self.size_classes.binary_search(&size).ok()
    }

    /// Indices of every class that can hold a request of `size`, smallest first
    #[inline]
    pub fn classes_for(&self, size: Size) -> Range<usize> {
        self.size_classes.partition_point(|&class| class < size)..self.size_classes.len()
    }

    #[inline]
    pub fn size_class(&self, class: usize) -> Size {
        self.size_classes[class]
    }

    pub fn size_classes(&self) -> &[Size] {
        &self.size_classes
    }

    /// Append a segment to the queue matching its capacity exactly
    ///
    /// Returns false when `capacity` is not a common size.
    pub fn push(&mut self, capacity: Size, id: SegmentId) -> bool {
        match self.class_index(capacity) {
            Some(class) => {
                self.queues[class].push_back(id);
                true
            }
            None => false,
        }
    }

    /// Like `push`, but a segment already queued is left where it is
    pub fn requeue(&mut self, capacity: Size, id: SegmentId) -> bool {
        match self.class_index(capacity) {
            Some(class) if !self.queues[class].contains(&id) => {
                self.queues[class].push_back(id);
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn pop_front(&mut self, class: usize) -> Option<SegmentId> {
        self.queues[class].pop_front()
    }

    /// Queue length for a common size, or None if `size` is not one
    pub fn queue_len(&self, size: Size) -> Option<usize> {
        self.class_index(size).map(|class| self.queues[class].len())
    }

    pub fn entries(&self, size: Size) -> Option<Vec<SegmentId>> {
        self.class_index(size)
            .map(|class| self.queues[class].iter().copied().collect())
    }

    pub fn len(&self) -> usize {
        self.queues.iter().map(VecDeque::len).sum()
    }
}
