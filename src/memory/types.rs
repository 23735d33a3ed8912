/*!
 * Memory Types
 * Outcomes, reports and statistics produced by the allocator
 */

use crate::core::limits::{
    PRESSURE_CRITICAL_THRESHOLD, PRESSURE_HIGH_THRESHOLD, PRESSURE_MEDIUM_THRESHOLD,
};
use crate::core::types::{Percentage, ProcessId, SegmentId, Size};
use crate::core::InlineString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What happens to a free-list slot after its segment is freed again
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FreeListPolicy {
    /// A slot consumed by an allocation is gone for good; the segment is
    /// only reachable through the fallback scan afterwards.
    #[default]
    Strict,
    /// Freed common-size segments go back to the tail of their queue.
    Replenishing,
}

impl FreeListPolicy {
    /// Parse a policy name, case-insensitively
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "replenishing" => Some(Self::Replenishing),
            _ => None,
        }
    }
}

impl fmt::Display for FreeListPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FreeListPolicy::Strict => write!(f, "strict"),
            FreeListPolicy::Replenishing => write!(f, "replenishing"),
        }
    }
}

/// Which admission path placed a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AllocationPath {
    /// Popped from the queue of this common size
    FreeList { size_class: Size },
    /// First free, large-enough segment in construction order
    FallbackScan,
}

/// Result of `allocate_process`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AllocationOutcome {
    Allocated {
        process: ProcessId,
        name: InlineString,
        segment: SegmentId,
        capacity: Size,
        path: AllocationPath,
    },
    NotAllocated {
        process: ProcessId,
        name: InlineString,
    },
}

impl AllocationOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, AllocationOutcome::Allocated { .. })
    }

    pub fn segment(&self) -> Option<SegmentId> {
        match self {
            AllocationOutcome::Allocated { segment, .. } => Some(*segment),
            AllocationOutcome::NotAllocated { .. } => None,
        }
    }

    pub fn path(&self) -> Option<AllocationPath> {
        match self {
            AllocationOutcome::Allocated { path, .. } => Some(*path),
            AllocationOutcome::NotAllocated { .. } => None,
        }
    }
}

impl fmt::Display for AllocationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationOutcome::Allocated { name, capacity, .. } => {
                write!(f, "{} allocated to segment of size {}.", name, capacity)
            }
            AllocationOutcome::NotAllocated { name, .. } => {
                write!(f, "No available memory for {}.", name)
            }
        }
    }
}

/// Result of `deallocate_process`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DeallocationOutcome {
    Deallocated {
        process: ProcessId,
        name: InlineString,
        segment: SegmentId,
        capacity: Size,
    },
    NotFound {
        process: ProcessId,
        name: InlineString,
    },
}

impl DeallocationOutcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, DeallocationOutcome::Deallocated { .. })
    }

    pub fn segment(&self) -> Option<SegmentId> {
        match self {
            DeallocationOutcome::Deallocated { segment, .. } => Some(*segment),
            DeallocationOutcome::NotFound { .. } => None,
        }
    }
}

impl fmt::Display for DeallocationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeallocationOutcome::Deallocated { name, capacity, .. } => {
                write!(f, "{} deallocated from segment of size {}.", name, capacity)
            }
            DeallocationOutcome::NotFound { name, .. } => {
                write!(f, "{} not found in memory.", name)
            }
        }
    }
}

/// Occupancy of one segment as seen by a renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SegmentStatus {
    Free,
    Occupied { process: ProcessId, name: InlineString },
}

impl fmt::Display for SegmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentStatus::Free => write!(f, "Free"),
            SegmentStatus::Occupied { name, .. } => write!(f, "Occupied by {}", name),
        }
    }
}

/// One line of the memory layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentReport {
    pub segment: SegmentId,
    pub capacity: Size,
    pub status: SegmentStatus,
}

impl SegmentReport {
    #[inline]
    pub fn is_free(&self) -> bool {
        matches!(self.status, SegmentStatus::Free)
    }
}

impl fmt::Display for SegmentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment size {}: {}", self.capacity, self.status)
    }
}

/// Snapshot of every segment in construction order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryLayout(pub Vec<SegmentReport>);

impl MemoryLayout {
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.0.iter().map(ToString::to_string)
    }
}

impl std::ops::Deref for MemoryLayout {
    type Target = [SegmentReport];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for MemoryLayout {
    type Item = SegmentReport;
    type IntoIter = std::vec::IntoIter<SegmentReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for MemoryLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", report)?;
        }
        Ok(())
    }
}

/// Memory statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStats {
    pub total_capacity: Size,
    pub occupied_capacity: Size,
    pub free_capacity: Size,
    /// Sum of occupant sizes
    pub requested: Size,
    /// Capacity held by occupied segments but not requested by their occupant
    pub internal_fragmentation: Size,
    pub segment_count: usize,
    pub occupied_segments: usize,
    pub free_segments: usize,
    /// Segments still sitting in some free-list queue
    pub queued_segments: usize,
    pub usage_percentage: Percentage,
}

impl MemoryStats {
    pub fn memory_pressure(&self) -> MemoryPressure {
        let ratio = self.usage_percentage / 100.0;
        if ratio >= PRESSURE_CRITICAL_THRESHOLD {
            MemoryPressure::Critical
        } else if ratio >= PRESSURE_HIGH_THRESHOLD {
            MemoryPressure::High
        } else if ratio >= PRESSURE_MEDIUM_THRESHOLD {
            MemoryPressure::Medium
        } else {
            MemoryPressure::Low
        }
    }
}

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemoryPressure {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for MemoryPressure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MemoryPressure::Low => write!(f, "LOW"),
            MemoryPressure::Medium => write!(f, "MEDIUM"),
            MemoryPressure::High => write!(f, "HIGH"),
            MemoryPressure::Critical => write!(f, "CRITICAL"),
        }
    }
}
