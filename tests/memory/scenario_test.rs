/*!
 * Allocation Scenario Tests
 * End-to-end behaviour of the quick-fit policy
 */

use pretty_assertions::assert_eq;
use quickfit::{
    AllocationOutcome, AllocationPath, AllocatorConfig, DeallocationOutcome, FreeListPolicy,
    MemoryInfo, Process, QuickFitAllocator, SegmentId, SegmentStatus,
};

#[test]
fn test_no_common_sizes_uses_fallback_scan() {
    let mut allocator = QuickFitAllocator::new(&[16, 32, 64]);
    for size in [10, 20, 50, 100] {
        assert_eq!(allocator.free_list_len(size), Some(0));
    }

    let p = Process::new(20, "P1");
    let outcome = allocator.allocate_process(&p);

    assert!(outcome.is_success());
    assert_eq!(
        outcome,
        AllocationOutcome::Allocated {
            process: p.id(),
            name: "P1".into(),
            segment: SegmentId(1),
            capacity: 32,
            path: AllocationPath::FallbackScan,
        }
    );
    assert_eq!(outcome.to_string(), "P1 allocated to segment of size 32.");
}

#[test]
fn test_ascending_class_search() {
    let mut allocator = QuickFitAllocator::new(&[10, 20, 50]);
    assert_eq!(allocator.free_list_entries(10), Some(vec![SegmentId(0)]));
    assert_eq!(allocator.free_list_entries(20), Some(vec![SegmentId(1)]));
    assert_eq!(allocator.free_list_entries(50), Some(vec![SegmentId(2)]));

    let outcome = allocator.allocate_process(&Process::new(5, "tiny"));

    assert_eq!(outcome.segment(), Some(SegmentId(0)));
    assert_eq!(
        outcome.path(),
        Some(AllocationPath::FreeList { size_class: 10 })
    );
    assert_eq!(allocator.free_list_len(10), Some(0));
    assert_eq!(allocator.free_list_len(20), Some(1));
    assert_eq!(allocator.free_list_len(50), Some(1));
}

#[test]
fn test_request_too_large() {
    let mut allocator = QuickFitAllocator::new(&[10]);
    let before = allocator.display_memory();

    let p = Process::new(20, "huge");
    let outcome = allocator.allocate_process(&p);

    assert_eq!(
        outcome,
        AllocationOutcome::NotAllocated {
            process: p.id(),
            name: "huge".into(),
        }
    );
    assert_eq!(outcome.to_string(), "No available memory for huge.");
    assert_eq!(allocator.display_memory(), before);
    assert_eq!(allocator.free_list_len(10), Some(1));
}

#[test]
fn test_freed_segment_reachable_only_by_scan() {
    let mut allocator = QuickFitAllocator::new(&[10]);
    let a = Process::new(10, "A");
    let b = Process::new(10, "B");

    let first = allocator.allocate_process(&a);
    assert_eq!(
        first.path(),
        Some(AllocationPath::FreeList { size_class: 10 })
    );

    let freed = allocator.deallocate_process(&a);
    assert!(freed.is_success());
    assert_eq!(allocator.display_memory()[0].status, SegmentStatus::Free);
    assert_eq!(allocator.free_list_len(10), Some(0));

    let second = allocator.allocate_process(&b);
    assert_eq!(second.segment(), Some(SegmentId(0)));
    assert_eq!(second.path(), Some(AllocationPath::FallbackScan));
}

#[test]
fn test_deallocate_never_allocated() {
    let mut allocator = QuickFitAllocator::new(&[10, 16]);
    let resident = Process::new(12, "resident");
    allocator.allocate_process(&resident);
    let before = allocator.display_memory();
    let stats_before = allocator.stats();

    let ghost = Process::new(5, "ghost");
    let outcome = allocator.deallocate_process(&ghost);

    assert_eq!(
        outcome,
        DeallocationOutcome::NotFound {
            process: ghost.id(),
            name: "ghost".into(),
        }
    );
    assert_eq!(outcome.to_string(), "ghost not found in memory.");
    assert_eq!(allocator.display_memory(), before);
    assert_eq!(allocator.stats(), stats_before);
}

#[test]
fn test_fallback_picks_first_in_construction_order() {
    // 64 precedes 32, so the scan lands on 64 even though 32 fits tighter
    let mut allocator = QuickFitAllocator::new(&[8, 64, 32]);
    let outcome = allocator.allocate_process(&Process::new(30, "p"));
    assert_eq!(outcome.segment(), Some(SegmentId(1)));
}

#[test]
fn test_fallback_reaches_exhausted_common_size_segments() {
    // Segment 1 loses its queue slot to `a` but stays reachable by scan
    let mut allocator = QuickFitAllocator::new(&[20, 10]);
    let a = Process::new(3, "a");
    allocator.allocate_process(&a);
    allocator.deallocate_process(&a);

    let outcome = allocator.allocate_process(&Process::new(4, "b"));
    assert_eq!(
        outcome.path(),
        Some(AllocationPath::FreeList { size_class: 20 })
    );

    let outcome = allocator.allocate_process(&Process::new(4, "c"));
    assert_eq!(outcome.segment(), Some(SegmentId(1)));
    assert_eq!(outcome.path(), Some(AllocationPath::FallbackScan));
}

#[test]
fn test_replenishing_policy_round_trip() {
    let config = AllocatorConfig::new(vec![10, 20]).with_policy(FreeListPolicy::Replenishing);
    let mut allocator = QuickFitAllocator::with_config(&[10, 10, 20], &config);

    let a = Process::new(10, "A");
    let b = Process::new(10, "B");
    allocator.allocate_process(&a);
    allocator.allocate_process(&b);
    assert_eq!(allocator.free_list_len(10), Some(0));

    allocator.deallocate_process(&a);
    assert_eq!(allocator.free_list_entries(10), Some(vec![SegmentId(0)]));

    let c = Process::new(9, "C");
    let outcome = allocator.allocate_process(&c);
    assert_eq!(outcome.segment(), Some(SegmentId(0)));
    assert_eq!(
        outcome.path(),
        Some(AllocationPath::FreeList { size_class: 10 })
    );
}

#[test]
fn test_layout_and_stats_after_mixed_workload() {
    let mut allocator = QuickFitAllocator::new(&[16, 10, 128, 50]);
    let procs = [
        Process::new(45, "db"),
        Process::new(10, "cache"),
        Process::new(100, "web"),
        Process::new(1, "cron"),
    ];
    let outcomes: Vec<_> = procs.iter().map(|p| allocator.allocate_process(p)).collect();

    assert_eq!(
        outcomes.iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec![
            "db allocated to segment of size 50.",
            "cache allocated to segment of size 10.",
            "web allocated to segment of size 128.",
            "cron allocated to segment of size 16.",
        ]
    );
    assert_eq!(
        allocator.display_memory().to_string(),
        "Segment size 16: Occupied by cron\n\
         Segment size 10: Occupied by cache\n\
         Segment size 128: Occupied by web\n\
         Segment size 50: Occupied by db"
    );

    let stats = allocator.stats();
    assert_eq!(stats.total_capacity, 204);
    assert_eq!(stats.requested, 156);
    assert_eq!(stats.internal_fragmentation, 48);
    assert_eq!(stats.free_segments, 0);
    assert_eq!(allocator.pressure(), quickfit::MemoryPressure::Critical);
}

#[test]
fn test_deserialized_copy_cannot_release_original() {
    let mut allocator = QuickFitAllocator::new(&[10]);
    let a = Process::new(10, "A");
    allocator.allocate_process(&a);

    let json = serde_json::to_string(&a).unwrap().replace("\"A\"", "\"B\"");
    let forged: Process = serde_json::from_str(&json).unwrap();
    assert_ne!(forged.id(), a.id());

    let outcome = allocator.deallocate_process(&forged);
    assert_eq!(outcome.to_string(), "B not found in memory.");
    assert_eq!(allocator.locate(a.id()), Some(SegmentId(0)));
}
