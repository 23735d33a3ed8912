/*!
 * Shared Allocator Tests
 * Concurrent callers against one allocator
 */

use quickfit::{
    AllocatorConfig, FreeListPolicy, MemoryInfo, Process, QuickFitAllocator, SegmentAllocator,
    SharedAllocator,
};
use std::collections::HashSet;
use std::thread;

#[test]
fn test_concurrent_alloc_free_cycles() {
    let config = AllocatorConfig::new(vec![16, 32]).with_policy(FreeListPolicy::Replenishing);
    let shared = SharedAllocator::with_config(&[16, 16, 32, 32, 48, 64], &config);

    let handles: Vec<_> = (0..6)
        .map(|t| {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let p = Process::new((t * 7 + i) % 40 + 1, format!("w{}", t));
                    if shared.allocate_process(&p).is_success() {
                        assert!(shared.locate(p.id()).is_some());
                        assert!(shared.deallocate_process(&p).is_success());
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = shared.stats();
    assert_eq!(stats.occupied_segments, 0);
    assert_eq!(stats.queued_segments, 4);

    let snapshot = shared.snapshot();
    let queued: HashSet<_> = snapshot
        .size_classes()
        .iter()
        .flat_map(|&c| snapshot.free_list_entries(c).unwrap_or_default())
        .collect();
    assert_eq!(queued.len(), 4);
}

#[test]
fn test_trait_object_style_usage() {
    fn fill<A: SegmentAllocator + MemoryInfo>(allocator: &mut A, count: usize) -> usize {
        (0..count)
            .filter(|_| allocator.allocate_process(&Process::unnamed(1)).is_success())
            .count()
    }

    let mut plain = QuickFitAllocator::new(&[10, 20, 30]);
    assert_eq!(fill(&mut plain, 5), 3);

    let mut shared = SharedAllocator::new(QuickFitAllocator::new(&[10, 20, 30]));
    assert_eq!(fill(&mut shared, 5), 3);
    assert_eq!(shared.stats(), plain.stats());
    assert_eq!(
        SegmentAllocator::display_memory(&shared).to_string(),
        "Segment size 10: Occupied by Process\n\
         Segment size 20: Occupied by Process\n\
         Segment size 30: Occupied by Process"
    );
}
