use orderly_rs::{LinkedQueue, QueueError};

#[cfg(test)]
mod tests {
    use super::*;

    // --- Retry-queue pruning scenario ---

    #[test]
    fn test_prune_expired_entries_mid_traversal() {
        #[derive(Debug)]
        struct Retry {
            attempts: u8,
            target: &'static str,
        }

        let mut retries: LinkedQueue<Retry> = LinkedQueue::new();
        retries.offer(Retry { attempts: 1, target: "a" });
        retries.offer(Retry { attempts: 5, target: "b" });
        retries.offer(Retry { attempts: 2, target: "c" });
        retries.offer(Retry { attempts: 7, target: "d" });

        let mut cursor = retries.cursor();
        while cursor.has_next() {
            if cursor.next(&retries).unwrap().attempts > 3 {
                cursor.remove(&mut retries).unwrap();
            }
        }

        let survivors: Vec<_> = retries.iter().map(|r| r.target).collect();
        assert_eq!(survivors, vec!["a", "c"]);
    }

    #[test]
    fn test_traversal_aborts_when_producer_interferes() {
        let mut queue: LinkedQueue<u32> = [1, 2, 3].into_iter().collect();
        let mut cursor = queue.cursor();

        assert_eq!(cursor.next(&queue), Ok(&1));

        // A producer slips a new entry in between cursor steps.
        queue.offer(4);

        let err = cursor.next(&queue).unwrap_err();
        assert!(matches!(err, QueueError::StructurallyModified { .. }));

        // The queue itself stays consistent and fully usable.
        let drained: Vec<u32> = queue.into_iter().collect();
        assert_eq!(drained, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_worker_loop_drains_in_arrival_order() {
        let mut queue = LinkedQueue::new();
        for id in ["job-1", "job-2", "job-3"] {
            queue.offer(id);
        }

        let mut processed = Vec::new();
        while let Some(id) = queue.poll() {
            processed.push(id);
        }
        assert_eq!(processed, vec!["job-1", "job-2", "job-3"]);
        assert_eq!(queue.poll(), None);
    }

    // --- Persistence round-trip through the public API ---

    #[test]
    fn test_snapshot_and_restore_preserves_fifo_contract() {
        let queue: LinkedQueue<u32> = (1..=5).collect();

        let snapshot = serde_json::to_vec(&queue).unwrap();
        let mut restored: LinkedQueue<u32> = serde_json::from_slice(&snapshot).unwrap();

        assert_eq!(restored.len(), 5);
        assert_eq!(restored.peek(), Some(&1));

        let drained: Vec<u32> = std::iter::from_fn(|| restored.poll()).collect();
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
    }
}
