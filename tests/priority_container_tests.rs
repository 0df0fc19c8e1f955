use heap_paths::{Error, PriorityContainer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

fn assert_heap_order<T, F>(pq: &PriorityContainer<T, F>, compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    let heap = pq.as_slice();
    for i in 1..heap.len() {
        let parent = (i - 1) / 2;
        assert_ne!(
            compare(&heap[parent], &heap[i]),
            Ordering::Greater,
            "heap order violated between index {} and {}",
            parent,
            i
        );
    }
}

#[test]
fn test_extract_in_ascending_order() {
    let mut pq = PriorityContainer::new();
    for value in [5, 3, 8, 1] {
        pq.insert(value);
    }

    let mut extracted = Vec::new();
    for _ in 0..4 {
        extracted.push(pq.extract_min().unwrap());
    }
    assert_eq!(extracted, vec![1, 3, 5, 8]);
    assert!(pq.is_empty());
}

#[test]
fn test_empty_container_errors() {
    let mut pq: PriorityContainer<i32> = PriorityContainer::new();
    assert!(matches!(pq.extract_min(), Err(Error::EmptyContainer)));
    assert!(matches!(pq.peek(), Err(Error::EmptyContainer)));
    assert_eq!(pq.len(), 0);
}

#[test]
fn test_peek_does_not_remove() {
    let mut pq = PriorityContainer::new();
    pq.extend(vec![10, 4, 7]);
    assert_eq!(*pq.peek().unwrap(), 4);
    assert_eq!(*pq.peek().unwrap(), 4);
    assert_eq!(pq.len(), 3);
    assert_eq!(pq.extract_min().unwrap(), 4);
    assert_eq!(*pq.peek().unwrap(), 7);
}

#[test]
fn test_custom_comparator_on_tuples() {
    let mut pq = PriorityContainer::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    pq.insert((10, 'A'));
    pq.insert((5, 'B'));
    pq.insert((15, 'C'));

    assert_eq!(pq.extract_min().unwrap(), (5, 'B'));
    assert_eq!(pq.extract_min().unwrap(), (10, 'A'));
    assert_eq!(pq.extract_min().unwrap(), (15, 'C'));
}

#[test]
fn test_reverse_comparator_gives_max_heap() {
    let mut pq = PriorityContainer::with_comparator(|a: &i64, b: &i64| b.cmp(a));
    pq.extend(vec![3, 9, -2, 9, 0]);
    assert_eq!(pq.into_sorted_vec(), vec![9, 9, 3, 0, -2]);
}

#[test]
fn test_heap_invariant_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(0x4EA9);
    let by_value = |a: &i32, b: &i32| a.cmp(b);
    let mut pq = PriorityContainer::with_comparator(by_value);

    for _ in 0..2_000 {
        if pq.is_empty() || rng.gen_bool(0.6) {
            pq.insert(rng.gen_range(-500..500));
        } else {
            pq.extract_min().unwrap();
        }
        assert_heap_order(&pq, by_value);
    }
}

#[test]
fn test_extraction_order_matches_sort() {
    let mut rng = StdRng::seed_from_u64(17);
    for n in [0usize, 1, 2, 3, 10, 257] {
        let values: Vec<u16> = (0..n).map(|_| rng.gen_range(0..50)).collect();
        let mut pq = PriorityContainer::with_capacity(n);
        pq.extend(values.iter().copied());

        let mut expected = values.clone();
        expected.sort_unstable();
        assert_eq!(pq.into_sorted_vec(), expected, "n={}", n);
    }
}

#[test]
fn test_size_after_inserts_and_extracts() {
    let mut pq = PriorityContainer::new();
    for i in 0..25 {
        pq.insert(i % 7);
    }
    for _ in 0..9 {
        pq.extract_min().unwrap();
    }
    assert_eq!(pq.len(), 25 - 9);

    pq.clear();
    assert!(pq.is_empty());
}
