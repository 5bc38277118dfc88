use dedup_framework::{Capacity, SeenSet, SeenSetError};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_comparison_is_byte_exact() {
    let mut set = SeenSet::new();
    set.record(b"2024-01-01T00:00:00Z\n").unwrap();

    assert!(set.was_seen(b"2024-01-01T00:00:00Z\n"));
    // Unterminated last line is a different entry.
    assert!(!set.was_seen(b"2024-01-01T00:00:00Z"));
    assert!(!set.was_seen(b"2024-01-01t00:00:00z\n"));
    assert!(!set.was_seen(b"2024-01-01T00:00:00Z\n\n"));
}

#[test]
fn test_first_occurrence_wins() {
    let input: [&[u8]; 5] = [b"A\n", b"B\n", b"A\n", b"C\n", b"B\n"];
    let mut set = SeenSet::new();
    let kept: Vec<&[u8]> = input
        .iter()
        .copied()
        .filter(|line| set.record(line).unwrap())
        .collect();
    assert_eq!(kept, vec![&b"A\n"[..], &b"B\n"[..], &b"C\n"[..]]);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_bounded_sized_to_candidates_never_fails() {
    let input: Vec<String> = (0..50).map(|i| format!("line {}\n", i % 20)).collect();
    let mut set = SeenSet::with_capacity(Capacity::Bounded(input.len()));
    for line in &input {
        set.record(line.as_bytes()).unwrap();
    }
    assert_eq!(set.len(), 20);
    assert!(!set.is_full());
}

#[test]
fn test_bounded_exhaustion_reports_capacity() {
    let mut set = SeenSet::with_capacity(Capacity::Bounded(2));
    set.record(b"a").unwrap();
    set.record(b"b").unwrap();
    assert_eq!(
        set.record(b"c").unwrap_err(),
        SeenSetError::CapacityExhausted { capacity: 2 }
    );
    assert_eq!(set.len(), 2);
}

#[test]
fn test_capacity_limit() {
    assert_eq!(Capacity::Unbounded.limit(), None);
    assert_eq!(Capacity::Bounded(7).limit(), Some(7));
    assert_eq!(Capacity::default(), Capacity::Unbounded);
}

proptest! {
    #[test]
    fn matches_reference_linear_scan(
        lines in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..4), 0..40)
    ) {
        let mut set = SeenSet::new();
        let mut reference: Vec<&[u8]> = Vec::new();
        for line in &lines {
            let expected_seen = reference.iter().any(|seen| *seen == line.as_slice());
            prop_assert_eq!(set.was_seen(line), expected_seen);
            prop_assert_eq!(set.record(line).unwrap(), !expected_seen);
            if !expected_seen {
                reference.push(line);
            }
        }
        let distinct: HashSet<&Vec<u8>> = lines.iter().collect();
        prop_assert_eq!(set.len(), distinct.len());
    }
}
