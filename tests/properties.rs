//! Property-based tests for position tracking.

use chrono::Utc;
use proptest::prelude::*;
use track_changes::{
    ChangeKind, ChangeSpan, ChangeStore, Delta, DeltaOperation, Mutation, TrackChanges,
    TrackedChange, TrackingConfig, adjust_positions,
};

#[derive(Clone, Debug)]
struct Record {
    start: usize,
    length: usize,
    is_insertion: bool,
}

fn arbitrary_record(starts: core::ops::Range<usize>) -> impl Strategy<Value = Record> {
    (starts, 1..10usize, any::<bool>()).prop_map(|(start, length, is_insertion)| Record {
        start,
        length,
        is_insertion,
    })
}

fn arbitrary_operation() -> impl Strategy<Value = DeltaOperation> {
    prop_oneof![
        (0..20usize).prop_map(DeltaOperation::Retain),
        "[a-z]{1,5}".prop_map(DeltaOperation::Insert),
        (1..10usize).prop_map(DeltaOperation::Delete),
    ]
}

fn to_store(records: &[Record]) -> ChangeStore {
    let mut store = ChangeStore::new();

    for record in records {
        let content = "x".repeat(record.length);
        let change = if record.is_insertion {
            TrackedChange::insertion(record.start, content, "ada".to_owned(), Utc::now())
        } else {
            TrackedChange::deletion(record.start, content, None, "ada".to_owned(), Utc::now())
        };
        store.insert(change);
    }

    store
}

fn count(store: &ChangeStore, kind: ChangeKind) -> usize {
    store.iter().filter(|change| change.kind() == kind).count()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Inserting text in front of every change moves each of them by the
    /// total inserted length.
    #[test]
    fn inserts_before_changes_shift_them(
        records in prop::collection::vec(arbitrary_record(10..100), 1..20),
        inserts in prop::collection::vec((0..=10usize, "[a-z]{1,5}"), 1..5),
    ) {
        let mut store = to_store(&records);
        let before = store.iter().map(TrackedChange::span).collect::<Vec<_>>();

        let mut inserts = inserts;
        inserts.sort_by_key(|(position, _)| *position);

        let mut delta = Delta::new();
        let mut cursor = 0;
        let mut inserted = 0;
        for (position, text) in &inserts {
            delta = delta.retain(position - cursor).insert(text.as_str());
            cursor = *position;
            inserted += text.len();
        }

        adjust_positions(&mut store, &delta);

        let after = store.iter().map(TrackedChange::span).collect::<Vec<_>>();
        prop_assert_eq!(before.len(), after.len());
        for (before, after) in before.iter().zip(&after) {
            prop_assert_eq!(after.start(), before.start() + inserted);
            prop_assert_eq!(after.end(), before.end().map(|end| end + inserted));
        }
    }

    /// A single delete removes exactly the insertions it covers and shrinks
    /// the others by the overlap.
    #[test]
    fn delete_removes_covered_insertions(
        records in prop::collection::vec(arbitrary_record(0..50), 1..20),
        deleted_start in 0..60usize,
        deleted_length in 1..30usize,
    ) {
        let mut store = to_store(&records);
        let deleted = deleted_start..deleted_start + deleted_length;

        let expected = store
            .iter()
            .filter_map(|change| match change.span() {
                ChangeSpan::Insertion { start, end } => {
                    let overlap = end.min(deleted.end).saturating_sub(start.max(deleted.start));
                    let remaining = end - start - overlap;
                    (remaining > 0).then_some((change.id(), remaining))
                }
                ChangeSpan::Deletion { .. } => None,
            })
            .collect::<Vec<_>>();

        adjust_positions(&mut store, &Delta::new().retain(deleted.start).delete(deleted_length));

        let actual = store
            .iter()
            .filter_map(|change| match change.span() {
                ChangeSpan::Insertion { start, end } => Some((change.id(), end - start)),
                ChangeSpan::Deletion { .. } => None,
            })
            .collect::<Vec<_>>();

        prop_assert_eq!(actual, expected);
    }

    /// Deletion anchors survive any mutation.
    #[test]
    fn deletion_anchors_are_never_removed(
        records in prop::collection::vec(arbitrary_record(0..100), 1..20),
        operations in prop::collection::vec(arbitrary_operation(), 0..20),
    ) {
        let mut store = to_store(&records);
        let anchors = count(&store, ChangeKind::Deletion);

        adjust_positions(&mut store, &operations.into_iter().collect());

        prop_assert_eq!(count(&store, ChangeKind::Deletion), anchors);
    }

    /// Every stored insertion keeps a non-empty, well-ordered range.
    #[test]
    fn insertion_ranges_stay_valid(
        records in prop::collection::vec(arbitrary_record(0..100), 1..20),
        deltas in prop::collection::vec(prop::collection::vec(arbitrary_operation(), 0..10), 1..10),
    ) {
        let mut store = to_store(&records);

        for operations in deltas {
            adjust_positions(&mut store, &operations.into_iter().collect());

            for change in store.iter() {
                if let ChangeSpan::Insertion { start, end } = change.span() {
                    prop_assert!(start < end, "{change} is empty or inverted");
                }
            }
        }
    }

    /// Clearing leaves no changes behind, however often it's repeated.
    #[test]
    fn clear_all_is_idempotent(
        texts in prop::collection::vec("[a-z]{1,5}", 1..10),
        repeats in 1..4usize,
    ) {
        let session = TrackChanges::new(TrackingConfig::new("ada").enabled(true))
            .expect("valid configuration");

        let mut document = String::new();
        for text in &texts {
            let delta = Delta::new().retain(document.len()).insert(text.as_str());
            session.notify(Mutation::local(delta.clone(), &document));
            document = delta.apply(&document).expect("delta fits the document");
        }
        prop_assert_eq!(session.change_count(), texts.len());

        for _ in 0..repeats {
            session.clear_all();
            prop_assert!(session.get_changes().is_empty());
        }
    }
}
