use core::ops::Range;

use log::{debug, trace};

use crate::{
    delta::{Delta, DeltaOperation},
    tracking::change_store::ChangeStore,
    types::tracked_change::ChangeSpan,
};

/// Moves every stored change so that it keeps pointing at the same text after
/// the document underwent `delta`. Insertions whose text has been deleted
/// entirely are removed, deletion anchors are never removed.
///
/// The delta is trusted: operations reaching past the end of the document
/// simply affect no changes. Positions never go below zero and saturate at
/// `usize::MAX`.
///
/// The records are adjusted in place while the delta is walked, so the
/// cursor advances over retained and inserted characters but not over
/// deleted ones. This keeps the cursor and the records in the same
/// coordinates at every step.
pub fn adjust_positions(store: &mut ChangeStore, delta: &Delta) {
    let mut offset: usize = 0;

    for operation in delta {
        match operation {
            DeltaOperation::Retain(length) => offset = offset.saturating_add(*length),
            DeltaOperation::Insert(text) => {
                let length = text.chars().count();

                for change in store.iter_mut() {
                    let span = shift_for_insert(change.span, offset, length);
                    if span != change.span {
                        trace!("Insert of {length} at {offset} moves {change}");
                        change.span = span;
                    }
                }

                offset = offset.saturating_add(length);
            }
            DeltaOperation::Delete(length) => {
                let deleted = offset..offset.saturating_add(*length);

                store.retain_mut(|change| match shift_for_delete(change.span, &deleted) {
                    Some(span) => {
                        if span != change.span {
                            trace!("Delete of {deleted:?} moves {change}");
                            change.span = span;
                        }
                        true
                    }
                    None => {
                        debug!("Delete of {deleted:?} removes {change}");
                        false
                    }
                });
            }
        }
    }
}

/// Position of a span after `length` characters are inserted at `offset`.
fn shift_for_insert(span: ChangeSpan, offset: usize, length: usize) -> ChangeSpan {
    match span {
        ChangeSpan::Insertion { start, end } if start >= offset => ChangeSpan::Insertion {
            start: start.saturating_add(length),
            end: end.saturating_add(length),
        },

        // typing inside a tracked insertion grows it
        ChangeSpan::Insertion { start, end } if start < offset && offset < end => {
            ChangeSpan::Insertion {
                start,
                end: end.saturating_add(length),
            }
        }

        ChangeSpan::Deletion { start, direction } if start >= offset => ChangeSpan::Deletion {
            start: start.saturating_add(length),
            direction,
        },

        span @ (ChangeSpan::Insertion { .. } | ChangeSpan::Deletion { .. }) => span,
    }
}

/// Position of a span after the characters in `deleted` are removed, or
/// `None` if nothing of it is left.
fn shift_for_delete(span: ChangeSpan, deleted: &Range<usize>) -> Option<ChangeSpan> {
    let length = deleted.len();

    let shifted = match span {
        // before the deleted range
        ChangeSpan::Insertion { end, .. } if end <= deleted.start => span,

        // after the deleted range
        ChangeSpan::Insertion { start, end } if start >= deleted.end => ChangeSpan::Insertion {
            start: start.saturating_sub(length),
            end: end.saturating_sub(length),
        },

        // covered by the deleted range
        ChangeSpan::Insertion { start, end } if deleted.start <= start && end <= deleted.end => {
            return None;
        }

        // covering the deleted range
        ChangeSpan::Insertion { start, end } if start <= deleted.start && deleted.end <= end => {
            ChangeSpan::Insertion {
                start,
                end: end.saturating_sub(length),
            }
        }

        // left edge clipped
        ChangeSpan::Insertion { end, .. } if end > deleted.end => ChangeSpan::Insertion {
            start: deleted.start,
            end: end.saturating_sub(length),
        },

        // right edge clipped
        ChangeSpan::Insertion { start, .. } => ChangeSpan::Insertion {
            start,
            end: deleted.start,
        },

        ChangeSpan::Deletion { start, direction } if start >= deleted.end => {
            ChangeSpan::Deletion {
                start: start.saturating_sub(length),
                direction,
            }
        }

        ChangeSpan::Deletion { start, direction } if start >= deleted.start => {
            ChangeSpan::Deletion {
                start: deleted.start,
                direction,
            }
        }

        ChangeSpan::Deletion { .. } => span,
    };

    match shifted {
        ChangeSpan::Insertion { start, end } if end <= start => None,
        shifted @ (ChangeSpan::Insertion { .. } | ChangeSpan::Deletion { .. }) => Some(shifted),
    }
}
