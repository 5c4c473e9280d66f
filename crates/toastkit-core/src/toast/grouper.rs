//! Partition live toasts by screen anchor for rendering

use crate::types::{Position, ToastRecord};

/// Toasts split into one ordered bucket per [`Position`]
#[derive(Debug, Clone, Default)]
pub struct PositionBuckets {
    buckets: [Vec<ToastRecord>; 6],
}

impl PositionBuckets {
    /// Records anchored at `position`, in insertion order
    pub fn get(&self, position: Position) -> &[ToastRecord] {
        &self.buckets[position.index()]
    }

    /// Non-empty buckets in [`Position::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &[ToastRecord])> {
        Position::ALL
            .into_iter()
            .map(move |position| (position, self.get(position)))
            .filter(|(_, records)| !records.is_empty())
    }

    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Group records, active and exiting alike, keeping their relative order.
pub fn group_by_position<'a>(records: impl IntoIterator<Item = &'a ToastRecord>) -> PositionBuckets {
    let mut grouped = PositionBuckets::default();
    for record in records {
        grouped.buckets[record.position.index()].push(record.clone());
    }
    grouped
}
