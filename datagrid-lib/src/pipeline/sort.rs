//! Single-key stable sort.

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::Utc;

use crate::model::GridRow;
use crate::model::Value;
use crate::state::Direction;
use crate::state::SortState;

/// Compares two field values for sorting.
///
/// Values are ranked into classes first, lowest to highest:
///
/// 1. missing fields, `Null` and `NaN`;
/// 2. numbers, compared as `f64` (`total_cmp`);
/// 3. dates and timestamps, compared chronologically with dates at midnight
///    UTC. Strings holding an RFC 3339 timestamp or a `YYYY-MM-DD` date
///    belong here too;
/// 4. everything else, compared case-sensitively by text form.
///
/// Values of different classes never compare by text, so a column mixing
/// numbers and strings still has a total order.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    SortKey::of(a).compare(&SortKey::of(b))
}

/// Reorders `indices` by the values at the sort field of the rows they
/// point to. Rows with equal keys keep their relative order in both
/// directions. With no sort the indices are left untouched.
pub fn sort_indices<R: GridRow>(rows: &[R], indices: &mut [usize], sort: Option<&SortState>) {
    let Some(sort) = sort else {
        return;
    };

    let mut keyed: Vec<(usize, SortKey)> = indices
        .iter()
        .map(|&index| {
            let value = rows[index].value(&sort.field);
            (index, SortKey::of(value.as_deref()))
        })
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        let ordering = a.compare(b);
        match sort.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    });

    for (slot, (index, _)) in indices.iter_mut().zip(keyed) {
        *slot = index;
    }
}

/// Comparable form of one field value, computed once per row.
#[derive(Debug, Clone, PartialEq)]
enum SortKey {
    Absent,
    Number(f64),
    Instant(DateTime<Utc>),
    Text(String),
}

impl SortKey {
    fn of(value: Option<&Value>) -> Self {
        let Some(value) = value else {
            return SortKey::Absent;
        };

        match value {
            Value::Null => SortKey::Absent,
            Value::Float(f) if f.is_nan() => SortKey::Absent,
            v if v.is_numeric() => v.as_f64().map_or(SortKey::Absent, SortKey::Number),
            v => match v.as_instant() {
                Some(instant) => SortKey::Instant(instant),
                None => SortKey::Text(v.to_string()),
            },
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Absent => 0,
            SortKey::Number(_) => 1,
            SortKey::Instant(_) => 2,
            SortKey::Text(_) => 3,
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Instant(a), SortKey::Instant(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}
