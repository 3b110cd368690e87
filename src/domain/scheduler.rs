//! Rebalance scheduling with a minimum trading-day gap.
//!
//! The first momentum-defined day always produces the initial event (the
//! subscription). Afterwards the decision rule is only re-evaluated once at
//! least `gap` trading days have elapsed since the last emitted event, and
//! an event is emitted only when the decision actually changes the
//! allocation. Ties never emit.

use crate::domain::decision::{Allocation, Decision, decide};
use crate::domain::error::MomrotError;
use crate::domain::momentum::MomentumRecord;
use chrono::NaiveDate;

/// A decided allocation change on one trading day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AllocationEvent {
    pub day: usize,
    pub date: NaiveDate,
    pub allocation: Allocation,
}

/// Emits the sparse allocation-event sequence for a momentum series.
///
/// Guarantees: consecutive events are at least `gap` apart by trading-day
/// index and never carry the same allocation.
///
/// A tie on the first record is fatal: there is no prior allocation to
/// hold, so it surfaces as `AmbiguousInitialDecision`.
pub fn schedule(
    records: &[MomentumRecord],
    gap: usize,
) -> Result<Vec<AllocationEvent>, MomrotError> {
    let Some(first) = records.first() else {
        return Ok(Vec::new());
    };

    let mut current = match decide(first.large_mom, first.small_mom) {
        Decision::Allocate(a) => a,
        Decision::Hold => {
            return Err(MomrotError::AmbiguousInitialDecision { date: first.date });
        }
    };
    let mut last_event_day = first.day;
    let mut events = vec![AllocationEvent {
        day: first.day,
        date: first.date,
        allocation: current,
    }];

    for record in &records[1..] {
        if record.day - last_event_day < gap {
            continue;
        }
        if let Decision::Allocate(next) = decide(record.large_mom, record.small_mom) {
            if next != current {
                events.push(AllocationEvent {
                    day: record.day,
                    date: record.date,
                    allocation: next,
                });
                current = next;
                last_event_day = record.day;
            }
        }
    }

    Ok(events)
}
