//! Dense position series with settlement lag.
//!
//! An allocation is decided on the close of its event day and held from the
//! next trading day. Expansion is an explicit scan over the event sequence:
//! forward-fill the decided allocation, then shift by one record.

use crate::domain::decision::Allocation;
use crate::domain::momentum::MomentumRecord;
use crate::domain::scheduler::AllocationEvent;

/// Maps sparse events to the position held on each record's day.
///
/// Entry i is the allocation of the latest event strictly before record i's
/// trading day (one-day lag), or `None` before the first event has taken
/// effect.
pub fn map_positions(
    records: &[MomentumRecord],
    events: &[AllocationEvent],
) -> Vec<Option<Allocation>> {
    let mut positions = Vec::with_capacity(records.len());
    let mut decided: Option<Allocation> = None;
    let mut next_event = events.iter().peekable();

    for record in records {
        // An event on this very day accrues only from the next day on.
        while let Some(event) = next_event.peek() {
            if event.day >= record.day {
                break;
            }
            decided = Some(event.allocation);
            next_event.next();
        }
        positions.push(decided);
    }

    positions
}
