//! Daily strategy returns, fee adjustment, and the net-value curve.
//!
//! Fees are charged on the event day itself: the return accrued that day
//! still belongs to the outgoing position, and the subscription/redemption
//! cost of the switch is folded into it multiplicatively.

use crate::domain::decision::Allocation;
use crate::domain::momentum::MomentumRecord;
use crate::domain::scheduler::AllocationEvent;

/// Subscription and redemption rates applied at allocation changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    /// Cost of entering a non-cash position, as a fraction of value.
    pub purchase_rate: f64,
    /// Cost of exiting a non-cash position.
    pub sell_rate: f64,
}

impl FeeSchedule {
    pub const fn free() -> Self {
        Self {
            purchase_rate: 0.0,
            sell_rate: 0.0,
        }
    }
}

impl Default for FeeSchedule {
    /// ETF feeder-fund rates: 0.12% subscription, 0.375% redemption.
    fn default() -> Self {
        Self {
            purchase_rate: 0.0012,
            sell_rate: 0.00375,
        }
    }
}

fn apply_fees(raw: f64, held: Allocation, next: Allocation, fees: &FeeSchedule) -> f64 {
    let factor = match (held != Allocation::Cash, next != Allocation::Cash) {
        (true, false) => 1.0 - fees.sell_rate,
        (false, true) => 1.0 - fees.purchase_rate,
        (true, true) if held != next => (1.0 - fees.sell_rate) * (1.0 - fees.purchase_rate),
        _ => 1.0,
    };
    // A unit factor must leave the raw return bit-identical.
    if factor == 1.0 {
        raw
    } else {
        (1.0 + raw) * factor - 1.0
    }
}

/// Maps the lagged position series to fee-adjusted daily returns.
///
/// Entries are `None` where no position is defined yet. Cash earns exactly
/// zero. On an event day the transition from the held (lagged) position to
/// the newly decided allocation determines the fee factor; all other days
/// pass the raw return through unchanged. With `FeeSchedule::free()` the
/// output equals the raw position returns on every day.
pub fn compose_returns(
    records: &[MomentumRecord],
    positions: &[Option<Allocation>],
    events: &[AllocationEvent],
    fees: &FeeSchedule,
) -> Vec<Option<f64>> {
    let mut returns = Vec::with_capacity(records.len());
    let mut upcoming = events.iter().peekable();

    for (record, position) in records.iter().zip(positions) {
        while let Some(event) = upcoming.peek() {
            if event.day >= record.day {
                break;
            }
            upcoming.next();
        }
        let event_today = upcoming
            .peek()
            .filter(|e| e.day == record.day)
            .copied();

        let adjusted = position.map(|held| {
            let raw = match held {
                Allocation::LargeCap => record.large_ret,
                Allocation::SmallCap => record.small_ret,
                Allocation::Cash => 0.0,
            };
            match event_today {
                Some(event) => apply_fees(raw, held, event.allocation, fees),
                None => raw,
            }
        });
        returns.push(adjusted);
    }

    returns
}

/// Running product of (1 + return), seeded at 1.0. Undefined days stay
/// undefined and do not advance the product.
pub fn equity_curve(returns: &[Option<f64>]) -> Vec<Option<f64>> {
    let mut net = 1.0;
    returns
        .iter()
        .map(|r| {
            r.map(|r| {
                net *= 1.0 + r;
                net
            })
        })
        .collect()
}
