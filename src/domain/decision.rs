//! Rotation decision rule.

use std::fmt;

/// Target of a full-exposure allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allocation {
    LargeCap,
    SmallCap,
    Cash,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allocation::LargeCap => write!(f, "large-cap"),
            Allocation::SmallCap => write!(f, "small-cap"),
            Allocation::Cash => write!(f, "cash"),
        }
    }
}

/// Outcome of evaluating the rule for one day.
///
/// `Hold` is the tie case: the caller keeps the prior allocation. It is
/// deliberately distinct from `Allocate(Cash)` so that exact momentum
/// equality never triggers a switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allocate(Allocation),
    Hold,
}

/// Pure decision rule, evaluated in this exact order:
/// both momenta negative → cash; small leads → small-cap; large leads →
/// large-cap; exact tie → hold.
pub fn decide(large_mom: f64, small_mom: f64) -> Decision {
    if large_mom < 0.0 && small_mom < 0.0 {
        return Decision::Allocate(Allocation::Cash);
    }
    if small_mom > large_mom {
        return Decision::Allocate(Allocation::SmallCap);
    }
    if large_mom > small_mom {
        return Decision::Allocate(Allocation::LargeCap);
    }
    Decision::Hold
}
