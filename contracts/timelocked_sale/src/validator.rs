//! Admission predicates. Each check is a pure function over the current time,
//! the proposed contribution and the running totals, and fails with its own
//! error so a rejected purchase always names the condition it broke.

use crate::errors::Error;
use crate::types::{ContributionLimits, RaiseState, SaleWindow};

/// `opening_time <= now < closing_time`.
pub fn is_open(window: &SaleWindow, now: u64) -> Result<(), Error> {
    if now < window.opening_time {
        return Err(Error::SaleNotOpen);
    }
    if now >= window.closing_time {
        return Err(Error::SaleEnded);
    }
    Ok(())
}

/// Per-call limits; cumulative history is deliberately not consulted.
pub fn within_limits(limits: &ContributionLimits, value: i128) -> Result<(), Error> {
    if value < limits.min_contribution {
        return Err(Error::BelowMinimumContribution);
    }
    if value > limits.max_contribution {
        return Err(Error::AboveMaximumContribution);
    }
    Ok(())
}

pub fn cap_ok(raise: &RaiseState, value: i128) -> Result<(), Error> {
    let next = raise
        .total_raised
        .checked_add(value)
        .ok_or(Error::ArithmeticOverflow)?;
    if next > raise.cap {
        return Err(Error::CapExceeded);
    }
    Ok(())
}

pub fn has_closed(window: &SaleWindow, now: u64) -> bool {
    now >= window.closing_time
}

pub fn cap_reached(raise: &RaiseState) -> bool {
    raise.total_raised >= raise.cap
}

#[cfg(test)]
mod test {
    use super::*;

    fn window() -> SaleWindow {
        SaleWindow {
            opening_time: 100,
            closing_time: 200,
        }
    }

    fn raise(total_raised: i128) -> RaiseState {
        RaiseState {
            rate: 500,
            cap: 70,
            total_raised,
        }
    }

    #[test]
    fn test_window_bounds() {
        let w = window();
        assert_eq!(is_open(&w, 99), Err(Error::SaleNotOpen));
        assert_eq!(is_open(&w, 100), Ok(()));
        assert_eq!(is_open(&w, 199), Ok(()));
        assert_eq!(is_open(&w, 200), Err(Error::SaleEnded));
        assert_eq!(is_open(&w, 10_000), Err(Error::SaleEnded));
        assert!(!has_closed(&w, 199));
        assert!(has_closed(&w, 200));
    }

    #[test]
    fn test_limits_are_inclusive() {
        let limits = ContributionLimits {
            min_contribution: 2,
            max_contribution: 50,
        };
        assert_eq!(within_limits(&limits, 1), Err(Error::BelowMinimumContribution));
        assert_eq!(within_limits(&limits, 2), Ok(()));
        assert_eq!(within_limits(&limits, 50), Ok(()));
        assert_eq!(within_limits(&limits, 51), Err(Error::AboveMaximumContribution));
    }

    #[test]
    fn test_cap_exact_fill_is_accepted() {
        assert_eq!(cap_ok(&raise(40), 30), Ok(()));
        assert_eq!(cap_ok(&raise(40), 31), Err(Error::CapExceeded));
        assert_eq!(cap_ok(&raise(70), 1), Err(Error::CapExceeded));
        assert!(!cap_reached(&raise(69)));
        assert!(cap_reached(&raise(70)));
    }

    #[test]
    fn test_cap_overflow_is_reported() {
        let r = RaiseState {
            rate: 1,
            cap: i128::MAX,
            total_raised: i128::MAX,
        };
        assert_eq!(cap_ok(&r, 1), Err(Error::ArithmeticOverflow));
    }
}
