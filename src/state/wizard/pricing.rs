//! Rental price calculation

use super::form::RentalPeriod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whole currency units. Totals may go negative for inverted date ranges.
pub type Money = i64;

/// Flat delivery surcharge added on the confirmation step
pub const DELIVERY_FEE: Money = 500;

/// Flat insurance surcharge, always included in the grand total
pub const INSURANCE_FEE: Money = 250;

/// Price table for the equipment being requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentOffer {
    pub equipment_id: String,
    pub name: String,
    pub vendor: String,
    pub price_per_day: Money,
    pub price_per_week: Money,
    pub price_per_month: Money,
}

impl EquipmentOffer {
    pub fn rate(&self, period: RentalPeriod) -> Money {
        match period {
            RentalPeriod::Daily => self.price_per_day,
            RentalPeriod::Weekly => self.price_per_week,
            RentalPeriod::Monthly => self.price_per_month,
        }
    }
}

/// Whole days between two dates; negative when `end` precedes `start`
pub fn rental_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days()
}

/// Integer division rounding toward positive infinity
fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    let quotient = numerator / denominator;
    if numerator % denominator > 0 {
        quotient + 1
    } else {
        quotient
    }
}

/// Number of billed units for a day count under the given period
pub fn billed_units(days: i64, period: RentalPeriod) -> i64 {
    match period {
        RentalPeriod::Daily => days,
        RentalPeriod::Weekly => ceil_div(days, 7),
        RentalPeriod::Monthly => ceil_div(days, 30),
    }
}

/// Rental cost for a date range. Zero when either date is missing; the
/// range is not checked for order. Saturates instead of overflowing.
pub fn compute_total(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    period: RentalPeriod,
    offer: &EquipmentOffer,
) -> Money {
    let (Some(start), Some(end)) = (start, end) else {
        return 0;
    };
    billed_units(rental_days(start, end), period).saturating_mul(offer.rate(period))
}

/// Line items shown on the confirmation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub rental_cost: Money,
    pub delivery_fee: Money,
    pub insurance_fee: Money,
}

impl PriceBreakdown {
    pub fn new(rental_cost: Money) -> Self {
        Self {
            rental_cost,
            delivery_fee: DELIVERY_FEE,
            insurance_fee: INSURANCE_FEE,
        }
    }

    pub fn grand_total(&self) -> Money {
        self.rental_cost
            .saturating_add(self.delivery_fee)
            .saturating_add(self.insurance_fee)
    }
}

/// Format an amount with thousands separators, e.g. `$28,000`
pub fn format_money(symbol: &str, amount: Money) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    fn wireline_offer() -> EquipmentOffer {
        EquipmentOffer {
            equipment_id: "EQ-001".to_string(),
            name: "Wireline Tools - T-Series Complete Kit".to_string(),
            vendor: "Schlumberger".to_string(),
            price_per_day: 1250,
            price_per_week: 7500,
            price_per_month: 28000,
        }
    }

    mod compute_total {
        use super::*;

        #[test]
        fn test_missing_dates_cost_nothing() {
            let offer = wireline_offer();
            for period in RentalPeriod::ALL {
                assert_eq!(compute_total(None, None, period, &offer), 0);
                assert_eq!(compute_total(date(2024, 11, 1), None, period, &offer), 0);
                assert_eq!(compute_total(None, date(2024, 11, 6), period, &offer), 0);
            }
        }

        #[test]
        fn test_daily_five_days() {
            let total = compute_total(
                date(2024, 11, 1),
                date(2024, 11, 6),
                RentalPeriod::Daily,
                &wireline_offer(),
            );
            assert_eq!(total, 6250);
        }

        #[test]
        fn test_weekly_rounds_partial_week_up() {
            let total = compute_total(
                date(2024, 11, 1),
                date(2024, 11, 6),
                RentalPeriod::Weekly,
                &wireline_offer(),
            );
            assert_eq!(total, 7500);
        }

        #[test]
        fn test_weekly_eight_days_is_two_weeks() {
            let total = compute_total(
                date(2024, 11, 1),
                date(2024, 11, 9),
                RentalPeriod::Weekly,
                &wireline_offer(),
            );
            assert_eq!(total, 15000);
        }

        #[test]
        fn test_monthly_thirty_days_is_one_month() {
            let total = compute_total(
                date(2024, 11, 1),
                date(2024, 12, 1),
                RentalPeriod::Monthly,
                &wireline_offer(),
            );
            assert_eq!(total, 28000);
        }

        #[test]
        fn test_same_day_costs_nothing() {
            let total = compute_total(
                date(2024, 11, 1),
                date(2024, 11, 1),
                RentalPeriod::Monthly,
                &wireline_offer(),
            );
            assert_eq!(total, 0);
        }

        // Inverted ranges are not guarded and produce negative totals.
        #[test]
        fn test_inverted_range_goes_negative() {
            let offer = wireline_offer();
            let start = date(2024, 11, 6);
            let end = date(2024, 11, 1);
            assert_eq!(compute_total(start, end, RentalPeriod::Daily, &offer), -6250);
            // ceil(-5 / 7) == 0
            assert_eq!(compute_total(start, end, RentalPeriod::Weekly, &offer), 0);
            let end = date(2024, 10, 27);
            // ceil(-10 / 7) == -1
            assert_eq!(
                compute_total(start, end, RentalPeriod::Weekly, &offer),
                -7500
            );
        }

        #[test]
        fn test_huge_rates_saturate() {
            let offer = EquipmentOffer {
                price_per_day: Money::MAX / 2,
                ..wireline_offer()
            };
            let start = date(2024, 11, 1);
            let end = date(2024, 11, 6);
            let total = compute_total(start, end, RentalPeriod::Daily, &offer);
            assert_eq!(total, Money::MAX);
            assert_eq!(PriceBreakdown::new(total).grand_total(), Money::MAX);
            assert_eq!(
                compute_total(end, start, RentalPeriod::Daily, &offer),
                Money::MIN
            );
        }
    }

    #[test]
    fn test_ceil_div_matches_math_ceil() {
        assert_eq!(ceil_div(5, 7), 1);
        assert_eq!(ceil_div(7, 7), 1);
        assert_eq!(ceil_div(8, 7), 2);
        assert_eq!(ceil_div(0, 7), 0);
        assert_eq!(ceil_div(-5, 7), 0);
        assert_eq!(ceil_div(-8, 7), -1);
    }

    #[test]
    fn test_rate_per_period() {
        let offer = wireline_offer();
        assert_eq!(offer.rate(RentalPeriod::Daily), 1250);
        assert_eq!(offer.rate(RentalPeriod::Weekly), 7500);
        assert_eq!(offer.rate(RentalPeriod::Monthly), 28000);
    }

    #[test]
    fn test_breakdown_adds_flat_fees() {
        let breakdown = PriceBreakdown::new(6250);
        assert_eq!(breakdown.delivery_fee, 500);
        assert_eq!(breakdown.insurance_fee, 250);
        assert_eq!(breakdown.grand_total(), 7000);
        assert_eq!(PriceBreakdown::new(0).grand_total(), 750);
    }

    mod format_money {
        use super::*;

        #[test]
        fn test_groups_thousands() {
            assert_eq!(format_money("$", 0), "$0");
            assert_eq!(format_money("$", 500), "$500");
            assert_eq!(format_money("$", 6250), "$6,250");
            assert_eq!(format_money("$", 28000), "$28,000");
            assert_eq!(format_money("$", 1234567), "$1,234,567");
        }

        #[test]
        fn test_negative_and_other_symbol() {
            assert_eq!(format_money("$", -6250), "-$6,250");
            assert_eq!(format_money("₦", 750), "₦750");
        }
    }
}
