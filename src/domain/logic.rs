// src/domain/logic.rs

use crate::domain::listing::{Financial, ListingRecord};

/// Rounds to two decimal places, half to even, judged on the exact binary
/// value. `0.125` is a true tie and goes to `0.12`; `2.675` is stored just
/// below the tie and goes to `2.67`.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let bits = value.to_bits();
    let biased_exp = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exp) = if biased_exp == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased_exp - 1075)
    };

    // |value| * 100 == scaled * 2^exp, exactly.
    let scaled = u128::from(mantissa) * 100;
    let hundredths = if exp >= 0 {
        // Already an integer; nothing to round.
        return value;
    } else if exp <= -127 {
        0
    } else {
        let shift = exp.unsigned_abs();
        let whole = scaled >> shift;
        let rem = scaled & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        if rem > half || (rem == half && whole % 2 == 1) {
            whole + 1
        } else {
            whole
        }
    };

    (hundredths as f64 / 100.0).copysign(value)
}

/// Divides two extracted financials.
///
/// Returns `None` unless both sides are numeric and non-zero. A zero
/// numerator is treated like a missing one: a listing that reports a $0 price
/// has no meaningful multiple.
pub fn safe_div(numerator: Option<&Financial>, denominator: Option<&Financial>) -> Option<f64> {
    let a = numerator.and_then(Financial::as_numeric)?;
    let b = denominator.and_then(Financial::as_numeric)?;
    if a == 0 || b == 0 {
        return None;
    }

    let ratio = a as f64 / b as f64;
    ratio.is_finite().then_some(ratio)
}

pub fn multiple(price: Option<&Financial>, base: Option<&Financial>) -> Option<f64> {
    safe_div(price, base).map(round2)
}

/// Cash flow as a percentage of gross revenue.
pub fn profit_margin(cash_flow: Option<&Financial>, revenue: Option<&Financial>) -> Option<f64> {
    safe_div(cash_flow, revenue).map(|r| round2(r * 100.0))
}

/// Fills in the derived ratio columns from the already-extracted financials.
pub fn apply_derived_ratios(record: &mut ListingRecord) {
    let price = record.asking_price.as_ref();

    record.price_revenue_multiple = multiple(price, record.gross_revenue.as_ref());
    record.price_cash_flow_multiple = multiple(price, record.cash_flow.as_ref());
    record.price_ebitda_multiple = multiple(price, record.ebitda.as_ref());
    record.profit_margin = profit_margin(record.cash_flow.as_ref(), record.gross_revenue.as_ref());
}
