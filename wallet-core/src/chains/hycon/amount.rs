// wallet-core/src/chains/hycon/amount.rs
//
// Fixed-point HYC amounts: 1 HYC = 10^9 units.

use crate::error::{WalletError, WalletResult};

/// Fractional digits of one HYC.
pub const HYC_DECIMALS: u32 = 9;
/// Units per HYC.
pub const UNITS_PER_HYC: u64 = 1_000_000_000;

/// Parse a decimal HYC string into units.
///
/// - `None` and `""` are 0.
/// - A trailing `.` reads as `.0`.
/// - More than 9 fractional digits: the fraction is scaled by zero and
///   contributes nothing (digits are still checked).
pub fn parse_amount(value: Option<&str>) -> WalletResult<u64> {
    let value = match value {
        None | Some("") => return Ok(0),
        Some(v) => v,
    };

    let (integer, fraction) = match value.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (value, None),
    };

    let units = parse_digits(integer, value)?
        .checked_mul(UNITS_PER_HYC)
        .ok_or_else(|| overflow(value))?;

    let fraction = match fraction {
        None | Some("") => return Ok(units),
        Some(f) => f,
    };

    let scale = HYC_DECIMALS
        .checked_sub(fraction.len() as u32)
        .map(|exp| 10u64.pow(exp))
        .unwrap_or(0);

    let frac_units = parse_digits(fraction, value)?
        .checked_mul(scale)
        .ok_or_else(|| overflow(value))?;

    units.checked_add(frac_units).ok_or_else(|| overflow(value))
}

/// `parse_amount` for a present string.
#[inline]
pub fn amount_from_string(value: &str) -> WalletResult<u64> {
    parse_amount(Some(value))
}

/// Canonical string: at most 9 fractional digits, no trailing zeros, no `.0`.
pub fn format_amount(amount: u64) -> String {
    let units = amount / UNITS_PER_HYC;
    let frac = amount % UNITS_PER_HYC;
    if frac == 0 {
        return units.to_string();
    }

    let digits = format!("{:0width$}", frac, width = HYC_DECIMALS as usize);
    format!("{}.{}", units, digits.trim_end_matches('0'))
}

fn parse_digits(digits: &str, whole: &str) -> WalletResult<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WalletError::InvalidAmount(format!(
            "'{}' is not a decimal HYC amount",
            whole
        )));
    }
    digits.parse::<u64>().map_err(|_| overflow(whole))
}

fn overflow(whole: &str) -> WalletError {
    WalletError::InvalidAmount(format!("'{}' does not fit in 64 bits", whole))
}
