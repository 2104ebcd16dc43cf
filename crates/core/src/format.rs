//! Display formatters (US locale).
//!
//! Every function here is pure and deterministic. Inputs that do not fit a
//! formatter's expected shape are returned unchanged rather than rejected.

use crate::types::Timestamp;

/// EPA weighting of city driving in the combined fuel economy figure.
const EPA_CITY_WEIGHT: f64 = 0.55;

/// EPA weighting of highway driving in the combined fuel economy figure.
const EPA_HIGHWAY_WEIGHT: f64 = 0.45;

/// Insert `,` every three digits from the right.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format a count with thousands separators.
///
/// ```
/// use autolot_core::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(-950), "-950");
/// ```
pub fn format_number(value: i64) -> String {
    let grouped = group_thousands(value.unsigned_abs());
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Format whole dollars as currency with no decimals.
///
/// ```
/// use autolot_core::format::format_currency;
/// assert_eq!(format_currency(25000), "$25,000");
/// assert_eq!(format_currency(-1500), "-$1,500");
/// ```
pub fn format_currency(dollars: i64) -> String {
    let grouped = group_thousands(dollars.unsigned_abs());
    if dollars < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format an odometer reading, e.g. `"42,180 mi"`.
pub fn format_mileage(miles: i64) -> String {
    format!("{} mi", format_number(miles))
}

/// Group a US phone number.
///
/// Non-digit characters are ignored when counting. Ten digits become
/// `(234) 567-8900`; eleven digits with a leading `1` gain a `+1` prefix.
/// Anything else is returned as given.
///
/// ```
/// use autolot_core::format::format_phone_number;
/// assert_eq!(format_phone_number("2345678900"), "(234) 567-8900");
/// assert_eq!(format_phone_number("12345678900"), "+1 (234) 567-8900");
/// assert_eq!(format_phone_number("123"), "123");
/// ```
pub fn format_phone_number(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..]),
        11 if digits.starts_with('1') => {
            format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
        }
        _ => input.to_string(),
    }
}

/// Split a 17-character VIN into its WMI, VDS, check digit, and VIS groups.
///
/// Any other length is returned unchanged.
///
/// ```
/// use autolot_core::format::format_vin;
/// assert_eq!(format_vin("1HGCM82633A004352"), "1HG CM826 3 3A004352");
/// assert_eq!(format_vin("SHORT"), "SHORT");
/// ```
pub fn format_vin(vin: &str) -> String {
    if vin.len() != 17 || !vin.is_ascii() {
        return vin.to_string();
    }
    format!("{} {} {} {}", &vin[..3], &vin[3..8], &vin[8..9], &vin[9..])
}

/// Format a value already expressed in percent units, e.g. an APR of `6.9`.
///
/// ```
/// use autolot_core::format::format_percentage;
/// assert_eq!(format_percentage(6.9, 2), "6.90%");
/// assert_eq!(format_percentage(12.345, 0), "12%");
/// ```
pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{value:.decimals$}%")
}

/// Combined fuel economy using the EPA harmonic mean:
/// `round(1 / (0.55 / city + 0.45 / highway))`.
///
/// Returns `None` when either input is zero.
pub fn combined_mpg(city: u32, highway: u32) -> Option<u32> {
    if city == 0 || highway == 0 {
        return None;
    }
    let combined =
        1.0 / (EPA_CITY_WEIGHT / f64::from(city) + EPA_HIGHWAY_WEIGHT / f64::from(highway));
    Some(combined.round() as u32)
}

/// Format city/highway/combined fuel economy for display.
///
/// ```
/// use autolot_core::format::format_combined_fuel_economy;
/// assert_eq!(
///     format_combined_fuel_economy(20, 30),
///     "20 City / 30 Hwy / 24 Combined MPG"
/// );
/// ```
pub fn format_combined_fuel_economy(city: u32, highway: u32) -> String {
    match combined_mpg(city, highway) {
        Some(combined) => format!("{city} City / {highway} Hwy / {combined} Combined MPG"),
        None => "N/A".to_string(),
    }
}

/// Long-form date, e.g. `"October 18, 2026"`.
pub fn format_date(ts: &Timestamp) -> String {
    ts.format("%B %-d, %Y").to_string()
}
