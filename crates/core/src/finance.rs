//! Monthly payment estimates for the financing page.

use serde::Serialize;

use crate::error::CoreError;

/// Standard amortised monthly payment `P·r / (1 − (1+r)^−n)` with
/// `r = APR / 12`. A zero APR splits the principal evenly.
pub fn monthly_payment(principal: f64, apr_percent: f64, term_months: u32) -> f64 {
    if term_months == 0 || principal <= 0.0 {
        return 0.0;
    }
    let n = f64::from(term_months);
    let r = apr_percent / 100.0 / 12.0;
    if r == 0.0 {
        return principal / n;
    }
    principal * r / (1.0 - (1.0 + r).powf(-n))
}

/// Result of [`estimate_loan`], in whole dollars except the APR.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanEstimate {
    pub price: i64,
    pub down_payment: i64,
    pub amount_financed: i64,
    pub apr_percent: f64,
    pub term_months: u32,
    pub monthly_payment: i64,
    pub total_interest: i64,
}

/// Estimate a loan for a vehicle price.
///
/// Rejects negative inputs and a down payment larger than the price.
pub fn estimate_loan(
    price: i64,
    down_payment: i64,
    apr_percent: f64,
    term_months: u32,
) -> Result<LoanEstimate, CoreError> {
    if price < 0 || down_payment < 0 {
        return Err(CoreError::Validation(
            "Price and down payment must not be negative".into(),
        ));
    }
    if down_payment > price {
        return Err(CoreError::Validation(
            "Down payment cannot exceed the vehicle price".into(),
        ));
    }
    if !apr_percent.is_finite() || apr_percent < 0.0 {
        return Err(CoreError::Validation("APR must be zero or greater".into()));
    }
    if term_months == 0 {
        return Err(CoreError::Validation("Loan term must be at least one month".into()));
    }

    let financed = price - down_payment;
    let monthly = monthly_payment(financed as f64, apr_percent, term_months);
    let total_paid = monthly * f64::from(term_months);

    Ok(LoanEstimate {
        price,
        down_payment,
        amount_financed: financed,
        apr_percent,
        term_months,
        monthly_payment: monthly.round() as i64,
        total_interest: (total_paid - financed as f64).round().max(0.0) as i64,
    })
}
