use crate::domain::models::booking::PaymentMethod;
use crate::error::AppError;
use serde::Serialize;

/// Flat service fee added to every booking, in rupiah.
pub const SERVICE_FEE: i64 = 4500;
/// The one promo code honored at checkout: 20% off the base price.
pub const VOUCHER_CODE: &str = "PROMO20";
/// VAT applied to the discounted base.
pub const TAX_PERCENT: i64 = 11;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub base_price: i64,
    pub discount: i64,
    pub service_fee: i64,
    pub tax: i64,
    pub total: i64,
    /// What is due now: half the total for DP bookings, the total otherwise.
    pub pay_amount: i64,
}

pub fn quote(
    price_per_hour: i64,
    duration: u32,
    method: PaymentMethod,
    voucher_code: Option<&str>,
) -> Result<Quote, AppError> {
    let base_price = price_per_hour * duration as i64;

    let discount = match voucher_code {
        Some(code) if code.eq_ignore_ascii_case(VOUCHER_CODE) => base_price / 5,
        Some(_) => return Err(AppError::Validation("Invalid voucher code".into())),
        None => 0,
    };

    let tax = (base_price - discount) * TAX_PERCENT / 100;
    let total = base_price - discount + SERVICE_FEE + tax;
    let pay_amount = match method {
        PaymentMethod::Dp => total / 2,
        PaymentMethod::Full => total,
    };

    Ok(Quote { base_price, discount, service_fee: SERVICE_FEE, tax, total, pay_amount })
}
