use crate::domain::models::booking::{PaymentMethod, PaymentType};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVenueRequest {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_hour: i64,
    pub image: String,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default = "default_total_courts")]
    pub total_courts: u32,
    #[serde(default)]
    pub about_venue: Option<String>,
    #[serde(default)]
    pub rules: Vec<String>,
}

fn default_total_courts() -> u32 {
    1
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVenueRequest {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub price_per_hour: Option<i64>,
    pub image: Option<String>,
    pub facilities: Option<Vec<String>>,
    pub total_courts: Option<u32>,
    pub about_venue: Option<String>,
    pub rules: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    /// "YYYY-MM-DD"
    pub date: String,
    /// "HH:MM"
    pub time: String,
    pub duration: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default = "default_payment_method")]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub payment_type: Option<PaymentType>,
    #[serde(default)]
    pub payment_detail: Option<String>,
    #[serde(default)]
    pub voucher_code: Option<String>,
}

fn default_payment_method() -> PaymentMethod {
    PaymentMethod::Full
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentOutcome {
    Success,
    Failure,
}

/// The caller picks the outcome; there is no real payment processing.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulatePaymentRequest {
    pub outcome: PaymentOutcome,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateThemeRequest {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub accent: Option<String>,
    pub background: Option<String>,
    pub text_primary: Option<String>,
    pub text_secondary: Option<String>,
}
