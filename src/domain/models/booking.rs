use chrono::{DateTime, NaiveDate, Utc};
use rand::{Rng, distributions::Alphanumeric};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Pending,
    Failed,
}

/// Full payment up front, or a 50% down payment ("dp").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Full,
    Dp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    Va,
    Qris,
    Ewallet,
    Retail,
    Card,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// "BK-" followed by six uppercase alphanumerics.
    pub id: String,
    /// The venue being booked.
    pub field_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub date: NaiveDate,
    /// "HH:MM", venue-local.
    pub time: String,
    /// Whole hours.
    pub duration: u32,
    pub total_price: i64,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_detail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub barcode: String,
}

pub struct NewBookingParams {
    pub field_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    pub total_price: i64,
    pub payment_method: PaymentMethod,
    pub payment_type: Option<PaymentType>,
    pub payment_detail: Option<String>,
}

impl Booking {
    pub fn new(params: NewBookingParams) -> Self {
        let id = generate_booking_id();
        let barcode = format!("{}-PENDING", id);

        Self {
            id,
            field_id: params.field_id,
            user_name: params.user_name,
            user_email: params.user_email,
            user_phone: params.user_phone,
            date: params.date,
            time: params.time,
            duration: params.duration,
            total_price: params.total_price,
            payment_status: PaymentStatus::Pending,
            payment_method: params.payment_method,
            payment_type: params.payment_type,
            payment_detail: params.payment_detail,
            created_at: Utc::now(),
            barcode,
        }
    }

    /// The hour of day this booking starts at, parsed from its "HH:MM" time.
    pub fn start_hour(&self) -> Option<u32> {
        let (hh, _) = self.time.split_once(':')?;
        hh.parse().ok()
    }

    /// Whether an active (non-failed) booking occupies `hour` on its date.
    pub fn occupies(&self, hour: u32) -> bool {
        if self.payment_status == PaymentStatus::Failed {
            return false;
        }
        match self.start_hour() {
            Some(start) => hour >= start && hour < start + self.duration,
            None => false,
        }
    }

    /// Simulated payment success: DP bookings become partially paid, full
    /// payments become paid, and the barcode is stamped verified.
    pub fn mark_paid(&mut self) {
        self.payment_status = match self.payment_method {
            PaymentMethod::Dp => PaymentStatus::Partial,
            PaymentMethod::Full => PaymentStatus::Paid,
        };
        self.barcode = format!("{}-VERIFIED", self.id);
    }

    pub fn mark_failed(&mut self) {
        self.payment_status = PaymentStatus::Failed;
    }
}

pub fn generate_booking_id() -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(|c| (c as char).to_ascii_uppercase())
        .collect();
    format!("BK-{}", suffix)
}
