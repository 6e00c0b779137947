use crate::domain::models::booking::{
    Booking, PaymentMethod, PaymentStatus, PaymentType,
};
use crate::domain::models::schedule::{BlockStatus, ScheduleBlock};
use crate::domain::models::venue::Venue;
use chrono::{NaiveDate, TimeZone, Utc};

/// The three demo venues seeded on first boot.
pub fn demo_venues() -> Vec<Venue> {
    vec![
        Venue {
            id: "field-1".to_string(),
            name: "Lapangan Futsal A".to_string(),
            location: "Main Building, Floor 1".to_string(),
            description: "International-standard futsal court with high-grade synthetic turf, LED lighting and air conditioning.".to_string(),
            price_per_hour: 150_000,
            image: "/field-1.jpg".to_string(),
            facilities: vec![
                "AC".to_string(),
                "LED Lighting".to_string(),
                "Locker Room".to_string(),
                "Shower".to_string(),
                "Parking".to_string(),
            ],
            images: Vec::new(),
            total_courts: 3,
            about_venue: None,
            rules: vec!["No metal studs".to_string(), "Max 10 players per court".to_string()],
            rating: Some(4.8),
            created_at: Utc::now(),
        },
        Venue {
            id: "field-2".to_string(),
            name: "Lapangan Futsal B".to_string(),
            description: "Indoor court with premium vinyl flooring. Suited to training sessions and casual matches.".to_string(),
            location: "Main Building, Floor 2".to_string(),
            price_per_hour: 120_000,
            image: "/field-2.jpg".to_string(),
            facilities: vec!["AC".to_string(), "LED Lighting".to_string(), "Parking".to_string()],
            images: Vec::new(),
            total_courts: 2,
            about_venue: None,
            rules: Vec::new(),
            rating: Some(4.5),
            created_at: Utc::now(),
        },
        Venue {
            id: "field-3".to_string(),
            name: "Lapangan Basket Outdoor".to_string(),
            description: "Outdoor basketball court with regulation rims and a spacious playing area.".to_string(),
            location: "Outdoor Area".to_string(),
            price_per_hour: 100_000,
            image: "/field-3.jpg".to_string(),
            facilities: vec!["Lighting".to_string(), "Bench".to_string(), "Parking".to_string()],
            images: Vec::new(),
            total_courts: 1,
            about_venue: None,
            rules: Vec::new(),
            rating: Some(4.2),
            created_at: Utc::now(),
        },
    ]
}

/// Read-only booking seed. BK-001 is mirrored in the schedule as a booked
/// block.
pub fn demo_bookings() -> Vec<Booking> {
    let date_23 = NaiveDate::from_ymd_opt(2025, 12, 23).unwrap();
    let date_24 = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();

    vec![
        Booking {
            id: "BK-001".to_string(),
            field_id: "field-1".to_string(),
            user_name: "Budi Santoso".to_string(),
            user_email: "budi@email.com".to_string(),
            user_phone: "081234567890".to_string(),
            date: date_23,
            time: "10:00".to_string(),
            duration: 2,
            total_price: 300_000,
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Full,
            payment_type: Some(PaymentType::Va),
            payment_detail: Some("BCA".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 12, 22, 8, 0, 0).unwrap(),
            barcode: "BK-001-VERIFIED".to_string(),
        },
        Booking {
            id: "BK-002".to_string(),
            field_id: "field-1".to_string(),
            user_name: "Ani Wijaya".to_string(),
            user_email: "ani@email.com".to_string(),
            user_phone: "082345678901".to_string(),
            date: date_23,
            time: "14:00".to_string(),
            duration: 1,
            total_price: 150_000,
            payment_status: PaymentStatus::Partial,
            payment_method: PaymentMethod::Dp,
            payment_type: Some(PaymentType::Qris),
            payment_detail: Some("QRIS (All Payment)".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 12, 22, 9, 30, 0).unwrap(),
            barcode: "BK-002-PENDING".to_string(),
        },
        Booking {
            id: "BK-003".to_string(),
            field_id: "field-2".to_string(),
            user_name: "Cahyo Pratama".to_string(),
            user_email: "cahyo@email.com".to_string(),
            user_phone: "083456789012".to_string(),
            date: date_24,
            time: "16:00".to_string(),
            duration: 2,
            total_price: 240_000,
            payment_status: PaymentStatus::Paid,
            payment_method: PaymentMethod::Full,
            payment_type: Some(PaymentType::Ewallet),
            payment_detail: Some("GoPay".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 12, 22, 10, 15, 0).unwrap(),
            barcode: "BK-003-VERIFIED".to_string(),
        },
        Booking {
            id: "BK-004".to_string(),
            field_id: "field-3".to_string(),
            user_name: "Dewi Lestari".to_string(),
            user_email: "dewi@email.com".to_string(),
            user_phone: "084567890123".to_string(),
            date: date_24,
            time: "08:00".to_string(),
            duration: 2,
            total_price: 200_000,
            payment_status: PaymentStatus::Pending,
            payment_method: PaymentMethod::Full,
            payment_type: Some(PaymentType::Retail),
            payment_detail: Some("Alfamart".to_string()),
            created_at: Utc.with_ymd_and_hms(2025, 12, 22, 11, 0, 0).unwrap(),
            barcode: "BK-004-PENDING".to_string(),
        },
    ]
}

/// Starting schedule: one customer booking span and one maintenance hour.
pub fn demo_blocks() -> Vec<ScheduleBlock> {
    vec![
        ScheduleBlock {
            id: "b1".to_string(),
            field_id: "court-1".to_string(),
            title: "Booked".to_string(),
            start_hour: 10,
            duration: 2.0,
            status: BlockStatus::Booked,
            notes: None,
            booking_id: Some("BK-001".to_string()),
        },
        ScheduleBlock {
            id: "b2".to_string(),
            field_id: "court-2".to_string(),
            title: "Repairs".to_string(),
            start_hour: 14,
            duration: 1.0,
            status: BlockStatus::Maintenance,
            notes: None,
            booking_id: None,
        },
    ]
}
