use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_hour: i64,
    pub image: String,
    pub facilities: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_total_courts")]
    pub total_courts: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_venue: Option<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub created_at: DateTime<Utc>,
}

fn default_total_courts() -> u32 {
    1
}

pub struct NewVenueParams {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price_per_hour: i64,
    pub image: String,
    pub facilities: Vec<String>,
    pub total_courts: u32,
    pub about_venue: Option<String>,
    pub rules: Vec<String>,
}

impl Venue {
    pub fn new(params: NewVenueParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: params.name,
            location: params.location,
            description: params.description,
            price_per_hour: params.price_per_hour,
            image: params.image,
            facilities: params.facilities,
            images: Vec::new(),
            total_courts: params.total_courts,
            about_venue: params.about_venue,
            rules: params.rules,
            rating: None,
            created_at: Utc::now(),
        }
    }
}
