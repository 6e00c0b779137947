use std::env;

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Path of the JSON key/value file carrying venues and theme across
    /// restarts.
    pub data_file: String,
    /// Seed demo venues, bookings and schedule blocks when the store is
    /// empty.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT must be a number"),
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| "fieldbook-store.json".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true),
        }
    }
}
