use crate::domain::models::{theme::ThemeColors, venue::Venue};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// Best-effort JSON key/value file carrying venues and theme across
/// restarts. Load failures fall back to defaults; write failures are
/// logged and dropped. The schedule block collection is intentionally
/// never written here.
pub struct LocalStore {
    path: PathBuf,
    // Serializes read-modify-write cycles between the venue and theme
    // mirrors, which share the file.
    lock: Mutex<()>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    venues: Option<Vec<Venue>>,
    #[serde(default)]
    theme: Option<ThemeColors>,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    pub fn load(&self) -> (Option<Vec<Venue>>, Option<ThemeColors>) {
        let _guard = self.lock.lock().unwrap();
        let file = self.read_file();
        (file.venues, file.theme)
    }

    pub fn save_venues(&self, venues: &[Venue]) {
        let _guard = self.lock.lock().unwrap();
        let mut file = self.read_file();
        file.venues = Some(venues.to_vec());
        self.write_file(&file);
    }

    pub fn save_theme(&self, theme: &ThemeColors) {
        let _guard = self.lock.lock().unwrap();
        let mut file = self.read_file();
        file.theme = Some(theme.clone());
        self.write_file(&file);
    }

    fn read_file(&self) -> StoreFile {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Failed to parse local store {}: {}", self.path.display(), e);
                StoreFile::default()
            }),
            Err(_) => StoreFile::default(),
        }
    }

    fn write_file(&self, file: &StoreFile) {
        let raw = match serde_json::to_string_pretty(file) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to serialize local store: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::write(&self.path, raw) {
            warn!("Failed to write local store {}: {}", self.path.display(), e);
        }
    }
}
