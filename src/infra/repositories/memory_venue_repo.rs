use crate::domain::{models::venue::Venue, ports::VenueRepository};
use crate::error::AppError;
use crate::infra::storage::local_store::LocalStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MemoryVenueRepo {
    venues: RwLock<Vec<Venue>>,
    store: Arc<LocalStore>,
}

impl MemoryVenueRepo {
    pub fn new(initial: Vec<Venue>, store: Arc<LocalStore>) -> Self {
        Self { venues: RwLock::new(initial), store }
    }
}

#[async_trait]
impl VenueRepository for MemoryVenueRepo {
    async fn create(&self, venue: &Venue) -> Result<Venue, AppError> {
        let mut venues = self.venues.write().await;
        venues.push(venue.clone());
        self.store.save_venues(&venues);
        Ok(venue.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Venue>, AppError> {
        let venues = self.venues.read().await;
        Ok(venues.iter().find(|v| v.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Venue>, AppError> {
        Ok(self.venues.read().await.clone())
    }

    async fn update(&self, venue: &Venue) -> Result<Venue, AppError> {
        let mut venues = self.venues.write().await;
        let Some(slot) = venues.iter_mut().find(|v| v.id == venue.id) else {
            return Err(AppError::NotFound("Venue not found".into()));
        };
        *slot = venue.clone();
        self.store.save_venues(&venues);
        Ok(venue.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut venues = self.venues.write().await;
        let before = venues.len();
        venues.retain(|v| v.id != id);
        if venues.len() == before {
            return Err(AppError::NotFound("Venue not found".into()));
        }
        self.store.save_venues(&venues);
        Ok(())
    }
}
