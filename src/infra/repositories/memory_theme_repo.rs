use crate::domain::{models::theme::ThemeColors, ports::ThemeRepository};
use crate::error::AppError;
use crate::infra::storage::local_store::LocalStore;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct MemoryThemeRepo {
    theme: RwLock<ThemeColors>,
    store: Arc<LocalStore>,
}

impl MemoryThemeRepo {
    pub fn new(initial: ThemeColors, store: Arc<LocalStore>) -> Self {
        Self { theme: RwLock::new(initial), store }
    }
}

#[async_trait]
impl ThemeRepository for MemoryThemeRepo {
    async fn get(&self) -> Result<ThemeColors, AppError> {
        Ok(self.theme.read().await.clone())
    }

    async fn set(&self, theme: &ThemeColors) -> Result<ThemeColors, AppError> {
        let mut current = self.theme.write().await;
        *current = theme.clone();
        self.store.save_theme(&current);
        Ok(current.clone())
    }
}
