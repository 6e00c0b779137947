use crate::domain::{
    models::schedule::{OperatingHours, ScheduleBlock},
    ports::ScheduleStore,
};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

struct ScheduleState {
    blocks: Vec<ScheduleBlock>,
    hours: OperatingHours,
}

/// The single in-memory schedule: one block collection, one global
/// operating-hours window. Nothing here is persisted; the schedule resets
/// on restart.
pub struct MemoryScheduleStore {
    state: RwLock<ScheduleState>,
}

impl MemoryScheduleStore {
    pub fn new(blocks: Vec<ScheduleBlock>, hours: OperatingHours) -> Self {
        Self { state: RwLock::new(ScheduleState { blocks, hours }) }
    }
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn list_blocks(&self) -> Result<Vec<ScheduleBlock>, AppError> {
        Ok(self.state.read().await.blocks.clone())
    }

    async fn find_block(&self, id: &str) -> Result<Option<ScheduleBlock>, AppError> {
        let state = self.state.read().await;
        Ok(state.blocks.iter().find(|b| b.id == id).cloned())
    }

    async fn insert_block(&self, block: &ScheduleBlock) -> Result<ScheduleBlock, AppError> {
        let mut state = self.state.write().await;
        state.blocks.push(block.clone());
        Ok(block.clone())
    }

    async fn replace_block(&self, block: &ScheduleBlock) -> Result<ScheduleBlock, AppError> {
        let mut state = self.state.write().await;
        let Some(slot) = state.blocks.iter_mut().find(|b| b.id == block.id) else {
            return Err(AppError::NotFound("Schedule block not found".into()));
        };
        *slot = block.clone();
        Ok(block.clone())
    }

    async fn delete_block(&self, id: &str) -> Result<(), AppError> {
        let mut state = self.state.write().await;
        let before = state.blocks.len();
        state.blocks.retain(|b| b.id != id);
        if state.blocks.len() == before {
            return Err(AppError::NotFound("Schedule block not found".into()));
        }
        Ok(())
    }

    async fn operating_hours(&self) -> Result<OperatingHours, AppError> {
        Ok(self.state.read().await.hours)
    }

    async fn set_operating_hours(&self, hours: &OperatingHours) -> Result<OperatingHours, AppError> {
        let mut state = self.state.write().await;
        state.hours = *hours;
        Ok(state.hours)
    }
}
