use crate::core::LocationUseCases;
use std::sync::Arc;

pub struct AppState {
    pub service: Arc<dyn LocationUseCases>,
}
