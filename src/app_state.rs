use std::sync::Arc;

use crate::database::Storage;

pub struct AppState {
    pub db: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(db: Arc<dyn Storage>) -> Self {
        Self { db }
    }
}
