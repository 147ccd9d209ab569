use crate::models::CompletionSet;
use crate::schedule::Schedule;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub schedule: Schedule,
    pub checked: Arc<Mutex<CompletionSet>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, schedule: Schedule, checked: CompletionSet) -> Self {
        Self {
            data_path,
            schedule,
            checked: Arc::new(Mutex::new(checked)),
        }
    }
}
