pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod schedule;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use schedule::resolve_schedule;
pub use state::AppState;
pub use storage::{load_checked, resolve_data_path};
