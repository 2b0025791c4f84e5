use std::sync::Arc;

use crate::config::Config;
use crate::dispatch::Dispatcher;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub dispatcher: Arc<dyn Dispatcher>,
}
