use std::sync::Arc;

use crate::dispatch::Dispatcher;
use crate::health::HealthMonitor;

/// Shared handler state: the dispatcher plus the health monitor,
/// constructed once at startup.
pub struct AppState<C, L, B, S> {
    pub dispatcher: Arc<Dispatcher<C, L, B, S>>,
    pub monitor: Arc<HealthMonitor<C, B>>,
}

impl<C, L, B, S> AppState<C, L, B, S> {
    pub fn new(dispatcher: Arc<Dispatcher<C, L, B, S>>, monitor: Arc<HealthMonitor<C, B>>) -> Self {
        Self {
            dispatcher,
            monitor,
        }
    }
}

impl<C, L, B, S> Clone for AppState<C, L, B, S> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
            monitor: Arc::clone(&self.monitor),
        }
    }
}
