//! Application state for the timesheet API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::render::Renderer;

/// Shared application state.
///
/// Holds the read-only configuration and the rendering collaborator. The
/// template itself is loaded fresh for every request.
#[derive(Clone)]
pub struct AppState {
    /// The loaded configuration.
    config: Arc<ConfigLoader>,
    /// The rendering collaborator.
    renderer: Arc<dyn Renderer>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            config: Arc::new(config),
            renderer,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a shared handle to the configuration for work that outlives
    /// the request borrow, such as a blocking task.
    pub fn shared_config(&self) -> Arc<ConfigLoader> {
        Arc::clone(&self.config)
    }

    /// Returns the rendering collaborator.
    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }
}
