//! API server state

use axum::http::StatusCode;
use serde::Serialize;
use std::sync::Arc;

use crate::api::IndentedJson;
use crate::config::ServerConfig;
use crate::store::AlbumStore;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Album catalogue shared by every handler
    pub store: Arc<AlbumStore>,

    /// Whether response bodies are indented
    pub indented_json: bool,
}

impl AppState {
    /// Create state with indented responses
    pub fn new(store: Arc<AlbumStore>) -> Self {
        Self {
            store,
            indented_json: true,
        }
    }

    /// Create state honouring the server section of the configuration
    pub fn from_config(store: Arc<AlbumStore>, server: &ServerConfig) -> Self {
        Self {
            store,
            indented_json: server.indented_json,
        }
    }

    /// Wrap `value` in a JSON body using this server's formatting
    pub fn json<T: Serialize>(&self, status: StatusCode, value: T) -> IndentedJson<T> {
        IndentedJson::new(status, value).indented(self.indented_json)
    }
}
