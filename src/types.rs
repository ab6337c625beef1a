//! Core types for album-service

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Album id type
pub type AlbumId = String;

/// A single music release in the catalogue.
///
/// Missing fields decode as empty strings or a zero price. Only values of the
/// wrong JSON type are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: impl Into<AlbumId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Decode a request body, whatever content type it was sent with
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::invalid_request("request body is empty"));
        }
        Ok(serde_json::from_slice(body)?)
    }
}

/// Body used for every non-album answer, e.g. `{"message":"album not found"}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The records the catalogue starts with.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new("1", "Blue Trail", "John Coltrane", 56.99),
        Album::new("2", "Jeru", "Gerry Mulligan", 17.99),
        Album::new(
            "3",
            "Sarah Vaughan and Clifford Brown",
            "Sarah Vaughan",
            39.99,
        ),
    ]
}
