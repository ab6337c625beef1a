//! album-service - a small HTTP JSON API over an in-memory album catalogue
//!
//! The service keeps an ordered collection of albums in memory and exposes:
//! - `GET /albums` to list every album in insertion order
//! - `GET /albums/:id` to fetch the first album with a matching id
//! - `POST /albums` to append a new album
//! - `GET /health` for a liveness probe

pub mod api;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
