//! In-memory album store
//!
//! Albums are kept in a single ordered sequence. Lookups scan it front to
//! back so that, when ids collide, the earliest inserted album wins.

use tokio::sync::RwLock;

use crate::types::{seed_albums, Album};

/// Ordered, lock-guarded collection of albums shared by every request
#[derive(Debug, Default)]
pub struct AlbumStore {
    /// Insertion-ordered albums (protected by RwLock for concurrent access)
    albums: RwLock<Vec<Album>>,
}

impl AlbumStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the startup catalogue
    pub fn seeded() -> Self {
        Self::from_albums(seed_albums())
    }

    /// Create a store holding `albums` in the given order
    pub fn from_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Snapshot of every album in insertion order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// First album whose id equals `id` exactly
    pub async fn get(&self, id: &str) -> Option<Album> {
        let albums = self.albums.read().await;
        albums.iter().find(|album| album.id == id).cloned()
    }

    /// Append an album to the end of the sequence
    ///
    /// Ids are not checked for uniqueness.
    pub async fn insert(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        album
    }

    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }
}
