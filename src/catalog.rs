use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::song::{NewSong, Song, seed_songs};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no song with id {0}")]
    NotFound(u64),
}

#[derive(Debug)]
struct CatalogState {
    songs: Vec<Song>,
    next_id: u64,
}

/// In-memory song catalog shared by every request handler.
///
/// Ids come from a counter that only ever grows, so a deleted id is never
/// handed out again.
#[derive(Clone, Debug)]
pub struct Catalog {
    state: Arc<RwLock<CatalogState>>,
}

impl Catalog {
    pub fn new(songs: Vec<Song>) -> Self {
        let next_id = songs.iter().map(|s| s.id + 1).max().unwrap_or(0);
        Self {
            state: Arc::new(RwLock::new(CatalogState { songs, next_id })),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_songs())
    }

    pub async fn list(&self) -> Vec<Song> {
        self.state.read().await.songs.clone()
    }

    pub async fn get(&self, id: u64) -> Result<Song, CatalogError> {
        let state = self.state.read().await;
        state.songs.iter().find(|s| s.id == id).cloned().ok_or_else(|| {
            debug!("lookup missed for song id {}", id);
            CatalogError::NotFound(id)
        })
    }

    /// Appends a song under the next id and returns the whole catalog.
    pub async fn create(&self, draft: NewSong) -> Vec<Song> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;
        state.songs.push(Song {
            title: draft.title,
            id,
        });
        info!("created song id={} (catalog size {})", id, state.songs.len());
        state.songs.clone()
    }

    /// Removes the first song with `id` and returns the whole catalog.
    pub async fn delete(&self, id: u64) -> Result<Vec<Song>, CatalogError> {
        let mut state = self.state.write().await;
        let index = match state.songs.iter().position(|s| s.id == id) {
            Some(i) => i,
            None => {
                debug!("delete missed for song id {}", id);
                return Err(CatalogError::NotFound(id));
            }
        };
        state.songs.remove(index);
        info!("deleted song id={} (catalog size {})", id, state.songs.len());
        Ok(state.songs.clone())
    }
}
