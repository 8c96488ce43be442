use showbiz_domain::{Artist, NamedEntity};

use crate::CoreError;

/// Registry of artists keyed by name, case-insensitively.
#[derive(Debug, Default)]
pub struct ArtistManager {
    artists: Vec<Artist>,
}

impl ArtistManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_artist(&mut self, artist: Artist) -> Result<(), CoreError> {
        if self.artists.contains(&artist) {
            tracing::warn!(name = artist.name(), "artist already registered");
            return Err(CoreError::DuplicateName {
                kind: "artist",
                name: artist.name().to_string(),
            });
        }
        tracing::info!(name = artist.name(), genre = artist.genre(), "artist added");
        self.artists.push(artist);
        Ok(())
    }

    pub fn artist(&self, name: &str) -> Result<&Artist, CoreError> {
        self.artists
            .iter()
            .find(|artist| artist.has_name(name))
            .ok_or_else(|| not_found(name))
    }

    pub fn artist_mut(&mut self, name: &str) -> Result<&mut Artist, CoreError> {
        self.artists
            .iter_mut()
            .find(|artist| artist.has_name(name))
            .ok_or_else(|| not_found(name))
    }

    pub fn remove_artist(&mut self, name: &str) -> Result<Artist, CoreError> {
        let idx = self
            .artists
            .iter()
            .position(|artist| artist.has_name(name))
            .ok_or_else(|| {
                tracing::warn!(name, "artist not found");
                not_found(name)
            })?;
        let artist = self.artists.remove(idx);
        tracing::info!(name = artist.name(), "artist removed");
        Ok(artist)
    }

    /// Artists ordered by name.
    pub fn artists(&self) -> Vec<&Artist> {
        let mut artists: Vec<_> = self.artists.iter().collect();
        artists.sort_by_key(|artist| artist.name().to_lowercase());
        artists
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }
}

fn not_found(name: &str) -> CoreError {
    CoreError::NameNotFound {
        kind: "artist",
        name: name.trim().to_string(),
    }
}
