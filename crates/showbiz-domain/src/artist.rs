//! Performers known to the agency.

use chrono::NaiveDate;

use crate::{common::*, error::ValidationError};

/// A performer. Two artists are the same artist when their names match, ignoring case.
#[derive(Debug, Clone)]
pub struct Artist {
    name: String,
    genre: String,
    debut_date: NaiveDate,
}

impl Artist {
    pub fn new(
        name: impl Into<String>,
        genre: impl Into<String>,
        debut_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        require_text(&name, ValidationError::InvalidArtist)?;
        Ok(Self {
            name,
            genre: genre.into(),
            debut_date,
        })
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn debut_date(&self) -> NaiveDate {
        self.debut_date
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.genre = genre.into();
    }

    pub fn set_debut_date(&mut self, debut_date: NaiveDate) {
        self.debut_date = debut_date;
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(name.trim())
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.has_name(&other.name)
    }
}

impl Eq for Artist {}

impl NamedEntity for Artist {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Artist {
    fn display_label(&self) -> String {
        format!("{} ({}, debut {})", self.name, self.genre, self.debut_date)
    }
}
