//! Domain types for castings and the people auditioning in them.

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    common::*,
    error::{ParseError, ValidationError},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
/// Progress of a participant through a casting.
pub enum ParticipantStatus {
    #[default]
    New,
    Invited,
    Auditioned,
    Approved,
    Rejected,
}

impl ParticipantStatus {
    pub const ALL: [ParticipantStatus; 5] = [
        ParticipantStatus::New,
        ParticipantStatus::Invited,
        ParticipantStatus::Auditioned,
        ParticipantStatus::Approved,
        ParticipantStatus::Rejected,
    ];
}

impl fmt::Display for ParticipantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ParticipantStatus::New => "NEW",
            ParticipantStatus::Invited => "INVITED",
            ParticipantStatus::Auditioned => "AUDITIONED",
            ParticipantStatus::Approved => "APPROVED",
            ParticipantStatus::Rejected => "REJECTED",
        };
        f.write_str(label)
    }
}

impl FromStr for ParticipantStatus {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|status| status.to_string() == normalized)
            .ok_or_else(|| ParseError::UnknownStatus(value.trim().to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    id: Uuid,
    name: String,
    pub status: ParticipantStatus,
}

impl Participant {
    pub fn new(name: impl Into<String>, status: ParticipantStatus) -> Result<Self, ValidationError> {
        let name = name.into();
        require_text(&name, ValidationError::InvalidName("participant name"))?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            status,
        })
    }
}

impl Identifiable for Participant {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Participant {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Participant {
    fn display_label(&self) -> String {
        format!("{} [{}]", self.name, self.status)
    }
}

/// A scheduled audition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Casting {
    id: Uuid,
    name: String,
    description: String,
    location: String,
    date: NaiveDate,
}

impl Casting {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let (name, description, location) = (name.into(), description.into(), location.into());
        require_text(&name, ValidationError::InvalidName("casting name"))?;
        require_text(&description, ValidationError::InvalidDescription)?;
        require_text(&location, ValidationError::InvalidLocation)?;
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            description,
            location,
            date,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Identifiable for Casting {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Casting {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Casting {
    fn display_label(&self) -> String {
        format!("{} @ {} on {}", self.name, self.location, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participant_requires_a_name() {
        let participant = Participant::new("Anton", ParticipantStatus::New).unwrap();
        assert_eq!(participant.name(), "Anton");
        assert_eq!(participant.status, ParticipantStatus::New);

        assert_eq!(
            Participant::new("  ", ParticipantStatus::New),
            Err(ValidationError::InvalidName("participant name"))
        );
    }

    #[test]
    fn casting_validates_each_text_field() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        assert!(Casting::new("Spring", "Lead roles", "Berlin", date).is_ok());
        assert_eq!(
            Casting::new("", "Lead roles", "Berlin", date),
            Err(ValidationError::InvalidName("casting name"))
        );
        assert_eq!(
            Casting::new("Spring", "", "Berlin", date),
            Err(ValidationError::InvalidDescription)
        );
        assert_eq!(
            Casting::new("Spring", "Lead roles", " ", date),
            Err(ValidationError::InvalidLocation)
        );
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("approved".parse(), Ok(ParticipantStatus::Approved));
        assert!("maybe".parse::<ParticipantStatus>().is_err());
    }
}
