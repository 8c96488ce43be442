use std::collections::HashMap;

use showbiz_domain::{Casting, Identifiable, NamedEntity, Participant, ParticipantStatus};
use uuid::Uuid;

use crate::CoreError;

/// Keeps registered castings and the participant pool.
#[derive(Debug, Default)]
pub struct CastingManager {
    castings: HashMap<Uuid, Casting>,
    participants: HashMap<Uuid, Participant>,
}

impl CastingManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_casting(&mut self, casting: Casting) -> Result<Uuid, CoreError> {
        let id = casting.id();
        if self.castings.contains_key(&id) {
            return Err(CoreError::Duplicate { kind: "casting", id });
        }
        tracing::info!(%id, name = casting.name(), "casting registered");
        self.castings.insert(id, casting);
        Ok(id)
    }

    pub fn find_casting(&self, id: Uuid) -> Result<&Casting, CoreError> {
        self.castings
            .get(&id)
            .ok_or(CoreError::NotFound { kind: "casting", id })
    }

    /// Castings ordered by date, then name.
    pub fn castings(&self) -> Vec<&Casting> {
        let mut castings: Vec<_> = self.castings.values().collect();
        castings.sort_by(|a, b| a.date().cmp(&b.date()).then_with(|| a.name().cmp(b.name())));
        castings
    }

    pub fn register_participant(&mut self, participant: Participant) -> Result<Uuid, CoreError> {
        let id = participant.id();
        if self.participants.contains_key(&id) {
            return Err(CoreError::Duplicate {
                kind: "participant",
                id,
            });
        }
        tracing::info!(%id, name = participant.name(), "participant registered");
        self.participants.insert(id, participant);
        Ok(id)
    }

    pub fn participant(&self, id: Uuid) -> Result<&Participant, CoreError> {
        self.participants.get(&id).ok_or(CoreError::NotFound {
            kind: "participant",
            id,
        })
    }

    pub fn update_participant_status(
        &mut self,
        id: Uuid,
        status: ParticipantStatus,
    ) -> Result<(), CoreError> {
        let participant = self.participants.get_mut(&id).ok_or_else(|| {
            tracing::warn!(%id, "status update for unregistered participant");
            CoreError::NotFound {
                kind: "participant",
                id,
            }
        })?;
        participant.status = status;
        tracing::info!(%id, %status, "participant status updated");
        Ok(())
    }

    /// Participants ordered by name.
    pub fn participants(&self) -> Vec<&Participant> {
        let mut participants: Vec<_> = self.participants.values().collect();
        participants.sort_by(|a, b| a.name().cmp(b.name()));
        participants
    }

    pub fn participants_with_status(&self, status: ParticipantStatus) -> Vec<&Participant> {
        self.participants()
            .into_iter()
            .filter(|participant| participant.status == status)
            .collect()
    }
}
