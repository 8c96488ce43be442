use thiserror::Error;

/// Field-level rule violations raised while constructing or mutating entities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("record kind is required")]
    InvalidKind,
    #[error("amount must be greater than 0")]
    InvalidAmount,
    #[error("description cannot be empty")]
    InvalidDescription,
    #[error("date cannot be in the future")]
    InvalidDate,
    #[error("category is required")]
    InvalidCategory,
    #[error("category {category} does not belong to {kind} records")]
    CategoryKindMismatch { kind: String, category: String },
    #[error("{0} cannot be empty")]
    InvalidName(&'static str),
    #[error("location cannot be empty")]
    InvalidLocation,
    #[error("contract terms cannot be empty")]
    InvalidTerms,
    #[error("contract start date cannot be after end date")]
    InvalidContractPeriod,
    #[error("invalid ticket count: {0}")]
    InvalidTicketCount(String),
    #[error("ticket price cannot be less than zero")]
    InvalidTicketPrice,
    #[error("artist name cannot be empty")]
    InvalidArtist,
}

/// Raised when a date range is built with inverted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("start date cannot be after end date")]
    InvalidRange,
}

/// Raised when a textual tag does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown record kind `{0}`")]
    UnknownKind(String),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown participant status `{0}`")]
    UnknownStatus(String),
    #[error("unknown event type `{0}`")]
    UnknownEventType(String),
}

/// Failures specific to event ticketing and rosters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("not enough tickets: requested {requested}, only {available} available")]
    InsufficientTickets { requested: u32, available: u32 },
    #[error("artist `{0}` is already added to the event")]
    DuplicateArtist(String),
    #[error("artist `{0}` not found in the event")]
    ArtistNotFound(String),
}
