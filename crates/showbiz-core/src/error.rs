use std::path::PathBuf;

use showbiz_domain::{EventError, RangeError, ValidationError};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidRange(#[from] RangeError),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecordLine { line: usize, reason: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: Uuid },
    #[error("{kind} already registered: {id}")]
    Duplicate { kind: &'static str, id: Uuid },
    #[error("{kind} not found: {name}")]
    NameNotFound { kind: &'static str, name: String },
    #[error("{kind} already registered: {name}")]
    DuplicateName { kind: &'static str, name: String },
}
