//! Domain error model.

use thiserror::Error;

use crate::id::ParticipantId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a deterministic, synchronous contract violation raised at
/// the call site. There is no I/O anywhere in the core, so nothing is retried
/// and nothing is logged here; callers at the presentation boundary surface a
/// user-facing message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A negative income reached rate calculation.
    #[error("invalid income: {0}")]
    InvalidIncome(String),

    /// A non-positive expense amount was supplied.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Share allocation was attempted with nobody to allocate to.
    #[error("no participants to allocate shares to")]
    NoParticipants,

    /// The payer id does not reference a known participant.
    #[error("unknown payer: {0}")]
    UnknownPayer(ParticipantId),

    /// A participant id was referenced but is not in the participant list.
    #[error("unknown participant: {0}")]
    UnknownParticipant(ParticipantId),

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A value failed validation (e.g. empty description).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_income(msg: impl Into<String>) -> Self {
        Self::InvalidIncome(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
