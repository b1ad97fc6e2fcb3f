//! Typed failures returned by the parser. All are recoverable by the caller;
//! the correct response to any of them is to log the message and move on.

use thiserror::Error;

use crate::extract::Field;
use crate::types::TransactionKind;

/// Failure of a single-message parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// No classification rule matched; carries the original text for diagnostics.
    #[error("message format not recognized: {0}")]
    UnrecognizedMessage(String),

    /// The kind was determined but a mandatory field's anchor pattern was
    /// absent (truncated or off-template message).
    #[error("{kind} message is missing its {field} field")]
    MissingField {
        kind: TransactionKind,
        field: Field,
    },

    /// A located field's raw text could not be converted to its typed form.
    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

/// Failure converting a raw substring into a typed value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizationError {
    #[error("cannot read {raw:?} as a money amount")]
    InvalidAmount { raw: String },

    /// Amounts in these notifications are never legitimately negative.
    #[error("refusing negative amount {raw:?}")]
    NegativeAmount { raw: String },

    #[error("{date:?} {time:?} is not a real calendar date and time")]
    InvalidTimestamp { date: String, time: String },
}
