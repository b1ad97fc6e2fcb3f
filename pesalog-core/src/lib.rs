//! pesalog-core: turns M-PESA style notification texts into structured transaction records.
//!
//! One call per message: `MessageParser::parse` classifies the text, extracts
//! the kind-specific fields, normalizes money and timestamps, and returns a
//! `TransactionRecord` or a typed `ParseError`. No I/O, no shared state.

pub mod classify;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod parser;
pub mod types;

pub use classify::Classifier;
pub use error::{NormalizationError, ParseError};
pub use extract::{Extractor, Field, RawFields};
pub use normalize::{normalize_amount, normalize_timestamp};
pub use parser::MessageParser;
pub use types::{TransactionKind, TransactionRecord, TransactionStatus};
