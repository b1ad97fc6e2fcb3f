//! The assembler: Classifier -> Extractor -> Normalizer, one record per message.

use crate::classify::Classifier;
use crate::error::ParseError;
use crate::extract::Extractor;
use crate::normalize::{normalize_amount, normalize_timestamp};
use crate::types::{TransactionKind, TransactionRecord, TransactionStatus};

/// Single-message parser over the compiled rule tables.
///
/// Build once, call `parse` per message; parsing is pure and stateless, so a
/// shared `MessageParser` can serve any number of threads.
#[derive(Debug)]
pub struct MessageParser {
    classifier: Classifier,
    extractor: Extractor,
}

impl MessageParser {
    /// Compile the classification and extraction rule tables.
    ///
    /// Fails only if a built-in pattern is invalid.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            classifier: Classifier::new()?,
            extractor: Extractor::new()?,
        })
    }

    /// Parse one notification into a structured record, all-or-nothing.
    ///
    /// Stages short-circuit, so the most specific error wins:
    /// `UnrecognizedMessage` > `MissingField` > `NormalizationError`.
    pub fn parse(&self, text: &str) -> Result<TransactionRecord, ParseError> {
        let kind = self.classifier.classify(text)?;
        let raw = self.extractor.extract(text, kind)?;

        let amount = raw.amount.as_deref().map(normalize_amount).transpose()?;
        let balance = raw.balance.as_deref().map(normalize_amount).transpose()?;
        let transaction_cost = raw
            .transaction_cost
            .as_deref()
            .map(normalize_amount)
            .transpose()?;
        let daily_limit = raw.daily_limit.as_deref().map(normalize_amount).transpose()?;

        let timestamp = match (raw.date.as_deref(), raw.time.as_deref()) {
            (Some(date), Some(time)) => Some(normalize_timestamp(date, time)?),
            _ => None,
        };

        // Failed-transaction override: the kind already tells us the outcome.
        let (status, failure_reason) = if kind == TransactionKind::Failed {
            (TransactionStatus::Failed, raw.failure_reason)
        } else {
            (TransactionStatus::Success, None)
        };

        Ok(TransactionRecord {
            kind,
            transaction_id: raw.transaction_id,
            amount,
            counterparty_name: raw.counterparty_name,
            counterparty_identifier: raw.counterparty_identifier,
            balance,
            transaction_cost,
            daily_limit,
            timestamp,
            status,
            failure_reason,
            raw_message: text.to_string(),
        })
    }
}
