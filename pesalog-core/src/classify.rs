//! Ordered template-matching rules mapping raw text to a transaction kind.
//!
//! Notifications follow a handful of fixed human-language templates differing
//! mainly in verb and field layout, so a linear ordered-rule scan is enough.
//! Order is a designed priority: failure texts quote the operation they
//! refused ("...to send Ksh500.00 to..."), and the paybill template is a
//! textual superset of the plain send template, so both are checked before
//! the generic rules they overlap with.

use regex::Regex;

use crate::error::ParseError;
use crate::types::TransactionKind;

struct KindRule {
    kind: TransactionKind,
    requires: &'static str,
    forbids: Option<&'static str>,
}

const KIND_RULES: &[KindRule] = &[
    KindRule {
        kind: TransactionKind::Failed,
        requires: r"(?i)\bfailed\b|\binsufficient (?:funds|balance)\b|\bdo not have enough money\b",
        forbids: None,
    },
    KindRule {
        kind: TransactionKind::PaybillPayment,
        requires: r"(?i)\bsent to\b.+\bfor account\b",
        forbids: None,
    },
    KindRule {
        kind: TransactionKind::Received,
        requires: r"(?i)\byou have received\b",
        forbids: None,
    },
    KindRule {
        kind: TransactionKind::MerchantPayment,
        requires: r"(?i)\bpaid to\b",
        forbids: None,
    },
    KindRule {
        kind: TransactionKind::Sent,
        requires: r"(?i)\bsent to\b",
        forbids: Some(r"(?i)\bfor account\b"),
    },
    KindRule {
        kind: TransactionKind::AirtimePurchase,
        requires: r"(?i)\bof airtime\b",
        forbids: None,
    },
    KindRule {
        kind: TransactionKind::Withdrawal,
        requires: r"(?i)\bwithdrawn?\b",
        forbids: None,
    },
    KindRule {
        kind: TransactionKind::BalanceCheck,
        requires: r"(?i)\baccount balance was\b",
        forbids: None,
    },
];

#[derive(Debug)]
struct CompiledRule {
    kind: TransactionKind,
    requires: Regex,
    forbids: Option<Regex>,
}

/// First-match classifier over the ordered rule table.
#[derive(Debug)]
pub struct Classifier {
    rules: Vec<CompiledRule>,
}

impl Classifier {
    /// Compile the rule table. Fails only if a built-in pattern is invalid.
    pub fn new() -> Result<Self, regex::Error> {
        let mut rules = Vec::with_capacity(KIND_RULES.len());
        for rule in KIND_RULES {
            rules.push(CompiledRule {
                kind: rule.kind,
                requires: Regex::new(rule.requires)?,
                forbids: rule.forbids.map(Regex::new).transpose()?,
            });
        }
        Ok(Self { rules })
    }

    /// Map text to the kind of the first matching rule.
    ///
    /// Total and exclusive: every input yields exactly one kind or
    /// `UnrecognizedMessage`.
    pub fn classify(&self, text: &str) -> Result<TransactionKind, ParseError> {
        for rule in &self.rules {
            if rule.requires.is_match(text)
                && rule.forbids.as_ref().is_none_or(|f| !f.is_match(text))
            {
                return Ok(rule.kind);
            }
        }
        Err(ParseError::UnrecognizedMessage(text.to_string()))
    }
}
