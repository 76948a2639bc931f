//! Error types for OID text parsing.

use thiserror::Error;

/// Errors produced when parsing an OID from its dotted-decimal text form.
#[derive(Debug, Error)]
pub enum Error {
    #[error("OBJECT IDENTIFIER: empty string")]
    EmptyString,
    #[error("OBJECT IDENTIFIER: empty component")]
    EmptyComponent,
    #[error("OBJECT IDENTIFIER: invalid component '{0}'")]
    InvalidComponent(String),
    #[error("OBJECT IDENTIFIER: first component must be 0, 1, or 2, got {0}")]
    InvalidFirstArc(u64),
}
