use flexion_core::Verbspec;
use thiserror::Error;

/// The common error type used by the inflectors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InflectionError {
    /// A lemma lacks a form every derivation starts from
    #[error("Lemma {lemma:?} has no {slot}")]
    MissingRequiredForm {
        /// A stored form identifying the lemma, or empty if it has none
        lemma: String,
        /// The slot that was required
        slot: &'static str,
    },

    /// The verb spec uses a wildcard person or number
    #[error("Cannot derive a form for wildcard spec {0}")]
    UnsupportedSpec(Verbspec),
}
