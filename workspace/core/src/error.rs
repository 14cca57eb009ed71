use thiserror::Error;

use crate::Address;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid length, expected {expected} but got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("hex message {0} has an odd number of digits")]
    MalformedHexMessage(String),

    #[error("invalid address {0}")]
    InvalidAddress(String),

    #[error("recovery id {0} is not 27 or 28")]
    InvalidRecoveryId(u8),

    #[error("unable to parse signature (expected signer {0})")]
    SignerMismatch(Address),

    #[error("unable to recover signer from any signature layout")]
    RecoveryExhausted,

    #[error("signature recovers {recovered} but signer is {expected}")]
    SelfVerification { expected: Address, recovered: Address },

    #[error("private key derives {derived} but intended signer is {expected}")]
    KeyMismatch { expected: Address, derived: Address },

    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("remote signer failed: {0}")]
    Remote(String),

    #[error("signing failed: {0}")]
    Signing(#[source] k256::ecdsa::Error),

    #[error("signature recovery failed: {0}")]
    Recovery(#[from] k256::ecdsa::Error),

    #[error(transparent)]
    Hex(#[from] hex::FromHexError),
}

impl Error {
    /// Determine if this error was caused by structurally
    /// malformed input rather than a signature that does not
    /// recover to the expected signer.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. }
                | Self::MalformedHexMessage(_)
                | Self::InvalidAddress(_)
                | Self::Hex(_)
        )
    }
}
