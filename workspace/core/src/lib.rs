//! Signing, signer recovery and verification for Ethereum
//! signed messages and EIP-712 typed data digests.
//!
//! Raw signatures are accepted in both the RSV and VRS byte
//! layouts; the first layout that recovers the claimed signer wins.
mod address;
mod codec;
mod digest;
mod error;
mod recovery;
mod signer;
mod verify;

pub use address::{Address, PublicKey, ADDRESS_LEN, PUBLIC_KEY_LEN};
pub use codec::{
    parse_as_rsv, parse_as_vrs, Layout, ParsedSignature, RawSignature,
    SIGNATURE_LEN,
};
pub use digest::{
    prefixed_digest, prefixed_digest_bytes, simple_digest, Digest, Message,
    DIGEST_LEN, MESSAGE_PREFIX,
};
pub use error::Error;
pub use recovery::{derive_address, public_key_to_address, recover_public_key};
pub use signer::{
    address_to_public_key, LocalSigner, NativeSigner, SignFuture, Signer,
};
pub use verify::{
    guess_signer, is_valid_signature, parse_signature,
    parse_signature_against_signer, recover_signer,
    recover_signer_unconditionally, recover_typed_data_signer, verify,
    verify_digest, verify_typed_data,
};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
