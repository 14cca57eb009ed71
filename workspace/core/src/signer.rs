//! Signer capability and its local and native implementations.
use async_trait::async_trait;
use futures::future::BoxFuture;
use k256::{ecdsa::SigningKey, elliptic_curve::zeroize::Zeroizing};
use std::fmt;

use crate::{
    derive_address, parse_signature_against_signer, prefixed_digest,
    recover_public_key, Address, Digest, Error, ParsedSignature,
    PublicKey, RawSignature, Result,
};

/// Message signed to discover the public key of a signer.
const DUMMY_MESSAGE: &[u8] = b"dummy_msg_data";

/// Capability to sign messages with the Ethereum message prefix.
///
/// Implementations may perform I/O; callers that need ordering
/// between concurrent calls must serialize them.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Sign a message and return the `0x` prefixed hex signature.
    async fn sign(&self, message: &str) -> Result<String>;
}

/// Signer backed by a private key held in memory.
pub struct LocalSigner {
    signing_key: SigningKey,
    address: Address,
}

impl LocalSigner {
    /// Create a signer for a private key.
    pub fn new(signing_key: SigningKey) -> Self {
        let address = Address::from(signing_key.verifying_key());
        Self {
            signing_key,
            address,
        }
    }

    /// Create a signer for a private key that must derive
    /// the expected address.
    pub fn with_address(
        signing_key: SigningKey,
        expected: &Address,
    ) -> Result<Self> {
        let signer = Self::new(signing_key);
        if &signer.address != expected {
            return Err(Error::KeyMismatch {
                expected: *expected,
                derived: signer.address,
            });
        }
        Ok(signer)
    }

    /// Create a signer from a hex encoded private key.
    pub fn from_hex(private_key: &str) -> Result<Self> {
        let digits = private_key.strip_prefix("0x").unwrap_or(private_key);
        let bytes = Zeroizing::new(hex::decode(digits)?);
        if bytes.len() != 32 {
            return Err(Error::InvalidPrivateKey);
        }
        let signing_key = SigningKey::from_slice(&bytes)
            .map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self::new(signing_key))
    }

    /// Address of this signer.
    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Sign a message with the Ethereum message prefix.
    pub fn sign_message(&self, message: &str) -> Result<ParsedSignature> {
        let digest = prefixed_digest(message)?;
        self.sign_digest(&digest)
    }

    /// Sign a digest as is.
    ///
    /// The signature is recovered before it is returned and must
    /// derive the address of this signer.
    pub fn sign_digest(&self, digest: &Digest) -> Result<ParsedSignature> {
        let (signature, recovery_id) = self
            .signing_key
            .sign_prehash_recoverable(digest.as_bytes())
            .map_err(Error::Signing)?;

        let bytes = signature.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        let signature = ParsedSignature::new(r, s, recovery_id.to_byte());

        let recovered = derive_address(digest, &signature)?;
        if recovered != self.address {
            tracing::error!(
                expected = %self.address,
                recovered = %recovered,
                "signature failed self verification"
            );
            return Err(Error::SelfVerification {
                expected: self.address,
                recovered,
            });
        }
        Ok(signature)
    }
}

impl fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalSigner")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Signer for LocalSigner {
    async fn sign(&self, message: &str) -> Result<String> {
        let signature = self.sign_message(message)?;
        tracing::debug!(signer = %self.address, "signed message");
        Ok(signature.to_string())
    }
}

/// Future returned by the signing function of a [`NativeSigner`].
pub type SignFuture = BoxFuture<'static, Result<String>>;

/// Signer that delegates to an external signing function such
/// as a node's `eth_sign` or a hardware wallet.
///
/// The function receives the message and the address of the
/// account that should sign it.
pub struct NativeSigner<F> {
    sign_fn: F,
    address: Address,
}

impl<F> NativeSigner<F>
where
    F: Fn(String, Address) -> SignFuture + Send + Sync,
{
    /// Create a native signer for an account.
    pub fn new(sign_fn: F, address: Address) -> Self {
        Self { sign_fn, address }
    }

    /// Address of the account that signs.
    pub fn address(&self) -> &Address {
        &self.address
    }
}

#[async_trait]
impl<F> Signer for NativeSigner<F>
where
    F: Fn(String, Address) -> SignFuture + Send + Sync,
{
    async fn sign(&self, message: &str) -> Result<String> {
        (self.sign_fn)(message.to_owned(), self.address).await
    }
}

/// Discover the public key of a signer by having it sign a
/// dummy message.
///
/// Fails with [`Error::SignerMismatch`] when the signature does
/// not recover to `address`.
pub async fn address_to_public_key<S>(
    address: &Address,
    signer: &S,
) -> Result<PublicKey>
where
    S: Signer + ?Sized,
{
    let message = format!("0x{}", hex::encode(DUMMY_MESSAGE));
    let signature = signer.sign(&message).await?;
    let raw: RawSignature = signature.parse()?;
    let digest = prefixed_digest(&message)?;
    let signature = parse_signature_against_signer(&digest, &raw, address)?;
    recover_public_key(&digest, &signature)
}
