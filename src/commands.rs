//! Command implementations for the command line interface.
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use ethsig_core::{
    prefixed_digest, simple_digest, Address, Digest, LocalSigner,
    ParsedSignature, Signer,
};

use crate::{Error, Result};

/// Output of the sign command.
#[derive(Debug, Serialize)]
pub struct Signed {
    /// Address of the signer.
    pub signer: Address,
    /// Signature in the RSV layout.
    pub signature: String,
    /// Signature fields.
    #[serde(flatten)]
    pub fields: ParsedSignature,
}

/// Output of the verify commands.
#[derive(Debug, Serialize)]
pub struct Verified {
    /// Whether the signature was produced by the signer.
    pub valid: bool,
}

/// Output of the recover commands.
#[derive(Debug, Serialize)]
pub struct Recovered {
    /// Address that produced the signature.
    pub signer: Address,
}

fn local_signer(key: Option<&SecretString>) -> Result<LocalSigner> {
    let key = key.ok_or(Error::NoPrivateKey)?;
    Ok(LocalSigner::from_hex(key.expose_secret())?)
}

/// Address of a private key.
pub fn address(key: Option<&SecretString>) -> Result<Address> {
    Ok(*local_signer(key)?.address())
}

/// Digest of a message, prefixed unless `simple` is set.
pub fn hash(message: &str, simple: bool) -> Result<Digest> {
    if simple {
        Ok(simple_digest(message))
    } else {
        Ok(prefixed_digest(message)?)
    }
}

/// Sign a message with a private key.
pub async fn sign(key: Option<&SecretString>, message: &str) -> Result<Signed> {
    let signer = local_signer(key)?;
    let signature = signer.sign(message).await?;
    let fields = ethsig_core::parse_signature(
        message,
        &signature,
        signer.address(),
    )?;
    Ok(Signed {
        signer: *signer.address(),
        signature,
        fields,
    })
}

/// Verify a signature over a prefixed message.
pub fn verify(
    message: &str,
    signature: &str,
    signer: &Address,
) -> Result<Verified> {
    let valid = ethsig_core::verify(message, signature, signer)?;
    tracing::debug!(%signer, valid, "verify message");
    Ok(Verified { valid })
}

/// Verify a signature over a typed data digest.
pub fn verify_typed(
    digest: &Digest,
    signature: &str,
    signer: &Address,
) -> Result<Verified> {
    let valid = ethsig_core::verify_typed_data(digest, signature, signer)?;
    tracing::debug!(%signer, valid, "verify typed data");
    Ok(Verified { valid })
}

/// Recover the signer of a prefixed message.
pub fn recover(message: &str, signature: &str) -> Result<Recovered> {
    let signer = ethsig_core::recover_signer(message, signature)?;
    Ok(Recovered { signer })
}

/// Recover the signer of a typed data digest.
pub fn recover_typed(digest: &Digest, signature: &str) -> Result<Recovered> {
    let signer = ethsig_core::recover_typed_data_signer(digest, signature)?;
    Ok(Recovered { signer })
}
