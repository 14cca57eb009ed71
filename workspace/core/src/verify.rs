//! Verification of signatures whose byte layout is not known.
//!
//! Each layout in [`Layout::TRIAL_ORDER`] is tried in turn, RSV
//! before VRS, and the first layout that recovers the claimed
//! signer wins. Recovery failures on the way are not errors; only
//! malformed input (wrong length, bad hex) is reported to the
//! caller by the boolean entry points.
use crate::{
    derive_address, prefixed_digest, Address, Digest, Error, Layout,
    ParsedSignature, RawSignature, Result,
};

/// Determine if a signature over a digest was produced by `signer`.
///
/// Recovery errors are treated as a mismatch.
pub fn is_valid_signature(
    signer: &Address,
    digest: &Digest,
    signature: &ParsedSignature,
) -> bool {
    match derive_address(digest, signature) {
        Ok(address) => &address == signer,
        Err(e) => {
            tracing::debug!(error = %e, "signature recovery failed");
            false
        }
    }
}

/// Parse a raw signature in the first layout that recovers `signer`.
pub fn parse_signature_against_signer(
    digest: &Digest,
    raw: &RawSignature,
    signer: &Address,
) -> Result<ParsedSignature> {
    for layout in Layout::TRIAL_ORDER {
        let signature = layout.parse(raw);
        if is_valid_signature(signer, digest, &signature) {
            tracing::debug!(%layout, %signer, "signature layout matched");
            return Ok(signature);
        }
        tracing::debug!(%layout, %signer, "signature layout mismatch");
    }
    Err(Error::SignerMismatch(*signer))
}

/// Parse a hex encoded signature over a prefixed message in the
/// first layout that recovers `signer`.
pub fn parse_signature(
    message: &str,
    signature: &str,
    signer: &Address,
) -> Result<ParsedSignature> {
    let digest = prefixed_digest(message)?;
    let raw: RawSignature = signature.parse()?;
    parse_signature_against_signer(&digest, &raw, signer)
}

/// Verify a raw signature over a digest against `signer`.
pub fn verify_digest(
    digest: &Digest,
    raw: &RawSignature,
    signer: &Address,
) -> bool {
    parse_signature_against_signer(digest, raw, signer).is_ok()
}

/// Verify a hex encoded signature over a prefixed message.
///
/// Returns an error only when the message or signature is
/// malformed; a signature from another signer is `Ok(false)`.
pub fn verify(message: &str, signature: &str, signer: &Address) -> Result<bool> {
    let digest = prefixed_digest(message)?;
    let raw: RawSignature = signature.parse()?;
    Ok(verify_digest(&digest, &raw, signer))
}

/// Verify a hex encoded signature over an EIP-712 typed data digest.
pub fn verify_typed_data(
    typed_data_digest: &Digest,
    signature: &str,
    signer: &Address,
) -> Result<bool> {
    let raw: RawSignature = signature.parse()?;
    Ok(verify_digest(typed_data_digest, &raw, signer))
}

/// Recover the signer of a digest without a claimed signer to
/// compare against.
///
/// The address recovered from the first layout that does not
/// fail is returned.
pub fn recover_signer_unconditionally(
    digest: &Digest,
    raw: &RawSignature,
) -> Result<Address> {
    for layout in Layout::TRIAL_ORDER {
        match derive_address(digest, &layout.parse(raw)) {
            Ok(address) => {
                tracing::debug!(%layout, %address, "recovered signer");
                return Ok(address);
            }
            Err(e) => {
                tracing::debug!(%layout, error = %e, "recovery failed");
            }
        }
    }
    Err(Error::RecoveryExhausted)
}

/// Recover the signer of a hex encoded signature over a
/// prefixed message.
pub fn recover_signer(message: &str, signature: &str) -> Result<Address> {
    let digest = prefixed_digest(message)?;
    let raw: RawSignature = signature.parse()?;
    recover_signer_unconditionally(&digest, &raw)
}

/// Recover the signer of a hex encoded signature over an EIP-712
/// typed data digest.
pub fn recover_typed_data_signer(
    typed_data_digest: &Digest,
    signature: &str,
) -> Result<Address> {
    let raw: RawSignature = signature.parse()?;
    recover_signer_unconditionally(typed_data_digest, &raw)
}

/// Recover the signer of a prefixed message reading the
/// signature as RSV only.
pub fn guess_signer(message: &str, signature: &str) -> Result<Address> {
    let digest = prefixed_digest(message)?;
    let raw: RawSignature = signature.parse()?;
    derive_address(&digest, &Layout::Rsv.parse(&raw))
}
