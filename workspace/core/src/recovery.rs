//! Public key recovery from signatures.
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use crate::{Address, Digest, Error, ParsedSignature, PublicKey, Result};

/// Recover the public key that produced a signature over a digest.
///
/// Signatures with a high `s` value are normalized first (flipping
/// the recovery id parity) so that signers which do not enforce
/// low `s` still recover to the same key.
pub fn recover_public_key(
    digest: &Digest,
    signature: &ParsedSignature,
) -> Result<PublicKey> {
    let mut recovery_byte = signature.recovery_byte();
    if recovery_byte > 1 {
        return Err(Error::InvalidRecoveryId(signature.v));
    }

    let mut scalars = [0u8; 64];
    scalars[0..32].copy_from_slice(&signature.r);
    scalars[32..64].copy_from_slice(&signature.s);
    let mut ecdsa = Signature::from_slice(&scalars)?;

    if let Some(normalized) = ecdsa.normalize_s() {
        ecdsa = normalized;
        recovery_byte ^= 1;
    }

    let recovery_id = RecoveryId::from_byte(recovery_byte)
        .ok_or(Error::InvalidRecoveryId(signature.v))?;
    let key = VerifyingKey::recover_from_prehash(
        digest.as_bytes(),
        &ecdsa,
        recovery_id,
    )?;
    Ok(PublicKey::from(&key))
}

/// Address for a public key, the low 20 bytes of its keccak-256 hash.
pub fn public_key_to_address(public_key: &PublicKey) -> Address {
    Address::from(public_key)
}

/// Recover the address that produced a signature over a digest.
pub fn derive_address(
    digest: &Digest,
    signature: &ParsedSignature,
) -> Result<Address> {
    let public_key = recover_public_key(digest, signature)?;
    Ok(public_key_to_address(&public_key))
}
