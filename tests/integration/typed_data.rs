use anyhow::Result;

use crate::test_utils::*;
use ethsig_core::{
    recover_typed_data_signer, verify, verify_typed_data, Digest,
};

/// Stand in for a digest computed from EIP-712 typed data.
fn typed_data_digest() -> Digest {
    Digest::keccak256(b"\x19\x01mock domain separator and struct hash")
}

#[test]
fn integration_typed_data_verify() -> Result<()> {
    let (signer, address) = new_signer();
    let digest = typed_data_digest();
    let signature = signer.sign_digest(&digest)?;

    assert!(verify_typed_data(&digest, &signature.to_string(), &address)?);
    assert!(verify_typed_data(
        &digest,
        &signature.to_vrs().to_string(),
        &address
    )?);
    assert_eq!(
        address,
        recover_typed_data_signer(&digest, &signature.to_string())?
    );
    Ok(())
}

#[test]
fn integration_typed_data_domains_do_not_cross() -> Result<()> {
    let (signer, address) = new_signer();
    let digest = typed_data_digest();
    let typed = signer.sign_digest(&digest)?.to_string();
    assert!(!verify("mock message", &typed, &address)?);

    let message = signer.sign_message("mock message")?.to_string();
    assert!(!verify_typed_data(&digest, &message, &address)?);
    Ok(())
}

#[test]
fn integration_typed_data_wrong_signer() -> Result<()> {
    let (signer, _) = new_signer();
    let (_, other) = new_signer();
    let digest = typed_data_digest();
    let signature = signer.sign_digest(&digest)?.to_string();
    assert!(!verify_typed_data(&digest, &signature, &other)?);
    Ok(())
}
