use anyhow::Result;

use crate::test_utils::*;
use ethsig_core::{
    guess_signer, recover_signer, recover_signer_unconditionally,
    prefixed_digest, Error, RawSignature, Signer,
};

#[tokio::test]
async fn integration_recover_deterministic() -> Result<()> {
    let (signer, address) = new_signer();
    let signature = signer.sign("mock message").await?;

    let first = recover_signer("mock message", &signature)?;
    let second = recover_signer("mock message", &signature)?;
    assert_eq!(first, second);
    assert_eq!(address, first);
    assert_eq!(address, guess_signer("mock message", &signature)?);
    Ok(())
}

#[test]
fn integration_recover_vrs() -> Result<()> {
    let (signer, address) = new_signer();
    let signature = signer.sign_message("mock message")?;
    let vrs = signature.to_vrs().to_string();

    // The RSV reading of these bytes has an invalid recovery id
    // unless the last byte of s happens to be 0, 1, 27 or 28.
    let last = signature.s[31];
    if !matches!(last, 0 | 1 | 27 | 28) {
        assert_eq!(address, recover_signer("mock message", &vrs)?);
    }
    Ok(())
}

#[test]
fn integration_recover_other_message() -> Result<()> {
    let (signer, address) = new_signer();
    let signature = signer.sign_message("mock message")?;
    let recovered =
        recover_signer("another message", &signature.to_string())?;
    assert_ne!(address, recovered);
    Ok(())
}

#[test]
fn integration_recover_exhausted() -> Result<()> {
    let digest = prefixed_digest("mock message")?;
    let raw = RawSignature::from([0u8; 65]);
    let result = recover_signer_unconditionally(&digest, &raw);
    assert!(matches!(result, Err(Error::RecoveryExhausted)));
    Ok(())
}
