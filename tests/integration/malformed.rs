use anyhow::Result;

use crate::test_utils::*;
use ethsig_core::{
    prefixed_digest, recover_signer, verify, verify_typed_data, Address,
    Digest, Error,
};

#[test]
fn integration_malformed_short_signature() -> Result<()> {
    let (signer, address) = new_signer();
    let signature = signer.sign_message("mock message")?.to_string();
    let short = &signature[..signature.len() - 2];

    let result = verify("mock message", short, &address);
    assert!(matches!(
        result,
        Err(Error::InvalidLength {
            expected: 130,
            actual: 128
        })
    ));

    let result = recover_signer("mock message", short);
    assert!(matches!(&result, Err(e) if e.is_malformed_input()));
    Ok(())
}

#[test]
fn integration_malformed_signature_hex() -> Result<()> {
    let (_, address) = new_signer();
    let signature = format!("0x{}", "gg".repeat(65));
    let result = verify("mock message", &signature, &address);
    assert!(matches!(result, Err(Error::Hex(_))));

    let digest = Digest::keccak256(b"mock");
    let result = verify_typed_data(&digest, &signature, &address);
    assert!(matches!(&result, Err(e) if e.is_malformed_input()));
    Ok(())
}

#[test]
fn integration_malformed_hex_message() -> Result<()> {
    let (signer, address) = new_signer();
    let signature = signer.sign_message("mock message")?.to_string();
    let result = verify("0x123", &signature, &address);
    assert!(matches!(result, Err(Error::MalformedHexMessage(_))));
    assert!(prefixed_digest("0x123").is_err());
    Ok(())
}

#[test]
fn integration_malformed_address() {
    let result = "0x7e5f4552091a69125d5dfcb7b8c2659029395b".parse::<Address>();
    assert!(matches!(result, Err(Error::InvalidAddress(_))));
}
