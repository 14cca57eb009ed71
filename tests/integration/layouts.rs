use anyhow::Result;

use crate::test_utils::*;
use ethsig_core::{
    parse_as_rsv, parse_as_vrs, parse_signature_against_signer,
    prefixed_digest, verify, Layout, RawSignature,
};

#[test]
fn integration_layout_symmetry() -> Result<()> {
    let (signer, address) = new_signer();
    let digest = prefixed_digest("mock message")?;
    let signature = signer.sign_digest(&digest)?;
    assert!(signature.v == 27 || signature.v == 28);

    let rsv = signature.to_rsv();
    let vrs = signature.to_vrs();
    assert_eq!(
        signature,
        parse_signature_against_signer(&digest, &rsv, &address)?
    );
    assert_eq!(
        signature,
        parse_signature_against_signer(&digest, &vrs, &address)?
    );

    assert!(verify("mock message", &rsv.to_string(), &address)?);
    assert!(verify("mock message", &vrs.to_string(), &address)?);
    Ok(())
}

#[test]
fn integration_layout_zero_based_v() -> Result<()> {
    let (signer, address) = new_signer();
    let digest = prefixed_digest("mock message")?;
    let signature = signer.sign_digest(&digest)?;

    let mut rsv = *signature.to_rsv().as_bytes();
    rsv[64] -= 27;
    let rsv = RawSignature::from(rsv);
    assert_eq!(signature, parse_as_rsv(&rsv));

    let mut vrs = *signature.to_vrs().as_bytes();
    vrs[0] -= 27;
    let vrs = RawSignature::from(vrs);
    assert_eq!(signature, parse_as_vrs(&vrs));

    assert!(verify("mock message", &rsv.to_string(), &address)?);
    assert!(verify("mock message", &vrs.to_string(), &address)?);
    Ok(())
}

#[test]
fn integration_layout_trial_order() {
    assert_eq!([Layout::Rsv, Layout::Vrs], Layout::TRIAL_ORDER);
}
