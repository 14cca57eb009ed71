use anyhow::Result;
use std::{sync::Arc, time::Duration};

use crate::test_utils::*;
use ethsig_core::{
    address_to_public_key, verify, Address, Error, NativeSigner, SignFuture,
    Signer,
};

#[tokio::test]
async fn integration_native_signer() -> Result<()> {
    let (local, address) = new_signer();
    let local = Arc::new(local);

    let backend = Arc::clone(&local);
    let native = NativeSigner::new(
        move |message: String, account: Address| -> SignFuture {
            let backend = Arc::clone(&backend);
            Box::pin(async move {
                assert_eq!(&account, backend.address());
                tokio::time::sleep(Duration::from_millis(5)).await;
                backend.sign(&message).await
            })
        },
        address,
    );

    let signature = native.sign("mock message").await?;
    assert!(verify("mock message", &signature, &address)?);

    let boxed: Box<dyn Signer> = Box::new(native);
    let public_key = address_to_public_key(&address, boxed.as_ref()).await?;
    assert_eq!(address, public_key.to_address());
    Ok(())
}

#[tokio::test]
async fn integration_native_signer_failure() -> Result<()> {
    let (_, address) = new_signer();
    let native = NativeSigner::new(
        |_message: String, account: Address| -> SignFuture {
            Box::pin(async move {
                Err(Error::Remote(format!("account {} is locked", account)))
            })
        },
        address,
    );

    let result = native.sign("mock message").await;
    assert!(matches!(
        &result,
        Err(Error::Remote(reason)) if reason.contains("locked")
    ));

    let result = address_to_public_key(&address, &native).await;
    assert!(matches!(result, Err(Error::Remote(_))));
    Ok(())
}
