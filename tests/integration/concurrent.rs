use anyhow::Result;
use std::sync::Arc;

use crate::test_utils::*;
use ethsig_core::{verify, Signer};

#[tokio::test(flavor = "multi_thread")]
async fn integration_concurrent_sign_verify() -> Result<()> {
    let (signer, address) = new_signer();
    let signer = Arc::new(signer);

    let mut handles = Vec::new();
    for i in 0..16 {
        let signer = Arc::clone(&signer);
        handles.push(tokio::spawn(async move {
            let message = format!("mock message {}", i);
            let signature = signer.sign(&message).await?;
            let valid = verify(&message, &signature, &address)?;
            Ok::<_, ethsig_core::Error>(valid)
        }));
    }

    for handle in futures::future::join_all(handles).await {
        assert!(handle??);
    }
    Ok(())
}
