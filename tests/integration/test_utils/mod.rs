use k256::ecdsa::SigningKey;

use ethsig_core::{Address, LocalSigner};

pub fn new_signer() -> (LocalSigner, Address) {
    let signing_key = SigningKey::random(&mut rand::thread_rng());
    let signer = LocalSigner::new(signing_key);
    let address = *signer.address();
    (signer, address)
}

/// Signer for the private key `0x1`.
pub fn signer_one() -> LocalSigner {
    let mut secret = [0u8; 32];
    secret[31] = 1;
    let signing_key =
        SigningKey::from_slice(&secret).expect("failed to create key");
    LocalSigner::new(signing_key)
}

/// Flip one bit of a byte in a hex encoded signature.
pub fn mutate_signature(signature: &str, index: usize) -> String {
    let digits = signature.trim_start_matches("0x");
    let mut bytes = hex::decode(digits).expect("failed to decode hex");
    bytes[index] ^= 0x01;
    format!("0x{}", hex::encode(bytes))
}
