use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("a private key is required, use --key or ETHSIG_PRIVATE_KEY")]
    NoPrivateKey,

    #[error(transparent)]
    Core(#[from] ethsig_core::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
