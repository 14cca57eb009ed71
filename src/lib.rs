mod commands;
mod error;

pub use commands::{
    address, hash, recover, recover_typed, sign, verify, verify_typed,
    Recovered, Signed, Verified,
};
pub use error::Error;

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
