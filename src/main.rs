use clap::{Parser, Subcommand};
use secrecy::SecretString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ethsig::Result;
use ethsig_core::{Address, Digest};

/// Sign and verify Ethereum signed messages.
#[derive(Parser, Debug)]
#[clap(name = "ethsig", author, version, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the address for a private key.
    Address {
        /// Hex encoded private key.
        #[clap(short, long, env = "ETHSIG_PRIVATE_KEY", hide_env_values = true)]
        key: Option<SecretString>,
    },
    /// Print the digest of a message.
    Hash {
        /// Hash the message without the Ethereum prefix.
        #[clap(long)]
        simple: bool,

        /// Message to hash, 0x prefixed hex is hashed as bytes.
        message: String,
    },
    /// Sign a message with the Ethereum prefix.
    Sign {
        /// Hex encoded private key.
        #[clap(short, long, env = "ETHSIG_PRIVATE_KEY", hide_env_values = true)]
        key: Option<SecretString>,

        /// Message to sign, 0x prefixed hex is signed as bytes.
        message: String,
    },
    /// Verify the signer of a message.
    Verify {
        /// Message that was signed.
        message: String,

        /// Hex encoded signature in RSV or VRS layout.
        signature: String,

        /// Address of the claimed signer.
        signer: Address,
    },
    /// Recover the signer of a message.
    Recover {
        /// Message that was signed.
        message: String,

        /// Hex encoded signature in RSV or VRS layout.
        signature: String,
    },
    /// Verify the signer of an EIP-712 typed data digest.
    VerifyTyped {
        /// Typed data digest.
        digest: Digest,

        /// Hex encoded signature in RSV or VRS layout.
        signature: String,

        /// Address of the claimed signer.
        signer: Address,
    },
    /// Recover the signer of an EIP-712 typed data digest.
    RecoverTyped {
        /// Typed data digest.
        digest: Digest,

        /// Hex encoded signature in RSV or VRS layout.
        signature: String,
    },
}

async fn run() -> Result<()> {
    let args = Cli::parse();
    let stdout = std::io::stdout();

    match args.command {
        Command::Address { key } => {
            let address = ethsig::address(key.as_ref())?;
            serde_json::to_writer_pretty(stdout, &address)?;
        }
        Command::Hash { simple, message } => {
            let digest = ethsig::hash(&message, simple)?;
            serde_json::to_writer_pretty(stdout, &digest)?;
        }
        Command::Sign { key, message } => {
            let signed = ethsig::sign(key.as_ref(), &message).await?;
            tracing::info!(signer = %signed.signer, "signed message");
            serde_json::to_writer_pretty(stdout, &signed)?;
        }
        Command::Verify {
            message,
            signature,
            signer,
        } => {
            let verified = ethsig::verify(&message, &signature, &signer)?;
            serde_json::to_writer_pretty(stdout, &verified)?;
        }
        Command::Recover { message, signature } => {
            let recovered = ethsig::recover(&message, &signature)?;
            serde_json::to_writer_pretty(stdout, &recovered)?;
        }
        Command::VerifyTyped {
            digest,
            signature,
            signer,
        } => {
            let verified =
                ethsig::verify_typed(&digest, &signature, &signer)?;
            serde_json::to_writer_pretty(stdout, &verified)?;
        }
        Command::RecoverTyped { digest, signature } => {
            let recovered = ethsig::recover_typed(&digest, &signature)?;
            serde_json::to_writer_pretty(stdout, &recovered)?;
        }
    }

    println!();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(_) => {}
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}
