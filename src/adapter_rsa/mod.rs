use std::{io::Write, path::PathBuf};

use anyhow::Context;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs1v15::{SigningKey, VerifyingKey};
use rsa::RsaPrivateKey;
use sha2::Sha256;

mod signer;

const KEY_SIZE: usize = 2048;

pub struct Config {
    private_key_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            private_key_path: PathBuf::from(
                crate::with_env_or("RSA_PRIVATE_KEY_PATH", "./state-key.pem").as_ref(),
            ),
        })
    }

    fn generate_private_key(&self) -> anyhow::Result<()> {
        let mut rng = rand::thread_rng();
        let private_key =
            RsaPrivateKey::new(&mut rng, KEY_SIZE).context("unable to generate RSA private key")?;

        let pem = private_key
            .to_pkcs1_pem(rsa::pkcs1::LineEnding::LF)
            .context("unable to encode RSA private key as PEM")?;

        let mut output = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.private_key_path)
            .context("unable to create RSA private key file")?;
        output
            .write_all(pem.as_bytes())
            .context("unable to write RSA private key")?;
        output
            .flush()
            .context("unable to flush RSA private key content")?;

        Ok(())
    }

    pub fn build(self) -> anyhow::Result<RsaClient> {
        if !self.private_key_path.exists() {
            tracing::info!(path = ?self.private_key_path, "generating state signing key");
            self.generate_private_key()?;
        }

        let pem = std::fs::read_to_string(&self.private_key_path)
            .context("unable to read RSA private key file")?;

        let private_key = RsaPrivateKey::from_pkcs1_pem(&pem)
            .context("unable to parse RSA private key from PEM")?;

        Ok(RsaClient::from(private_key))
    }
}

/// Signs and verifies navigation state tokens.
#[derive(Clone)]
pub struct RsaClient {
    signing_key: SigningKey<Sha256>,
    verifying_key: VerifyingKey<Sha256>,
}

impl From<RsaPrivateKey> for RsaClient {
    fn from(private_key: RsaPrivateKey) -> Self {
        let verifying_key = VerifyingKey::<Sha256>::new(private_key.to_public_key());
        Self {
            signing_key: SigningKey::<Sha256>::new(private_key),
            verifying_key,
        }
    }
}
