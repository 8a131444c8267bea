use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rsa::pkcs1v15::Signature;
use rsa::signature::{SignatureEncoding, Signer, Verifier};

use crate::domain::entity::NavState;
use crate::domain::prelude::StateSigner;

// token layout: base64url(json payload) "." base64url(signature)
const SEPARATOR: char = '.';

impl StateSigner for super::RsaClient {
    fn seal(&self, state: &NavState) -> anyhow::Result<String> {
        let payload = serde_json::to_vec(state).context("unable to serialize state")?;
        let signature = self
            .signing_key
            .try_sign(&payload)
            .context("unable to sign state with RSA key")?;
        Ok(format!(
            "{}{SEPARATOR}{}",
            URL_SAFE_NO_PAD.encode(&payload),
            URL_SAFE_NO_PAD.encode(signature.to_bytes())
        ))
    }

    fn open(&self, token: &str) -> anyhow::Result<NavState> {
        let (payload, signature) = token
            .split_once(SEPARATOR)
            .ok_or_else(|| anyhow::anyhow!("malformed state token"))?;
        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .context("unable to decode state payload")?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .context("unable to decode state signature")?;
        let signature =
            Signature::try_from(signature.as_slice()).context("invalid state signature")?;
        self.verifying_key
            .verify(&payload, &signature)
            .context("state signature mismatch")?;
        serde_json::from_slice(&payload).context("unable to deserialize state")
    }
}
