use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::application::ports::{CredentialError, CredentialVerifier};
use crate::domain::OwnerId;

type HmacSha256 = Hmac<Sha256>;

/// Verifies bearer tokens of the form `base64url(principal).hex(hmac)`, the
/// format the auth service signs them in. The principal is opaque; only the
/// signature binds it to this deployment's secret.
pub struct SignedTokenVerifier {
    secret: String,
}

impl SignedTokenVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Mirror of the auth service's signing step. Kept here so tests can mint
    /// valid credentials without standing up the external service.
    pub fn issue(&self, owner: &OwnerId) -> String {
        let encoded = URL_SAFE_NO_PAD.encode(owner.as_str());
        format!("{}.{}", encoded, self.sign(owner.as_str()))
    }

    fn sign(&self, principal: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(principal.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl CredentialVerifier for SignedTokenVerifier {
    fn verify(&self, token: &str) -> Result<OwnerId, CredentialError> {
        let (encoded, signature) = token.split_once('.').ok_or(CredentialError::Malformed)?;

        let principal_bytes = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| CredentialError::Malformed)?;
        let principal =
            String::from_utf8(principal_bytes).map_err(|_| CredentialError::Malformed)?;

        let signature_bytes =
            hex::decode(signature).map_err(|_| CredentialError::Malformed)?;

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(principal.as_bytes());
        mac.verify_slice(&signature_bytes)
            .map_err(|_| CredentialError::InvalidSignature)?;

        Ok(OwnerId::new(principal))
    }
}
