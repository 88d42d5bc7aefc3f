use crate::domain::OwnerId;

/// Resolves a bearer credential to the principal it was issued for. Token
/// issuance belongs to the external auth service; the pipeline only verifies.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<OwnerId, CredentialError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("malformed credential")]
    Malformed,
    #[error("signature mismatch")]
    InvalidSignature,
}
