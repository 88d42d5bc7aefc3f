mod signed_token_verifier;

pub use signed_token_verifier::SignedTokenVerifier;
