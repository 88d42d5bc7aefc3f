use policybrief::application::ports::{CredentialError, CredentialVerifier};
use policybrief::domain::OwnerId;
use policybrief::infrastructure::auth::SignedTokenVerifier;

#[test]
fn given_issued_token_when_verifying_then_owner_round_trips() {
    let verifier = SignedTokenVerifier::new("secret");
    let owner = OwnerId::new("user-42");

    let token = verifier.issue(&owner);
    let resolved = verifier.verify(&token).unwrap();

    assert_eq!(resolved, owner);
}

#[test]
fn given_token_signed_with_other_secret_when_verifying_then_rejected() {
    let issuer = SignedTokenVerifier::new("secret-a");
    let verifier = SignedTokenVerifier::new("secret-b");

    let token = issuer.issue(&OwnerId::new("user-42"));
    let result = verifier.verify(&token);

    assert!(matches!(result, Err(CredentialError::InvalidSignature)));
}

#[test]
fn given_garbage_token_when_verifying_then_malformed() {
    let verifier = SignedTokenVerifier::new("secret");

    assert!(matches!(
        verifier.verify("no-separator"),
        Err(CredentialError::Malformed)
    ));
    assert!(matches!(
        verifier.verify("!!!.deadbeef"),
        Err(CredentialError::Malformed)
    ));
    assert!(matches!(
        verifier.verify("dXNlcg.not-hex"),
        Err(CredentialError::Malformed)
    ));
}
