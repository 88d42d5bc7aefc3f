mod signed_token_verifier_test;
mod text_sanitizer_test;
