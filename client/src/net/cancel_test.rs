use super::*;

#[test]
fn new_token_is_live() {
    assert!(!CancelToken::new().is_cancelled());
}

#[test]
fn cancel_is_shared_between_clones() {
    let token = CancelToken::new();
    let clone = token.clone();
    token.cancel();
    assert!(clone.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let token = CancelToken::new();
    token.cancel();
    token.cancel();
    assert!(token.is_cancelled());
}
