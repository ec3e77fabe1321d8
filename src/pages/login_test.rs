use super::validate_credentials;

// =============================================================
// Credential validation
// =============================================================

#[test]
fn accepts_plain_credentials() {
    assert_eq!(
        validate_credentials("ken", "pw"),
        Some(("ken".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn trims_the_username() {
    assert_eq!(
        validate_credentials("  ken ", "pw"),
        Some(("ken".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn keeps_the_password_verbatim() {
    assert_eq!(
        validate_credentials("ken", " p w "),
        Some(("ken".to_owned(), " p w ".to_owned()))
    );
}

#[test]
fn rejects_missing_username() {
    assert_eq!(validate_credentials("", "pw"), None);
    assert_eq!(validate_credentials("   ", "pw"), None);
}

#[test]
fn rejects_missing_password() {
    assert_eq!(validate_credentials("ken", ""), None);
}
