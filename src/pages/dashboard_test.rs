use super::*;

#[test]
fn hospital_label_uses_stored_name() {
    let user = User { email: "a@b.com".to_owned(), hospital_name: Some("City Hospital".to_owned()) };
    assert_eq!(hospital_label(&user), "City Hospital");
}

#[test]
fn hospital_label_falls_back_to_dash() {
    let missing = User { email: "a@b.com".to_owned(), hospital_name: None };
    let blank = User { email: "a@b.com".to_owned(), hospital_name: Some("  ".to_owned()) };
    assert_eq!(hospital_label(&missing), "—");
    assert_eq!(hospital_label(&blank), "—");
}
