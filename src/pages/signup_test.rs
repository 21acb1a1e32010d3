use super::*;
use crate::net::types::User;

fn response(new_hospital: bool) -> AuthResponse {
    AuthResponse {
        access_token: Some("abc".to_owned()),
        user: Some(User { email: "a@b.com".to_owned(), hospital_name: Some("City Hospital".to_owned()) }),
        new_hospital,
    }
}

#[test]
fn new_hospital_notice_redirects_home() {
    let notice = signup_notice(&Ok(response(true)));
    assert_eq!(notice.kind, NoticeKind::Created);
    assert_eq!(notice.text, "Hospital \"City Hospital\" registered successfully!");
    assert_eq!(notice.redirect, Some(("/", 1800)));
}

#[test]
fn existing_hospital_notice_welcomes_user() {
    let notice = signup_notice(&Ok(response(false)));
    assert_eq!(notice.kind, NoticeKind::Joined);
    assert!(notice.text.contains("existing hospital: \"City Hospital\""));
    assert_eq!(notice.redirect, Some(("/", 1800)));
}

#[test]
fn duplicate_email_warns_and_redirects_to_login() {
    let err = ApiError::Http { status: 400, body: r#"{"detail":"Email already registered"}"#.to_owned() };
    let notice = signup_notice(&Err(err));
    assert_eq!(notice.kind, NoticeKind::Warning);
    assert_eq!(notice.text, "This email is already registered. Please log in instead.");
    assert_eq!(notice.redirect, Some(("/login", 2000)));
}

#[test]
fn other_failures_show_generic_error_without_redirect() {
    let notice = signup_notice(&Err(ApiError::Network("offline".to_owned())));
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.text, "Signup failed. Please try again.");
    assert_eq!(notice.redirect, None);
}
