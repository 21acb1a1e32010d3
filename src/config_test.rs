use super::*;

#[test]
fn resolve_api_url_falls_back_to_local_backend() {
    assert_eq!(resolve_api_url(None), "http://127.0.0.1:8000");
    assert_eq!(resolve_api_url(Some("   ")), "http://127.0.0.1:8000");
}

#[test]
fn resolve_api_url_trims_trailing_slash() {
    assert_eq!(resolve_api_url(Some("https://api.example.com/")), "https://api.example.com");
}

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("http://h:8000", "/patients"), "http://h:8000/patients");
    assert_eq!(join_url("http://h:8000/", "/patients"), "http://h:8000/patients");
    assert_eq!(join_url("http://h:8000", "patients/3"), "http://h:8000/patients/3");
}

#[test]
fn unauthorized_route_is_signup() {
    assert_eq!(UNAUTHORIZED_ROUTE, "/signup");
}
