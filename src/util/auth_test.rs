use super::*;

#[test]
fn missing_token_redirects_protected_paths_to_login() {
    for path in ["/", "/dashboard", "/patients/4", "/anything"] {
        assert_eq!(evaluate(false, path), GuardState::Redirecting("/login"), "path {path}");
    }
}

#[test]
fn present_token_redirects_auth_pages_home() {
    for path in ["/login", "/signup", "/login/"] {
        assert_eq!(evaluate(true, path), GuardState::Redirecting("/"), "path {path}");
    }
}

#[test]
fn auth_pages_render_without_token() {
    assert_eq!(evaluate(false, "/login"), GuardState::Authorized);
    assert_eq!(evaluate(false, "/signup"), GuardState::Authorized);
}

#[test]
fn protected_paths_render_with_token() {
    assert_eq!(evaluate(true, "/"), GuardState::Authorized);
    assert_eq!(evaluate(true, "/dashboard"), GuardState::Authorized);
}

#[test]
fn is_auth_page_is_exact() {
    assert!(is_auth_page("/login"));
    assert!(is_auth_page("/signup/"));
    assert!(!is_auth_page("/"));
    assert!(!is_auth_page("/login-help"));
    assert!(!is_auth_page("/signup/extra"));
}

#[test]
fn guard_starts_pending() {
    assert_eq!(GuardState::default(), GuardState::Pending);
}
