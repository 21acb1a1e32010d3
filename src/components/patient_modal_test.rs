use super::*;
use crate::net::mock::{MockTransport, client_with};
use crate::net::transport::Method;
use futures::executor::block_on;

fn draft(questions: &[&str]) -> PatientForm {
    PatientForm {
        name: "Asha Rao".to_owned(),
        phone: "+919876543210".to_owned(),
        age: "61".to_owned(),
        language: "Hindi".to_owned(),
        patient_type: PatientType::Discharged,
        questions: questions.iter().map(|q| (*q).to_owned()).collect(),
    }
}

const CREATED: &str = r#"{"id":21,"name":"Asha Rao","phone":"+919876543210","age":61,"language":"hindi"}"#;

#[test]
fn add_creates_patient_then_posts_non_blank_questions() {
    let transport = MockTransport::respond(201, CREATED);
    transport.push(200, "{}");
    let client = client_with(transport.clone(), Some("abc"));

    block_on(save_patient(&client, None, &draft(&["Any fever?", "  "]))).unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!((sent[0].method, sent[0].url.as_str()), (Method::Post, "http://127.0.0.1:8000/patients"));
    assert_eq!(sent[1].url, "http://127.0.0.1:8000/patients/21/questions");
    let body: serde_json::Value = serde_json::from_str(sent[1].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "questions": ["Any fever?"] }));
    assert_eq!(sent[1].header("Authorization"), Some("Bearer abc"));
}

#[test]
fn add_without_questions_skips_questions_call() {
    let transport = MockTransport::respond(201, CREATED);
    let client = client_with(transport.clone(), Some("abc"));

    block_on(save_patient(&client, None, &draft(&[" "]))).unwrap();

    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn add_surfaces_backend_error() {
    let transport = MockTransport::respond(400, "Phone already exists");
    let client = client_with(transport, Some("abc"));

    let err = block_on(save_patient(&client, None, &draft(&[]))).unwrap_err();

    assert_eq!(err, "API Error (400): Phone already exists");
}

#[test]
fn invalid_age_fails_before_any_request() {
    let transport = std::sync::Arc::new(MockTransport::default());
    let client = client_with(transport.clone(), Some("abc"));
    let mut bad = draft(&[]);
    bad.age = "sixty".to_owned();

    let err = block_on(save_patient(&client, Some(4), &bad)).unwrap_err();

    assert_eq!(err, "Please enter a valid age.");
    assert!(transport.sent().is_empty());
}

#[test]
fn edit_puts_patient_and_tolerates_questions_failure() {
    let transport = MockTransport::respond(200, CREATED);
    transport.push(500, "questions table locked");
    let client = client_with(transport.clone(), Some("abc"));

    block_on(save_patient(&client, Some(21), &draft(&[]))).unwrap();

    let sent = transport.sent();
    assert_eq!((sent[0].method, sent[0].url.as_str()), (Method::Put, "http://127.0.0.1:8000/patients/21"));
    let body: serde_json::Value = serde_json::from_str(sent[1].body.as_deref().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "questions": [] }));
}
