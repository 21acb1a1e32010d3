use super::*;
use crate::net::types::{CustomQuestions, PatientType};

fn patient(age: Option<u32>, language: &str) -> Patient {
    Patient {
        id: 3,
        name: "Ravi Kumar".to_owned(),
        phone: "+911234567890".to_owned(),
        age,
        language: language.to_owned(),
        patient_type: PatientType::Opd,
        custom_questions: CustomQuestions::default(),
    }
}

#[test]
fn patient_details_joins_age_language_and_type() {
    assert_eq!(patient_details(&patient(Some(45), "tamil")), "45 yrs · tamil · OPD");
}

#[test]
fn patient_details_handles_missing_fields() {
    assert_eq!(patient_details(&patient(None, "")), "age n/a · english · OPD");
}

#[test]
fn dial_notice_reports_outcome() {
    let p = patient(Some(45), "tamil");
    assert_eq!(dial_notice(&p, Ok(())), "Call started for Ravi Kumar.");
    assert_eq!(
        dial_notice(&p, Err("API Error (502): dialer offline".to_owned())),
        "Could not start call for Ravi Kumar: API Error (502): dialer offline"
    );
}
