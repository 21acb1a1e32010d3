use super::*;
use crate::net::types::CustomQuestions;

fn stored_patient() -> Patient {
    Patient {
        id: 12,
        name: "Asha Rao".to_owned(),
        phone: "+919876543210".to_owned(),
        age: Some(61),
        language: "Hindi".to_owned(),
        patient_type: PatientType::Discharged,
        custom_questions: CustomQuestions(vec!["Any fever?".to_owned()]),
    }
}

#[test]
fn patients_state_defaults_closed() {
    let state = PatientsState::default();
    assert_eq!(state.modal, ModalMode::Closed);
    assert!(state.history_for.is_none());
    assert!(state.dialing.is_none());
}

#[test]
fn default_form_uses_english_opd() {
    let form = PatientForm::default();
    assert_eq!(form.language, "english");
    assert_eq!(form.patient_type, PatientType::Opd);
    assert!(form.questions.is_empty());
}

#[test]
fn form_from_patient_lowercases_language_and_copies_questions() {
    let form = PatientForm::from_patient(&stored_patient());
    assert_eq!(form.age, "61");
    assert_eq!(form.language, "hindi");
    assert_eq!(form.patient_type, PatientType::Discharged);
    assert_eq!(form.questions, vec!["Any fever?"]);
}

#[test]
fn form_from_patient_without_language_defaults_english() {
    let mut patient = stored_patient();
    patient.language = String::new();
    patient.age = None;
    let form = PatientForm::from_patient(&patient);
    assert_eq!(form.language, "english");
    assert_eq!(form.age, "");
}

#[test]
fn to_new_patient_trims_and_parses_age() {
    let form = PatientForm {
        name: "  Ravi ".to_owned(),
        phone: " +911234567890".to_owned(),
        age: " 45 ".to_owned(),
        language: "Tamil".to_owned(),
        ..PatientForm::default()
    };
    let new = form.to_new_patient().unwrap();
    assert_eq!(new.name, "Ravi");
    assert_eq!(new.phone, "+911234567890");
    assert_eq!(new.age, 45);
    assert_eq!(new.language, "tamil");
}

#[test]
fn non_numeric_age_is_rejected() {
    let form = PatientForm { age: "abc".to_owned(), ..PatientForm::default() };
    assert_eq!(form.to_update(), Err("Please enter a valid age."));
}
