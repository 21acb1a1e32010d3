//! Patients page model: modal mode, call-history selection, and the
//! add/edit form draft.

#[cfg(test)]
#[path = "patients_test.rs"]
mod patients_test;

use crate::net::types::{NewPatient, Patient, PatientType, PatientUpdate};

/// Which patient modal, if any, is open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Closed,
    Add,
    Edit(Patient),
}

/// UI state for the patients page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatientsState {
    pub modal: ModalMode,
    /// Patient whose call history is shown.
    pub history_for: Option<Patient>,
    /// Patient with a dial request in flight.
    pub dialing: Option<i64>,
    /// Last action result shown above the list.
    pub notice: Option<String>,
}

/// Editable draft bound to the add/edit modal inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientForm {
    pub name: String,
    pub phone: String,
    pub age: String,
    pub language: String,
    pub patient_type: PatientType,
    pub questions: Vec<String>,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone: String::new(),
            age: String::new(),
            language: "english".to_owned(),
            patient_type: PatientType::Opd,
            questions: Vec::new(),
        }
    }
}

impl PatientForm {
    /// Draft pre-filled from an existing patient.
    pub fn from_patient(patient: &Patient) -> Self {
        let language = if patient.language.is_empty() { "english".to_owned() } else { patient.language.to_lowercase() };
        Self {
            name: patient.name.clone(),
            phone: patient.phone.clone(),
            age: patient.age.map(|a| a.to_string()).unwrap_or_default(),
            language,
            patient_type: patient.patient_type,
            questions: patient.custom_questions.as_slice().to_vec(),
        }
    }

    fn parsed_age(&self) -> Result<u32, &'static str> {
        self.age.trim().parse::<u32>().map_err(|_| "Please enter a valid age.")
    }

    /// Body for `POST /patients`.
    ///
    /// # Errors
    ///
    /// Returns a message when the age field is not a whole number.
    pub fn to_new_patient(&self) -> Result<NewPatient, &'static str> {
        Ok(NewPatient {
            name: self.name.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            age: self.parsed_age()?,
            language: self.language.to_lowercase(),
            patient_type: self.patient_type,
        })
    }

    /// Body for `PUT /patients/{id}`.
    ///
    /// # Errors
    ///
    /// Returns a message when the age field is not a whole number.
    pub fn to_update(&self) -> Result<PatientUpdate, &'static str> {
        let new = self.to_new_patient()?;
        Ok(PatientUpdate {
            name: new.name,
            phone: new.phone,
            age: new.age,
            language: new.language,
            patient_type: new.patient_type,
        })
    }
}
