//! Wire DTOs for the follow-up backend.
//!
//! DESIGN
//! ======
//! Response types are lenient: optional fields default, unknown fields are
//! ignored, and `custom_questions` accepts every shape the backend has stored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

pub use crate::state::session::User;

/// Patient cohort the follow-up call is tailored to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientType {
    #[default]
    Opd,
    Discharged,
}

impl PatientType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opd => "opd",
            Self::Discharged => "discharged",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Opd => "OPD",
            Self::Discharged => "Discharged",
        }
    }

    /// Parse a `<select>` value; anything unrecognized is OPD.
    pub fn from_form_value(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("discharged") { Self::Discharged } else { Self::Opd }
    }
}

/// Languages offered for the follow-up call, as `(value, label)` pairs.
pub const LANGUAGES: [(&str, &str); 6] = [
    ("english", "English"),
    ("hindi", "Hindi"),
    ("marathi", "Marathi"),
    ("tamil", "Tamil"),
    ("telugu", "Telugu"),
    ("spanish", "Spanish"),
];

/// Per-patient custom questions asked during the follow-up call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CustomQuestions(pub Vec<String>);

impl CustomQuestions {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for CustomQuestions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            List(Vec<String>),
            Text(String),
        }

        let parsed = match Option::<Raw>::deserialize(deserializer)? {
            None => Vec::new(),
            Some(Raw::List(items)) => items,
            Some(Raw::Text(text)) => crate::util::questions::parse_numbered(&text),
        };
        Ok(Self(parsed))
    }
}

/// A patient as listed by `GET /patients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub patient_type: PatientType,
    #[serde(default)]
    pub custom_questions: CustomQuestions,
}

/// Body of `POST /patients`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPatient {
    pub name: String,
    pub phone: String,
    pub age: u32,
    pub language: String,
    pub patient_type: PatientType,
}

/// Body of `PUT /patients/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientUpdate {
    pub name: String,
    pub phone: String,
    pub age: u32,
    pub language: String,
    pub patient_type: PatientType,
}

/// Body of `POST /patients/{id}/questions`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QuestionsPayload<'a> {
    pub questions: &'a [String],
}

/// Response of `/auth/signup` and `/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    /// Signup only: whether the hospital name created a new hospital.
    #[serde(default)]
    pub new_hospital: bool,
}

/// One entry of `GET /patients/{id}/calls`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallRecord {
    pub id: i64,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Response of `GET /calls/{id}`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CallDetail {
    pub id: i64,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Response of `POST /dial`; shape is backend-defined.
pub type DialResponse = serde_json::Value;
