//! Open Day registration form state and reducer.
//!
//! Carries the survey form's phase machine plus three extras: a
//! multi-valued interest selection behind a dropdown that closes on
//! outside clicks, and "Other" free-text overrides for gender and
//! occupation.

use serde::{Deserialize, Serialize};

use crate::form::{Phase, SubmitOutcome};
use crate::record::RegistrationRecord;

pub const SUBMITTING_STATUS: &str = "Submitting...";
pub const SUCCESS_STATUS: &str = "Registration successful!";
pub const REJECTED_STATUS: &str = "Failed to register.";
pub const TRANSPORT_STATUS: &str = "An error occurred.";

/// Gender options offered by the select.
pub const GENDERS: [&str; 3] = ["Male", "Female", "Other"];

/// Occupation options offered by the select.
pub const OCCUPATIONS: [&str; 11] = [
    "Student",
    "Faculty/Professor",
    "Researcher",
    "Industry Professional",
    "Startup Founder/Entrepreneur",
    "Government Official",
    "Investor/Venture Capitalist",
    "Parent/Guardian",
    "School Representative (Principal/Teacher)",
    "Media/Journalist",
    "Other",
];

/// Interest tags offered by the dropdown checkboxes.
pub const INTERESTS: [&str; 5] = [
    "AI & Machine Learning",
    "Robotics & Automation",
    "Web & Mobile Development",
    "IoT & Hardware",
    "Cybersecurity",
];

/// Placeholder shown before a gender is picked.
pub const GENDER_PLACEHOLDER: &str = "Select your Gender";

/// Placeholder shown before an occupation is picked.
pub const OCCUPATION_PLACEHOLDER: &str = "Your Occupation";

/// One editable registration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationField {
    Name,
    Email,
    Age,
    Gender,
    OtherGender,
    PhoneNumber,
    State,
    City,
    Country,
    Occupation,
    OtherOccupation,
}

/// Events the registration reducer understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationEvent {
    /// A field changed value.
    Set(RegistrationField, String),
    /// An interest checkbox was toggled.
    ToggleInterest(String),
    /// The dropdown button was clicked.
    ToggleDropdown,
    /// A click landed outside the dropdown's bounding region.
    ClickOutside,
    /// A click landed inside the dropdown.
    ClickInside,
    /// The form was submitted.
    Submit,
    /// The endpoint round-trip finished.
    Completed(SubmitOutcome),
}

/// Full registration form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    /// Free-text gender override. Retained even after the select moves off
    /// "Other"; it is still transmitted but no longer shown. Carried over
    /// from the live site unchanged.
    pub other_gender: String,
    pub phone_number: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub occupation: String,
    /// Free-text occupation override, same retention rule as `other_gender`.
    pub other_occupation: String,
    /// Selected interest tags, in selection order, no duplicates.
    pub interest: Vec<String>,
    pub dropdown_open: bool,
    pub phase: Phase,
    /// Outcome of the most recent completed submission, for failure copy.
    pub last_outcome: Option<SubmitOutcome>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            age: String::new(),
            gender: GENDER_PLACEHOLDER.to_string(),
            other_gender: String::new(),
            phone_number: String::new(),
            state: String::new(),
            city: String::new(),
            country: String::new(),
            occupation: OCCUPATION_PLACEHOLDER.to_string(),
            other_occupation: String::new(),
            interest: Vec::new(),
            dropdown_open: false,
            phase: Phase::Idle,
            last_outcome: None,
        }
    }
}

impl RegistrationForm {
    /// Apply one event, producing the next state.
    pub fn apply(mut self, event: RegistrationEvent) -> Self {
        match event {
            RegistrationEvent::Set(field, value) => {
                if self.phase.is_terminal() {
                    self.phase = Phase::Idle;
                }
                *self.field_mut(field) = value;
                self
            }
            RegistrationEvent::ToggleInterest(tag) => {
                if self.phase.is_terminal() {
                    self.phase = Phase::Idle;
                }
                if let Some(pos) = self.interest.iter().position(|t| *t == tag) {
                    self.interest.remove(pos);
                } else {
                    self.interest.push(tag);
                }
                self
            }
            RegistrationEvent::ToggleDropdown => {
                self.dropdown_open = !self.dropdown_open;
                self
            }
            RegistrationEvent::ClickOutside => {
                self.dropdown_open = false;
                self
            }
            RegistrationEvent::ClickInside => self,
            RegistrationEvent::Submit => {
                self.phase = Phase::Submitting;
                self
            }
            RegistrationEvent::Completed(outcome) => self.complete(outcome),
        }
    }

    /// Whether the "please specify" gender input is visible.
    pub fn shows_other_gender(&self) -> bool {
        self.gender == "Other"
    }

    /// Whether the "specify your occupation" input is visible.
    pub fn shows_other_occupation(&self) -> bool {
        self.occupation == "Other"
    }

    /// Selected interests joined ", " in selection order.
    pub fn joined_interest(&self) -> String {
        self.interest.join(", ")
    }

    /// Status copy for the current phase, if any.
    pub fn status(&self) -> Option<&'static str> {
        match self.phase {
            Phase::Idle => None,
            Phase::Submitting => Some(SUBMITTING_STATUS),
            Phase::Success => Some(SUCCESS_STATUS),
            Phase::Failure => match self.last_outcome {
                Some(SubmitOutcome::TransportFailed) => Some(TRANSPORT_STATUS),
                _ => Some(REJECTED_STATUS),
            },
        }
    }

    /// Build the wire payload, with the interest set pre-joined.
    pub fn payload(&self) -> RegistrationRecord {
        RegistrationRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            age: self.age.clone(),
            gender: self.gender.clone(),
            other_gender: self.other_gender.clone(),
            phone_number: self.phone_number.clone(),
            state: self.state.clone(),
            city: self.city.clone(),
            country: self.country.clone(),
            occupation: self.occupation.clone(),
            other_occupation: self.other_occupation.clone(),
            interest: self.joined_interest(),
        }
    }

    fn complete(mut self, outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Accepted => {
                let dropdown_open = self.dropdown_open;
                self = Self::default();
                self.dropdown_open = dropdown_open;
                self.phase = Phase::Success;
            }
            SubmitOutcome::Rejected | SubmitOutcome::TransportFailed => {
                self.phase = Phase::Failure;
            }
        }
        self.last_outcome = Some(outcome);
        self
    }

    fn field_mut(&mut self, field: RegistrationField) -> &mut String {
        match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Age => &mut self.age,
            RegistrationField::Gender => &mut self.gender,
            RegistrationField::OtherGender => &mut self.other_gender,
            RegistrationField::PhoneNumber => &mut self.phone_number,
            RegistrationField::State => &mut self.state,
            RegistrationField::City => &mut self.city,
            RegistrationField::Country => &mut self.country,
            RegistrationField::Occupation => &mut self.occupation,
            RegistrationField::OtherOccupation => &mut self.other_occupation,
        }
    }
}
