//! Pure form-state reducers for the two visitor-facing forms.
//!
//! Each form is an explicit, serialisable state struct plus a reducer
//! mapping (state, event) → new state, so the same logic drives any UI or
//! CLI front end. Randomness (the badge draw) stays outside the reducer:
//! the submit event carries the already-drawn badge path.

pub mod registration;
pub mod survey;

pub use registration::{RegistrationEvent, RegistrationField, RegistrationForm};
pub use survey::{SurveyEvent, SurveyField, SurveyForm};

use serde::{Deserialize, Serialize};

/// Submission lifecycle shared by both forms.
///
/// `Idle → Submitting → {Success, Failure}`; the terminal states return to
/// `Idle` on the next field interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failure,
}

impl Phase {
    /// Whether a field interaction should fold this phase back to `Idle`.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Success | Phase::Failure)
    }
}

/// How a submission round-trip ended, as seen by the form.
///
/// The endpoint itself never differentiates failures, but the form shows
/// distinct copy for a rejected response versus a transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// 2xx response from the endpoint.
    Accepted,
    /// Non-success HTTP status.
    Rejected,
    /// The request never completed (network/transport failure).
    TransportFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_phases() {
        assert!(!Phase::Idle.is_terminal());
        assert!(!Phase::Submitting.is_terminal());
        assert!(Phase::Success.is_terminal());
        assert!(Phase::Failure.is_terminal());
    }
}
