//! Survey ("tell us about your vibe") form state and reducer.

use serde::{Deserialize, Serialize};

use crate::badge::badge_name;
use crate::form::{Phase, SubmitOutcome};
use crate::record::SurveyResponse;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully. You're awesome!";
pub const REJECTED_MESSAGE: &str = "Failed to submit. Please try again.";
pub const TRANSPORT_MESSAGE: &str = "Something went wrong. Please try again.";

/// Enumerated personality answers offered by the select.
pub const PERSONALITIES: [&str; 4] = ["rage", "patience", "chaotic", "chill"];

/// Enumerated team-spirit answers offered by the select.
pub const TEAM_SPIRITS: [&str; 3] = ["team", "solo", "depends"];

/// One editable survey field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyField {
    Email,
    Personality,
    Superpower,
    TeamSpirit,
    Snack,
    Meme,
    Mascot,
    Song,
    DeadlineReaction,
}

/// Events the survey reducer understands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyEvent {
    /// A field changed value.
    Set(SurveyField, String),
    /// The form was submitted; carries the pre-drawn badge image path so
    /// the reducer stays deterministic.
    Submit { badge_path: String },
    /// The endpoint round-trip finished.
    Completed(SubmitOutcome),
    /// The badge overlay was dismissed.
    DismissBadge,
}

/// Full survey form state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurveyForm {
    pub email: String,
    pub personality: String,
    pub superpower: String,
    pub team_spirit: String,
    pub snack: String,
    pub meme: String,
    pub mascot: String,
    pub song: String,
    pub deadline_reaction: String,
    pub phase: Phase,
    /// Badge image path drawn at submit time; shown only after success.
    pub badge_path: Option<String>,
    /// Status copy currently shown under the form, if any.
    pub message: Option<&'static str>,
}

impl SurveyForm {
    /// Apply one event, producing the next state.
    pub fn apply(mut self, event: SurveyEvent) -> Self {
        match event {
            SurveyEvent::Set(field, value) => {
                if self.phase.is_terminal() {
                    self.phase = Phase::Idle;
                    self.message = None;
                }
                *self.field_mut(field) = value;
                self
            }
            SurveyEvent::Submit { badge_path } => {
                self.phase = Phase::Submitting;
                self.badge_path = Some(badge_path);
                self.message = None;
                self
            }
            SurveyEvent::Completed(outcome) => self.complete(outcome),
            SurveyEvent::DismissBadge => {
                self.badge_path = None;
                self
            }
        }
    }

    /// Build the wire payload for the current field values and the badge
    /// drawn for this submission.
    pub fn payload(&self) -> SurveyResponse {
        let badge = self
            .badge_path
            .as_deref()
            .map(badge_name)
            .unwrap_or_default();
        SurveyResponse {
            email: self.email.clone(),
            personality: self.personality.clone(),
            superpower: self.superpower.clone(),
            team_spirit: self.team_spirit.clone(),
            snack: self.snack.clone(),
            meme: self.meme.clone(),
            mascot: self.mascot.clone(),
            song: self.song.clone(),
            deadline_reaction: self.deadline_reaction.clone(),
            badge: badge.to_string(),
        }
    }

    fn complete(mut self, outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Accepted => {
                self.phase = Phase::Success;
                self.message = Some(SUCCESS_MESSAGE);
                self.reset_fields();
            }
            SubmitOutcome::Rejected => {
                self.phase = Phase::Failure;
                self.message = Some(REJECTED_MESSAGE);
                self.badge_path = None;
            }
            SubmitOutcome::TransportFailed => {
                self.phase = Phase::Failure;
                self.message = Some(TRANSPORT_MESSAGE);
                self.badge_path = None;
            }
        }
        self
    }

    fn reset_fields(&mut self) {
        self.email.clear();
        self.personality.clear();
        self.superpower.clear();
        self.team_spirit.clear();
        self.snack.clear();
        self.meme.clear();
        self.mascot.clear();
        self.song.clear();
        self.deadline_reaction.clear();
    }

    fn field_mut(&mut self, field: SurveyField) -> &mut String {
        match field {
            SurveyField::Email => &mut self.email,
            SurveyField::Personality => &mut self.personality,
            SurveyField::Superpower => &mut self.superpower,
            SurveyField::TeamSpirit => &mut self.team_spirit,
            SurveyField::Snack => &mut self.snack,
            SurveyField::Meme => &mut self.meme,
            SurveyField::Mascot => &mut self.mascot,
            SurveyField::Song => &mut self.song,
            SurveyField::DeadlineReaction => &mut self.deadline_reaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SurveyForm {
        SurveyForm::default()
            .apply(SurveyEvent::Set(SurveyField::Email, "a@b.c".into()))
            .apply(SurveyEvent::Set(SurveyField::Personality, "chill".into()))
            .apply(SurveyEvent::Set(SurveyField::Snack, "popcorn".into()))
    }

    #[test]
    fn set_field_updates_value() {
        let form = SurveyForm::default().apply(SurveyEvent::Set(
            SurveyField::Superpower,
            "sarcasm".into(),
        ));
        assert_eq!(form.superpower, "sarcasm");
        assert_eq!(form.phase, Phase::Idle);
    }

    #[test]
    fn submit_enters_submitting_with_badge() {
        let form = filled_form().apply(SurveyEvent::Submit {
            badge_path: "/badges/cyan-badge.png".into(),
        });
        assert_eq!(form.phase, Phase::Submitting);
        assert_eq!(form.badge_path.as_deref(), Some("/badges/cyan-badge.png"));
    }

    #[test]
    fn payload_carries_derived_badge_name() {
        let form = filled_form().apply(SurveyEvent::Submit {
            badge_path: "/badges/cyan-badge.png".into(),
        });
        let payload = form.payload();
        assert_eq!(payload.badge, "cyan");
        assert_eq!(payload.email, "a@b.c");
        assert_eq!(payload.snack, "popcorn");
    }

    #[test]
    fn success_resets_fields_and_keeps_badge() {
        let form = filled_form()
            .apply(SurveyEvent::Submit {
                badge_path: "/badges/red-badge.png".into(),
            })
            .apply(SurveyEvent::Completed(SubmitOutcome::Accepted));
        assert_eq!(form.phase, Phase::Success);
        assert_eq!(form.email, "");
        assert_eq!(form.personality, "");
        assert_eq!(form.snack, "");
        assert_eq!(form.badge_path.as_deref(), Some("/badges/red-badge.png"));
        assert_eq!(form.message, Some(SUCCESS_MESSAGE));
    }

    #[test]
    fn rejection_keeps_fields_and_clears_badge() {
        let form = filled_form()
            .apply(SurveyEvent::Submit {
                badge_path: "/badges/red-badge.png".into(),
            })
            .apply(SurveyEvent::Completed(SubmitOutcome::Rejected));
        assert_eq!(form.phase, Phase::Failure);
        assert_eq!(form.email, "a@b.c");
        assert!(form.badge_path.is_none());
        assert_eq!(form.message, Some(REJECTED_MESSAGE));
    }

    #[test]
    fn transport_failure_shows_distinct_copy() {
        let form = filled_form()
            .apply(SurveyEvent::Submit {
                badge_path: "/badges/red-badge.png".into(),
            })
            .apply(SurveyEvent::Completed(SubmitOutcome::TransportFailed));
        assert_eq!(form.message, Some(TRANSPORT_MESSAGE));
        assert_eq!(form.email, "a@b.c");
    }

    #[test]
    fn next_interaction_returns_to_idle() {
        let form = filled_form()
            .apply(SurveyEvent::Submit {
                badge_path: "/badges/red-badge.png".into(),
            })
            .apply(SurveyEvent::Completed(SubmitOutcome::Accepted))
            .apply(SurveyEvent::Set(SurveyField::Email, "x@y.z".into()));
        assert_eq!(form.phase, Phase::Idle);
        assert!(form.message.is_none());
        assert_eq!(form.email, "x@y.z");
    }

    #[test]
    fn dismiss_badge_clears_overlay() {
        let form = filled_form()
            .apply(SurveyEvent::Submit {
                badge_path: "/badges/pink-badge.png".into(),
            })
            .apply(SurveyEvent::Completed(SubmitOutcome::Accepted))
            .apply(SurveyEvent::DismissBadge);
        assert!(form.badge_path.is_none());
        // Dismissing the overlay is not a field interaction.
        assert_eq!(form.phase, Phase::Success);
    }
}
