//! Submission records shared between the form reducers and the endpoints.
//!
//! Both records travel as camelCase JSON and are persisted as one appended
//! spreadsheet row each. Missing JSON fields deserialise to empty strings;
//! the endpoints perform no validation beyond that.

use serde::{Deserialize, Serialize};

/// One "tell us about your vibe" survey submission.
///
/// Appended to the survey tab in [`SurveyResponse::COLUMNS`] order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SurveyResponse {
    pub email: String,
    pub personality: String,
    pub superpower: String,
    pub team_spirit: String,
    pub snack: String,
    pub meme: String,
    pub mascot: String,
    pub song: String,
    pub deadline_reaction: String,
    /// Badge color name derived client-side from the drawn badge image path.
    pub badge: String,
}

impl SurveyResponse {
    /// Sheet header names, in the column order rows are appended.
    pub const COLUMNS: [&'static str; 10] = [
        "Email",
        "Personality",
        "Superpower",
        "TeamSpirit",
        "Snack",
        "Meme",
        "Mascot",
        "Song",
        "DeadlineReaction",
        "Badge",
    ];

    /// Field values in [`Self::COLUMNS`] order.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.email.clone(),
            self.personality.clone(),
            self.superpower.clone(),
            self.team_spirit.clone(),
            self.snack.clone(),
            self.meme.clone(),
            self.mascot.clone(),
            self.song.clone(),
            self.deadline_reaction.clone(),
            self.badge.clone(),
        ]
    }
}

/// One Open Day registration submission.
///
/// `interest` arrives pre-joined (", "-separated tags in selection order).
/// `other_gender`/`other_occupation` are always transmitted, even when the
/// corresponding select is no longer on "Other".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub other_gender: String,
    pub phone_number: String,
    pub state: String,
    pub city: String,
    pub country: String,
    pub occupation: String,
    pub other_occupation: String,
    pub interest: String,
}

impl RegistrationRecord {
    /// Sheet header names, in the column order rows are appended.
    pub const COLUMNS: [&'static str; 12] = [
        "Name",
        "Email",
        "Age",
        "Gender",
        "OtherGender",
        "PhoneNumber",
        "State",
        "City",
        "Country",
        "Occupation",
        "OtherOccupation",
        "Interest",
    ];

    /// Field values in [`Self::COLUMNS`] order.
    pub fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.age.clone(),
            self.gender.clone(),
            self.other_gender.clone(),
            self.phone_number.clone(),
            self.state.clone(),
            self.city.clone(),
            self.country.clone(),
            self.occupation.clone(),
            self.other_occupation.clone(),
            self.interest.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn survey_json_field_names_are_camel_case() {
        let resp = SurveyResponse {
            team_spirit: "team".into(),
            deadline_reaction: "nap".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"teamSpirit\":\"team\""));
        assert!(json.contains("\"deadlineReaction\":\"nap\""));
    }

    #[test]
    fn survey_missing_fields_default_to_empty() {
        let resp: SurveyResponse =
            serde_json::from_str(r#"{"email": "a@b.c", "badge": "green"}"#).unwrap();
        assert_eq!(resp.email, "a@b.c");
        assert_eq!(resp.badge, "green");
        assert_eq!(resp.personality, "");
        assert_eq!(resp.song, "");
    }

    #[test]
    fn survey_row_follows_column_order() {
        let resp = SurveyResponse {
            email: "a@b.c".into(),
            personality: "chill".into(),
            superpower: "sarcasm".into(),
            team_spirit: "solo".into(),
            snack: "popcorn".into(),
            meme: "grumpy cat".into(),
            mascot: "sloth".into(),
            song: "lofi".into(),
            deadline_reaction: "nap".into(),
            badge: "cyan".into(),
        };
        let row = resp.row();
        assert_eq!(row.len(), SurveyResponse::COLUMNS.len());
        assert_eq!(row[0], "a@b.c");
        assert_eq!(row[3], "solo");
        assert_eq!(row[8], "nap");
        assert_eq!(row[9], "cyan");
    }

    #[test]
    fn registration_row_follows_column_order() {
        let rec = RegistrationRecord {
            name: "Asha".into(),
            email: "asha@example.org".into(),
            age: "21".into(),
            gender: "Female".into(),
            other_gender: String::new(),
            phone_number: "555-0101".into(),
            state: "Karnataka".into(),
            city: "Bengaluru".into(),
            country: "India".into(),
            occupation: "Student".into(),
            other_occupation: String::new(),
            interest: "Cybersecurity, IoT & Hardware".into(),
        };
        let row = rec.row();
        assert_eq!(row.len(), RegistrationRecord::COLUMNS.len());
        assert_eq!(row[0], "Asha");
        assert_eq!(row[3], "Female");
        assert_eq!(row[9], "Student");
        assert_eq!(row[11], "Cybersecurity, IoT & Hardware");
    }

    #[test]
    fn registration_accepts_any_json_shape() {
        let rec: RegistrationRecord = serde_json::from_str(r#"{"unknown": 42}"#).unwrap();
        assert_eq!(rec.name, "");
        assert_eq!(rec.interest, "");
    }
}
