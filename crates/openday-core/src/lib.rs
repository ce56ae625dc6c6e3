pub mod badge;
pub mod form;
pub mod record;

pub use badge::{BADGE_IMAGES, badge_name, draw_badge};
pub use record::{RegistrationRecord, SurveyResponse};
