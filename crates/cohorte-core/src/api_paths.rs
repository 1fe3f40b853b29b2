//! REST path conventions.
//!
//! Pure string functions, no HTTP client here. These define the routes of the
//! backend endpoints the form engine talks to, relative to the API base URL.

use crate::models::question::QuestionId;

pub const CUSTOM_QUESTIONS: &str = "custom-questions";

pub fn custom_questions(base_url: &str) -> String {
    format!("{}/{CUSTOM_QUESTIONS}", base_url.trim_end_matches('/'))
}

pub fn custom_question(base_url: &str, id: QuestionId) -> String {
    format!("{}/{id}", custom_questions(base_url))
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
