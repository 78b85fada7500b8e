//! Screening session subdomain
//!
//! A screening walks one respondent through the catalog, one question per
//! turn, and ends in exactly one triage verdict.
//!
//! - [`Answer`] / [`AnswerSet`] — the collected responses
//! - [`Session`] — the state of one conversation, owned by the controller
//! - [`SessionController`] — the state machine driving question order

mod answer;
mod controller;
mod session;

pub use answer::{Answer, AnswerSet, AnswerValue};
pub use controller::{SessionController, SubmitOutcome};
pub use session::{ScreeningState, Session};
