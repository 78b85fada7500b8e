//! Screening question definitions
//!
//! - [`Question`] — one screening question with its answer type and weight
//! - [`QuestionCatalog`] — the ordered, immutable list of questions a
//!   screening walks through

mod catalog;
mod question;

pub use catalog::QuestionCatalog;
pub use question::{AnswerType, Question};
