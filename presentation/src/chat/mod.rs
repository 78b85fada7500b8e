//! Interactive chat screening

mod repl;

pub use repl::ScreeningRepl;
