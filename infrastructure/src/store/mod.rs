//! Answer persistence adapters

mod jsonl_store;

pub use jsonl_store::JsonlAnswerStore;
