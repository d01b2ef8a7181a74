//! Logged session records and the value types they carry

mod calculator;
mod format;
mod prompt;
mod rows;
mod types;

pub use calculator::{calculate_costs, calculate_latency};
pub use format::{format_decimal_dollars, format_latency, format_thousands};
pub use prompt::{ChatMessage, PromptModel};
pub use rows::{try_map_rows_to_session, SessionEntryRow};
pub use types::{
    EvaluationCriteria, EvaluationPair, EvaluationResult, Evaluations, FunctionCall, Session,
    SessionEntry, TestList,
};
