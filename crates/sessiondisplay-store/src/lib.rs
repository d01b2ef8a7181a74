//! JSON Lines storage for logged sessions, evaluations and test lists

mod io;
mod paths;
mod store;

pub use io::{append_jsonl, atomic_write, read_jsonl};
pub use paths::{Paths, HOME_ENV};
pub use store::{JsonlStore, TestListSessionLink};
