//! Folding logged sessions into display groups

mod config;
mod error;
mod fold;
mod group;
mod overview;
mod repository;
mod service;
mod types;

pub use config::DisplayConfig;
pub use error::{DisplayError, Result};
pub use fold::fold_session_into_groups;
pub use overview::{multi_session_overview, single_group_overview};
pub use repository::{EvaluationsRepository, SessionsRepository, TestListsRepository};
pub use service::SessionDisplayService;
pub use types::{
    DisplayEvaluations, DisplayMetadataInfo, DisplayableSessionGroup, EvaluationCriteriaInfo,
    EvaluationResultInfo, GroupKind, SessionDisplayInfo, SessionEntryGroup, TestListInfo,
    TestListInfoWithSelection,
};
