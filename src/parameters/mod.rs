//! Parameter store and survey parameter block
//!
//! Ambient configuration layer: a bounded typed key-value store plus the
//! parameter block mapping store entries to the planner's settings
//! snapshots. The owning application registers defaults at startup, lets a
//! GCS or plan loader overwrite values, and converts to snapshots before
//! each rebuild.

pub mod error;
pub mod storage;
pub mod survey;

pub use error::ParameterError;
pub use storage::{ParamFlags, ParamValue, ParameterStore, MAX_PARAMS, PARAM_NAME_LEN};
pub use survey::SurveyParams;
