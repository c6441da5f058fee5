pub mod config;
pub mod controller;
pub mod errors;
pub mod model;
pub mod predict;
pub mod report;
pub mod storage;

pub use controller::{Outcome, RecordController};
pub use errors::{InputError, RecordError};
pub use model::{Faculty, RecordForm, StudentRecord, Subject};
pub use predict::predict;
pub use storage::Store;
