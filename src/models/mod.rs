//! Domain records shared by the seed and export pipelines.
//!
//! Records are plain values: they are linked to each other only by id and
//! never hold a reference to another record.

pub mod id;
pub mod instance;
pub mod task;
pub mod timestamp;
pub mod user;

pub use id::RecordId;
pub use instance::Instance;
pub use task::Task;
pub use user::User;
