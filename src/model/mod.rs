pub mod activity;
pub mod agreement;
pub mod common;
pub mod course;
pub mod deadline;
pub mod document;
pub mod institution;
pub mod plan;
pub mod target_school;
pub mod user;
pub mod user_context;

pub use activity::*;
pub use agreement::*;
pub use common::*;
pub use course::*;
pub use deadline::*;
pub use document::*;
pub use institution::*;
pub use plan::*;
pub use target_school::*;
pub use user::*;
pub use user_context::*;
