pub mod bulk_import;
pub mod dashboard;
pub mod prerequisites;

pub use bulk_import::*;
pub use dashboard::*;
pub use prerequisites::*;
