pub mod execute;
pub mod format;

pub use execute::execute_query;
pub use execute::{aggregate, coerce, condition, join, project};
pub use format::format_result;
