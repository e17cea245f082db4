pub mod command;
#[allow(clippy::module_inception)]
pub mod parser;

pub use command::QueryDescriptor;
pub use parser::parse;
