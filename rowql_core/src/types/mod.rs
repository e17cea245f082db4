pub mod result;
pub mod row;
pub mod value;

pub use result::ResultSet;
pub use row::Row;
pub use value::Value;
