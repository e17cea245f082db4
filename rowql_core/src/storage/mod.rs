pub mod csv;
pub mod engine;
pub mod mem;
pub mod schema;

// Re-export main types for convenience
pub use self::csv::CsvLoader;
pub use engine::TableLoader;
pub use mem::MemLoader;
pub use schema::Table;
