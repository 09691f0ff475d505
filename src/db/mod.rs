pub mod pool;
pub mod queries;
pub mod schema;
