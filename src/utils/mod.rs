pub mod logger;
pub mod path;
