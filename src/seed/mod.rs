// src/seed/mod.rs

pub mod command;
pub mod fixtures;
pub mod seeder;
pub mod transport;

pub use command::{TaskCommand, TaskGroup, UserCommand};
pub use seeder::{SeedReport, Seeder};
pub use transport::{HttpTransport, Route, Transport};
