pub mod controllers;
pub mod error;
pub mod knowledge;
pub mod server;

pub use error::AppError;
pub use knowledge::KnowledgeBase;
pub use server::AppState;
