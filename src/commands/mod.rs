pub mod diary;
pub mod serve;

// Re-export command functions for convenience
pub use diary::diary;
pub use serve::serve;
