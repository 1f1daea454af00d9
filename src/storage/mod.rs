//! Storage layer for the draft board
//!
//! The board lives entirely in memory for the session:
//! - `models`: Data structures
//! - `schema`: Column recognition and CSV row decoding
//! - `pool`: The player pool, its ranking views and CSV export

pub mod models;
pub mod pool;
pub mod schema;


// Re-export the main types for easy access
pub use models::*;
pub use pool::PlayerPool;
pub use schema::Column;
