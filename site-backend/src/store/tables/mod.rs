//! Store accessor modules - extends StoreClient with per-table reads
//!
//! Each module adds `impl StoreClient` blocks with accessors for one table.

mod events; // events
mod media;  // books, anime, gaming_achievements
mod posts;  // posts
mod talks;  // talks
mod videos; // videos
