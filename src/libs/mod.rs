//! Core library modules for tempoggl.
//!
//! - **Records**: `worklog`, `timestamp`
//! - **Sync pipeline**: `normalize` → `reconcile` → `entry`, sequenced by `sync`
//! - **Infrastructure**: `config`, `data_storage`, `logging`, `messages`
//! - **Presentation**: `view`, `formatter`

pub mod config;
pub mod data_storage;
pub mod entry;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod normalize;
pub mod reconcile;
pub mod sync;
pub mod timestamp;
pub mod view;
pub mod worklog;
