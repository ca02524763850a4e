//! Record set loading and snapshot storage

pub mod loader;
pub mod store;

pub use loader::{load_dataset, load_games, load_players, read_games, read_players};
pub use store::{RecordStore, SearchResult};
