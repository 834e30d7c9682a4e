pub mod capture;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod goban;
pub mod history;
pub mod ko;
pub mod liberty;
pub mod stone;
pub mod validate;

/// A board coordinate as `(row, col)`, both zero-based.
pub type Point = (u8, u8);

pub use config::GameConfig;
pub use engine::Engine;
pub use error::GoError;
pub use event::{Event, Placed, Snapshot, Undone};
pub use goban::Goban;
pub use history::{History, MoveRecord};
pub use ko::Ko;
pub use stone::Stone;
