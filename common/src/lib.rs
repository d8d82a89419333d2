mod game;

pub mod api;

pub use api::*;
pub use game::*;
