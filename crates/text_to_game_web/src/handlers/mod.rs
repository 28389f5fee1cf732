pub mod game;
pub mod pages;

pub use game::generate_game;
pub use pages::home;
