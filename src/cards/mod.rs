pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod state;
pub use state::*;

pub mod symbol;
pub use symbol::*;
