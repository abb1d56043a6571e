mod fish;
pub use fish::*;

#[cfg(feature = "cli")]
mod human;
#[cfg(feature = "cli")]
pub use human::*;
