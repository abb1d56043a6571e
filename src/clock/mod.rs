mod clock;
mod signal;
mod timer;

pub use clock::*;
pub use signal::*;
pub use timer::*;
