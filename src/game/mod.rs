mod flip;
mod phase;
mod selection;
mod session;
mod snapshot;
mod summary;

pub use flip::*;
pub use phase::*;
pub use selection::*;
pub use session::*;
pub use snapshot::*;
pub use summary::*;
