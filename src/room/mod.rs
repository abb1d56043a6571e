mod actor;
mod channel;
mod command;
mod event;
mod handle;
mod observer;
mod room;

pub use actor::*;
pub use channel::*;
pub use command::*;
pub use event::*;
pub use handle::*;
pub use observer::*;
pub use room::*;
