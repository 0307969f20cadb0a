mod dates;
mod message;
mod money;
mod participant;
mod poll;
mod summary;

pub use dates::*;
pub use message::*;
pub use money::*;
pub use participant::*;
pub use poll::*;
pub use summary::*;
