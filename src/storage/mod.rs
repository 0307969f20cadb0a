mod seed;
mod store;

pub use store::*;
