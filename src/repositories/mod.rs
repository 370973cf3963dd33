pub mod directory;

pub use directory::{OutletDirectory, StaticDirectory};
