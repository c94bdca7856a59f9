//! Trait definitions for the Placard design relay.

mod driver;

pub use driver::PlacardDriver;
