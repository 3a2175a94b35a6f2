pub mod channel;
pub mod interface;

pub use channel::ArpProber;
