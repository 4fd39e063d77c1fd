pub mod naming;
pub mod report;

pub use naming::{BasicNamer, ColorNamer};
pub use report::{ChannelSummary, ColorReport};
