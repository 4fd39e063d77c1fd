pub mod config;
pub mod mixer;

pub use config::{AppConfig, OutputFormat};
pub use mixer::{parse_rgb_list, BitMixer, Channel, ChannelBits, BITS_PER_CHANNEL};
