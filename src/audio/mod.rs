pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod playback;
pub mod progress;
pub mod queue;
pub mod state;
pub mod system;
pub mod traits;
pub mod util;
