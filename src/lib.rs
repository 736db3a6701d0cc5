pub mod app;
pub mod error;
pub mod export;
pub mod groups;
pub mod logging;
pub mod materials;
pub mod objects;

pub use error::{Error, Result};

pub const WINDOW_TITLE: &str = "SED Auto Materials";
pub const WINDOW_WIDTH: u32 = 640;
pub const WINDOW_HEIGHT: u32 = 250;
