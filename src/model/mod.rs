pub mod catalog;
pub mod config;
pub mod draft;
pub mod favorites;
pub mod navigation;
pub mod screen;

pub use catalog::*;
pub use config::*;
pub use draft::*;
pub use favorites::*;
pub use navigation::*;
pub use screen::*;
