pub mod browser;
pub mod color;

pub use browser::open_browser;
pub use color::health_status_color;
