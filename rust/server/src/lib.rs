pub mod app;
pub mod error;
pub mod settings;

pub use app::router;
pub use settings::Settings;
