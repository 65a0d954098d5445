pub mod config;
pub mod notify_bus;

pub use config::DeskConfig;
pub use notify_bus::NotificationBus;
