pub mod config;
pub mod configs;
pub mod container;
pub mod database;
pub mod error;
pub mod startup;

pub use config::HostConfig;
pub use container::Container;
pub use error::HostError;
pub use startup::Startup;
