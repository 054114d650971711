pub mod adapters;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod server;

pub use client::{Dashboard, DashboardClient, ModuleState, Panel};
pub use config::InfoHubConfig;
pub use error::{InfoHubError, Result};
pub use server::InfoHubServer;
