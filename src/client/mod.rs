pub mod dashboard;
pub mod implementation;
pub mod state;

pub use dashboard::Dashboard;
pub use implementation::DashboardClient;
pub use state::{ModuleState, Panel};
