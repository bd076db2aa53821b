pub mod config;
pub mod state;

pub use config::ProviderConfig;
pub use state::{FieldValue, ResourceState};
