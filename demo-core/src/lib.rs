pub mod config;
pub mod errors;
pub mod models;
pub mod response;
pub mod server;
pub mod store;
pub mod telemetry;

pub use config::*;
pub use errors::*;
pub use models::*;
pub use response::*;
pub use store::*;
