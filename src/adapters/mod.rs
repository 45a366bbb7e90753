// Adapters layer: concrete implementations of the domain ports.

pub mod file;
pub mod postgres;
#[cfg(feature = "lambda")]
pub mod secrets;

pub use file::FileCredentials;
pub use postgres::{PgConnector, PgPublicationStore};
#[cfg(feature = "lambda")]
pub use secrets::SecretsManagerCredentials;
