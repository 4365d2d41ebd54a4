mod client;
pub mod config;
mod errors;
mod transport;
pub mod types;
pub use self::client::Client;
pub use self::config::ClientConfig;
pub use self::errors::{Error, TransportError};
pub use self::transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use self::types::Pet;
