//! Seams where implementations are injected.

pub mod transport;

pub use transport::{ApiRequest, ApiResponse, HttpMethod, HttpTransport};
