//! Production HTTP transport.

pub mod http;

pub use self::http::ReqwestTransport;
