//! HTTP layer: transport seam, response classification, and `NeosHttp`.

pub mod client;
pub mod response;
pub mod transport;

#[cfg(feature = "http")]
pub mod reqwest_transport;

pub use client::{GatePolicy, NeosHttp};
pub use response::{classify, Payload};
pub use transport::{HttpRequest, HttpResponse, Method, RequestBody, Transport};

#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;
