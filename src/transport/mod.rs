pub mod http;

pub use http::ShimTransport;
