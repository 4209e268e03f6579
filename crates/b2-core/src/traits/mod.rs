//! Core traits.

mod transport;

pub use transport::{HttpRequest, HttpResponse, Method, Transport};
