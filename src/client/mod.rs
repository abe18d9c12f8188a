//! Client-side API for talking to a running huginnd.

mod service_client;

pub use service_client::ServiceClient;
