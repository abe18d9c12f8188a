//! Wire contract for the `info.InfoService` API.
//!
//! The schema of record is `proto/info.proto`. The message codecs here are
//! hand-maintained on top of [`prost::encoding`] rather than build-time
//! generated: decoded messages must carry fields they do not recognize
//! through a re-encode byte-exactly (see [`unknown::UnknownFieldSet`]), and
//! derived codecs drop them. The client and server stubs follow the layout
//! `tonic` generates, so swapping back to generation later is mechanical.

mod info;
pub mod unknown;

pub use info::{GetInfoRequest, InfoResponse, info_service_client, info_service_server};
