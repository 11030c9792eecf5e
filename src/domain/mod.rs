//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: Typed values decoded from API responses
//! - `convert.rs`: `TryFrom` conversions for payloads that need dispatch
//! - `client.rs`: Sub-client with the slice's HTTP methods

pub mod cloud_var;
pub mod friend;
pub mod message;
pub mod record;
pub mod session;
pub mod user;
