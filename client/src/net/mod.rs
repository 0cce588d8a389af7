//! Networking for the browser client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is a static JSON document served by the backend under
//! `/data`. `api` fetches and validates it; there is no other wire traffic.

pub mod api;
