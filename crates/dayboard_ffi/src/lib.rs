//! Mobile-facing bindings for Dayboard core.

pub mod api;
