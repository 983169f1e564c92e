//! GTFS-realtime decoding and the delay-overlay engine built on top of it.
//!
//! The wire schema is compiled from `protobuf/gtfs-realtime.proto` by
//! `build.rs`; [`parser`] turns a decoded [`pb::FeedMessage`] into the
//! plain records the rest of this crate works with, and [`overlay`]
//! applies those records to a static query's [`model::departure::Departure`]
//! rows.

pub mod overlay;
pub mod parser;

#[cfg(test)]
mod scenarios;

/// Generated protobuf types (`prost-build` output of
/// `protobuf/gtfs-realtime.proto`).
#[allow(clippy::all)]
pub mod pb {
    include!(concat!(env!("OUT_DIR"), "/protobuf/transit_realtime.rs"));
}
