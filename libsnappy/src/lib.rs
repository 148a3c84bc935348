//! snappy de/compression interface
//!
//! Only the snappy *block* format (a varint length header followed by a
//! single compressed block) is exposed here; the framed stream format is a
//! different container and not part of this crate.
pub use snap;

pub mod raw;
