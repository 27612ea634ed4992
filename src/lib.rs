//! Typed NDEF Connection Handover records
//!
//! Encodes and decodes the payloads of the well-known handover record types
//! (`err`, `Hr`, `Hs`, `Hc`, `cr`, `ac`). Outer NDEF framing and type dispatch
//! belong to the caller; the nested message inside request and select records
//! goes through an injected [`MessageCodec`], [`NdefMessageCodec`] by default.

pub mod error;
pub mod ffi;
pub mod header;
pub mod message;
pub mod ndef_type;
pub mod parser;
pub mod record;
pub mod registry;

pub use error::{FormatError, ValueError};
pub use message::{MessageCodec, NdefMessageCodec, RawRecord};
pub use record::{
    AlternativeCarrierRecord, CarrierPowerState, CarrierTypeFormat, CollisionResolutionRecord,
    ErrorReason, ErrorRecord, HandoverCarrierRecord, HandoverRecord, HandoverRequestRecord,
    HandoverSelectRecord, SelectEntry, WellKnownRecord,
};
pub use registry::RecordType;

uniffi::setup_scaffolding!();
