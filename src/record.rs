pub mod alternative_carrier;
pub mod collision_resolution;
pub mod error;
pub mod handover_carrier;
pub mod handover_request;
pub mod handover_select;

use crate::{
    error::{DecodeResult, EncodeResult, FormatError, ValueError},
    message::{MessageCodec, NdefMessageCodec},
    registry::RecordType,
};

pub use alternative_carrier::{AlternativeCarrierRecord, CarrierPowerState};
pub use collision_resolution::CollisionResolutionRecord;
pub use error::{ErrorReason, ErrorRecord};
pub use handover_carrier::{CarrierTypeFormat, HandoverCarrierRecord};
pub use handover_request::HandoverRequestRecord;
pub use handover_select::{HandoverSelectRecord, SelectEntry};

/// Major version of the Connection Handover specification written by default
pub const DEFAULT_MAJOR_VERSION: u8 = 0x01;

/// Minor version of the Connection Handover specification written by default
pub const DEFAULT_MINOR_VERSION: u8 = 0x00;

/// A well-known NDEF record with a fixed type identifier and a payload codec
///
/// Records that embed a nested message use the injected `MessageCodec`, leaf
/// records ignore it.
pub trait WellKnownRecord: Sized {
    const TYPE: &'static [u8];

    fn type_identifier(&self) -> &'static [u8] {
        Self::TYPE
    }

    fn encode_with(&self, codec: &impl MessageCodec) -> EncodeResult<Vec<u8>>;

    fn decode_with(payload: &[u8], codec: &impl MessageCodec) -> DecodeResult<Self>;

    fn encode(&self) -> EncodeResult<Vec<u8>> {
        self.encode_with(&NdefMessageCodec)
    }

    fn decode(payload: &[u8]) -> DecodeResult<Self> {
        Self::decode_with(payload, &NdefMessageCodec)
    }
}

/// Any of the handover record types, tagged by its type identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum HandoverRecord {
    Error(ErrorRecord),
    HandoverRequest(HandoverRequestRecord),
    HandoverSelect(HandoverSelectRecord),
    HandoverCarrier(HandoverCarrierRecord),
    CollisionResolution(CollisionResolutionRecord),
    AlternativeCarrier(AlternativeCarrierRecord),
}

impl HandoverRecord {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Error(_) => RecordType::Error,
            Self::HandoverRequest(_) => RecordType::HandoverRequest,
            Self::HandoverSelect(_) => RecordType::HandoverSelect,
            Self::HandoverCarrier(_) => RecordType::HandoverCarrier,
            Self::CollisionResolution(_) => RecordType::CollisionResolution,
            Self::AlternativeCarrier(_) => RecordType::AlternativeCarrier,
        }
    }

    pub fn type_identifier(&self) -> &'static [u8] {
        self.record_type().type_identifier()
    }

    pub fn encode_with(&self, codec: &impl MessageCodec) -> EncodeResult<Vec<u8>> {
        match self {
            Self::Error(record) => record.encode_with(codec),
            Self::HandoverRequest(record) => record.encode_with(codec),
            Self::HandoverSelect(record) => record.encode_with(codec),
            Self::HandoverCarrier(record) => record.encode_with(codec),
            Self::CollisionResolution(record) => record.encode_with(codec),
            Self::AlternativeCarrier(record) => record.encode_with(codec),
        }
    }

    pub fn encode(&self) -> EncodeResult<Vec<u8>> {
        self.encode_with(&NdefMessageCodec)
    }

    /// Decode a payload by its type identifier, unrecognized types are an error here
    pub fn decode_with(
        type_: &[u8],
        payload: &[u8],
        codec: &impl MessageCodec,
    ) -> DecodeResult<Self> {
        let Some(record_type) = RecordType::from_type_identifier(type_) else {
            return Err(FormatError::UnknownRecordType(String::from_utf8_lossy(type_).into()));
        };

        let record = match record_type {
            RecordType::Error => Self::Error(ErrorRecord::decode_with(payload, codec)?),
            RecordType::HandoverRequest => {
                Self::HandoverRequest(HandoverRequestRecord::decode_with(payload, codec)?)
            }
            RecordType::HandoverSelect => {
                Self::HandoverSelect(HandoverSelectRecord::decode_with(payload, codec)?)
            }
            RecordType::HandoverCarrier => {
                Self::HandoverCarrier(HandoverCarrierRecord::decode_with(payload, codec)?)
            }
            RecordType::CollisionResolution => {
                Self::CollisionResolution(CollisionResolutionRecord::decode_with(payload, codec)?)
            }
            RecordType::AlternativeCarrier => {
                Self::AlternativeCarrier(AlternativeCarrierRecord::decode_with(payload, codec)?)
            }
        };

        Ok(record)
    }

    pub fn decode(type_: &[u8], payload: &[u8]) -> DecodeResult<Self> {
        Self::decode_with(type_, payload, &NdefMessageCodec)
    }
}

// version byte shared by handover request and select records

/// Pack major and minor version nibbles into one byte, rejecting values over 4 bits
pub(crate) fn encode_version(major_version: u8, minor_version: u8) -> EncodeResult<u8> {
    if major_version > 0x0F {
        return Err(ValueError::VersionOutOfRange {
            field: "major".to_string(),
            value: major_version,
        });
    }

    if minor_version > 0x0F {
        return Err(ValueError::VersionOutOfRange {
            field: "minor".to_string(),
            value: minor_version,
        });
    }

    Ok((major_version << 4) | (minor_version & 0x0F))
}

/// Split a version byte into (major, minor)
pub(crate) const fn decode_version(byte: u8) -> (u8, u8) {
    (byte >> 4, byte & 0x0F)
}

/// Decode a length-prefixed reference or name as UTF-8
pub(crate) fn utf8_field(bytes: &[u8], field: &str) -> DecodeResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|error| FormatError::invalid_utf8(field, error))
}

/// Append a single length byte followed by the bytes
pub(crate) fn write_length_prefixed(
    buffer: &mut Vec<u8>,
    bytes: &[u8],
    field: &str,
) -> EncodeResult<()> {
    let length = u8::try_from(bytes.len()).map_err(|_| ValueError::field_too_long(field, bytes.len()))?;

    buffer.push(length);
    buffer.extend_from_slice(bytes);
    Ok(())
}
