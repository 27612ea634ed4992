use thiserror::Error;

/// Decode failure for a single record payload
#[derive(Debug, Error, Clone, PartialEq, Eq, uniffi::Error)]
#[uniffi::export(Display)]
pub enum FormatError {
    #[error("Error record payload is empty, missing the error reason byte")]
    MissingErrorReason,

    #[error("Handover payload is empty, missing the version byte")]
    MissingVersion,

    #[error("Unknown error reason: {0:#04x}")]
    UnknownErrorReason(u8),

    #[error("Unknown carrier power state: {0:#04x}")]
    UnknownCarrierPowerState(u8),

    #[error("Unknown carrier type format: {0:#04x}")]
    UnknownCarrierTypeFormat(u8),

    /// Error data wider than the 8 bytes a u64 can hold
    #[error("Error data is {length} bytes, at most 8 are supported")]
    ErrorDataTooLong { length: u64 },

    #[error("Invalid payload length for {record}: expected {expected}, got {actual}")]
    InvalidPayloadLength { record: String, expected: u64, actual: u64 },

    #[error("Invalid UTF-8 in {field}: {error}")]
    InvalidUtf8 { field: String, error: String },

    #[error("Chunked records are not supported inside a handover message")]
    ChunkedRecord,

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Malformed payload: {0}")]
    Malformed(String),
}

/// Encode failure, a field holds a value the wire format cannot represent
#[derive(Debug, Error, Clone, PartialEq, Eq, uniffi::Error)]
#[uniffi::export(Display)]
pub enum ValueError {
    #[error("{field} version {value} does not fit in 4 bits")]
    VersionOutOfRange { field: String, value: u8 },

    #[error("{field} is {length} bytes, at most 255 fit behind a length byte")]
    FieldTooLong { field: String, length: u64 },

    #[error("Too many auxiliary data references: {count}, at most 255")]
    TooManyAuxiliaryReferences { count: u64 },

    #[error("Payload is {length} bytes, too large for an NDEF record")]
    PayloadTooLong { length: u64 },
}

pub type DecodeResult<T> = std::result::Result<T, FormatError>;
pub type EncodeResult<T> = std::result::Result<T, ValueError>;

impl FormatError {
    pub(crate) fn invalid_utf8(field: &str, error: std::str::Utf8Error) -> Self {
        Self::InvalidUtf8 { field: field.to_string(), error: error.to_string() }
    }
}

impl ValueError {
    pub(crate) fn field_too_long(field: &str, length: usize) -> Self {
        Self::FieldTooLong { field: field.to_string(), length: length as u64 }
    }
}

/// Map a winnow parse failure on a complete byte slice into a `FormatError`
pub(crate) fn malformed<E: std::fmt::Display>(
    error: winnow::error::ParseError<&[u8], E>,
) -> FormatError {
    FormatError::Malformed(format!("{} at offset {}", error.inner(), error.offset()))
}
