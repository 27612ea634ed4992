use tracing::trace;
use winnow::Parser as _;

use crate::{
    error::{DecodeResult, EncodeResult, FormatError, ValueError, malformed},
    header::NdefHeader,
    ndef_type::NdefType,
    parser,
};

/// A record as carried inside a nested NDEF message, before type dispatch
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawRecord {
    pub type_name_format: NdefType,
    pub type_: Vec<u8>,
    pub id: Option<Vec<u8>>,
    pub payload: Vec<u8>,
}

impl RawRecord {
    pub fn well_known(type_: &[u8], payload: Vec<u8>) -> Self {
        Self { type_name_format: NdefType::WellKnown, type_: type_.to_vec(), id: None, payload }
    }

    /// The record type, only if it is a well-known (NFC Forum RTD) type
    pub fn well_known_type(&self) -> Option<&[u8]> {
        match self.type_name_format {
            NdefType::WellKnown => Some(&self.type_),
            _ => None,
        }
    }
}

/// Encodes and decodes the nested NDEF message embedded in handover request and select records
pub trait MessageCodec {
    fn encode_message(&self, records: &[RawRecord]) -> EncodeResult<Vec<u8>>;

    /// Must keep records in the order they appear and never fail on an unrecognized type
    fn decode_message(&self, bytes: &[u8]) -> DecodeResult<Vec<RawRecord>>;
}

/// Standard NDEF record framing, unchunked
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NdefMessageCodec;

impl MessageCodec for NdefMessageCodec {
    fn encode_message(&self, records: &[RawRecord]) -> EncodeResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let last = records.len().saturating_sub(1);

        for (index, record) in records.iter().enumerate() {
            let type_length = u8::try_from(record.type_.len())
                .map_err(|_| ValueError::field_too_long("record type", record.type_.len()))?;

            let id_length = match &record.id {
                Some(id) => Some(
                    u8::try_from(id.len())
                        .map_err(|_| ValueError::field_too_long("record id", id.len()))?,
                ),
                None => None,
            };

            let payload_length = u32::try_from(record.payload.len()).map_err(|_| {
                ValueError::PayloadTooLong { length: record.payload.len() as u64 }
            })?;

            let header = NdefHeader {
                message_begin: index == 0,
                message_end: index == last,
                chunked: false,
                short_record: payload_length <= u8::MAX as u32,
                has_id_length: id_length.is_some(),
                type_name_format: record.type_name_format,
                type_length,
                payload_length,
                id_length,
            };

            header.write(&mut buffer);
            buffer.extend_from_slice(&record.type_);

            if let Some(id) = &record.id {
                buffer.extend_from_slice(id);
            }

            buffer.extend_from_slice(&record.payload);
        }

        Ok(buffer)
    }

    fn decode_message(&self, bytes: &[u8]) -> DecodeResult<Vec<RawRecord>> {
        let parsed = parser::parse_ndef_records.parse(bytes).map_err(malformed)?;

        let mut records = Vec::with_capacity(parsed.len());
        for (header, record) in parsed {
            if header.chunked {
                return Err(FormatError::ChunkedRecord);
            }

            trace!(
                type_ = %hex::encode(&record.type_),
                payload_length = header.payload_length,
                "decoded nested record"
            );

            records.push(record);
        }

        Ok(records)
    }
}
