use tracing::debug;

use crate::{
    error::{DecodeResult, EncodeResult, FormatError},
    message::{MessageCodec, RawRecord},
    registry::{self, RecordType},
};

use super::{
    AlternativeCarrierRecord, DEFAULT_MAJOR_VERSION, DEFAULT_MINOR_VERSION, ErrorRecord,
    HandoverCarrierRecord, WellKnownRecord, decode_version, encode_version,
};

/// One recognized sub-record of a handover select message
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum SelectEntry {
    Carrier(HandoverCarrierRecord),
    AlternativeCarrier(AlternativeCarrierRecord),
    Error(ErrorRecord),
}

impl SelectEntry {
    fn to_raw(&self, codec: &impl MessageCodec) -> EncodeResult<RawRecord> {
        let raw = match self {
            Self::Carrier(record) => {
                RawRecord::well_known(record.type_identifier(), record.encode_with(codec)?)
            }
            Self::AlternativeCarrier(record) => {
                RawRecord::well_known(record.type_identifier(), record.encode_with(codec)?)
            }
            Self::Error(record) => {
                RawRecord::well_known(record.type_identifier(), record.encode_with(codec)?)
            }
        };

        Ok(raw)
    }
}

/// Handover Select Record, the selector's answer to a handover request
///
/// Entries keep the order they were added or decoded in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct HandoverSelectRecord {
    pub major_version: u8,
    pub minor_version: u8,
    pub entries: Vec<SelectEntry>,
}

impl Default for HandoverSelectRecord {
    fn default() -> Self {
        Self {
            major_version: DEFAULT_MAJOR_VERSION,
            minor_version: DEFAULT_MINOR_VERSION,
            entries: Vec::new(),
        }
    }
}

impl HandoverSelectRecord {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_version(self, major_version: u8, minor_version: u8) -> Self {
        Self { major_version, minor_version, ..self }
    }

    #[must_use]
    pub fn with_entry(mut self, entry: SelectEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// The first error record, if the selector reported one
    pub fn error(&self) -> Option<&ErrorRecord> {
        self.entries.iter().find_map(|entry| match entry {
            SelectEntry::Error(error) => Some(error),
            _ => None,
        })
    }
}

impl WellKnownRecord for HandoverSelectRecord {
    const TYPE: &'static [u8] = registry::HANDOVER_SELECT;

    fn encode_with(&self, codec: &impl MessageCodec) -> EncodeResult<Vec<u8>> {
        let version = encode_version(self.major_version, self.minor_version)?;

        let records = self
            .entries
            .iter()
            .map(|entry| entry.to_raw(codec))
            .collect::<EncodeResult<Vec<_>>>()?;

        let nested = codec.encode_message(&records)?;

        let mut payload = Vec::with_capacity(1 + nested.len());
        payload.push(version);
        payload.extend_from_slice(&nested);

        Ok(payload)
    }

    fn decode_with(payload: &[u8], codec: &impl MessageCodec) -> DecodeResult<Self> {
        let Some((&version, nested)) = payload.split_first() else {
            return Err(FormatError::MissingVersion);
        };

        let (major_version, minor_version) = decode_version(version);

        let mut entries = Vec::new();
        for raw in codec.decode_message(nested)? {
            let record_type = raw.well_known_type().and_then(RecordType::from_type_identifier);

            let entry = match record_type {
                Some(RecordType::HandoverCarrier) => {
                    SelectEntry::Carrier(HandoverCarrierRecord::decode_with(&raw.payload, codec)?)
                }
                Some(RecordType::AlternativeCarrier) => SelectEntry::AlternativeCarrier(
                    AlternativeCarrierRecord::decode_with(&raw.payload, codec)?,
                ),
                Some(RecordType::Error) => {
                    SelectEntry::Error(ErrorRecord::decode_with(&raw.payload, codec)?)
                }
                _ => {
                    debug!(
                        type_ = %hex::encode(&raw.type_),
                        tnf = ?raw.type_name_format,
                        "ignoring unknown record in handover select"
                    );
                    continue;
                }
            };

            entries.push(entry);
        }

        Ok(Self { major_version, minor_version, entries })
    }
}
