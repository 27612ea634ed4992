use tracing::debug;

use crate::{
    error::{DecodeResult, EncodeResult, FormatError},
    message::{MessageCodec, RawRecord},
    registry::{self, RecordType},
};

use super::{
    AlternativeCarrierRecord, CollisionResolutionRecord, DEFAULT_MAJOR_VERSION,
    DEFAULT_MINOR_VERSION, WellKnownRecord, decode_version, encode_version,
};

/// Handover Request Record, the list of carriers the requester can use
///
/// Carriers are listed in preference order and the selector processes them in
/// that order. The handover specification requires at least one alternative
/// carrier before sending, this type does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct HandoverRequestRecord {
    pub major_version: u8,
    pub minor_version: u8,
    pub collision_resolution: Option<CollisionResolutionRecord>,
    pub alternative_carriers: Vec<AlternativeCarrierRecord>,
}

impl Default for HandoverRequestRecord {
    fn default() -> Self {
        Self {
            major_version: DEFAULT_MAJOR_VERSION,
            minor_version: DEFAULT_MINOR_VERSION,
            collision_resolution: None,
            alternative_carriers: Vec::new(),
        }
    }
}

impl HandoverRequestRecord {
    pub fn new(collision_resolution: CollisionResolutionRecord) -> Self {
        Self { collision_resolution: Some(collision_resolution), ..Self::default() }
    }

    #[must_use]
    pub fn with_version(self, major_version: u8, minor_version: u8) -> Self {
        Self { major_version, minor_version, ..self }
    }

    #[must_use]
    pub fn with_alternative_carrier(mut self, alternative_carrier: AlternativeCarrierRecord) -> Self {
        self.alternative_carriers.push(alternative_carrier);
        self
    }

    fn nested_records(&self, codec: &impl MessageCodec) -> EncodeResult<Vec<RawRecord>> {
        let mut records = Vec::with_capacity(self.alternative_carriers.len() + 1);

        if let Some(collision_resolution) = &self.collision_resolution {
            records.push(RawRecord::well_known(
                CollisionResolutionRecord::TYPE,
                collision_resolution.encode_with(codec)?,
            ));
        }

        for alternative_carrier in &self.alternative_carriers {
            records.push(RawRecord::well_known(
                AlternativeCarrierRecord::TYPE,
                alternative_carrier.encode_with(codec)?,
            ));
        }

        Ok(records)
    }
}

impl WellKnownRecord for HandoverRequestRecord {
    const TYPE: &'static [u8] = registry::HANDOVER_REQUEST;

    fn encode_with(&self, codec: &impl MessageCodec) -> EncodeResult<Vec<u8>> {
        let version = encode_version(self.major_version, self.minor_version)?;
        let nested = codec.encode_message(&self.nested_records(codec)?)?;

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
        let mut record = Self {
            major_version,
            minor_version,
            collision_resolution: None,
            alternative_carriers: Vec::new(),
        };

        // only collision resolution and alternative carrier records have a meaning here,
        // anything else must be skipped without raising an error
        for raw in codec.decode_message(nested)? {
            let record_type = raw.well_known_type().and_then(RecordType::from_type_identifier);

            match record_type {
                Some(RecordType::CollisionResolution) if record.collision_resolution.is_none() => {
                    record.collision_resolution =
                        Some(CollisionResolutionRecord::decode_with(&raw.payload, codec)?);
                }

                Some(RecordType::CollisionResolution) => {
                    debug!("ignoring additional collision resolution record in handover request");
                }

                Some(RecordType::AlternativeCarrier) => {
                    let alternative_carrier =
                        AlternativeCarrierRecord::decode_with(&raw.payload, codec)?;
                    record.alternative_carriers.push(alternative_carrier);
                }

                _ => {
                    debug!(
                        type_ = %hex::encode(&raw.type_),
                        tnf = ?raw.type_name_format,
                        "ignoring unknown record in handover request"
                    );
                }
            }
        }

        Ok(record)
    }
}
