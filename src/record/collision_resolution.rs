use crate::{
    error::{DecodeResult, EncodeResult, FormatError},
    message::MessageCodec,
    registry,
};

use super::WellKnownRecord;

/// Collision Resolution Record, breaks ties when both devices send a handover request
///
/// Callers generate the id randomly before sending, this record only carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Record)]
pub struct CollisionResolutionRecord {
    pub collision_resolution_id: u16,
}

impl CollisionResolutionRecord {
    pub fn new(collision_resolution_id: u16) -> Self {
        Self { collision_resolution_id }
    }
}

impl WellKnownRecord for CollisionResolutionRecord {
    const TYPE: &'static [u8] = registry::COLLISION_RESOLUTION;

    fn encode_with(&self, _codec: &impl MessageCodec) -> EncodeResult<Vec<u8>> {
        Ok(self.collision_resolution_id.to_be_bytes().to_vec())
    }

    fn decode_with(payload: &[u8], _codec: &impl MessageCodec) -> DecodeResult<Self> {
        let bytes: [u8; 2] = payload.try_into().map_err(|_| FormatError::InvalidPayloadLength {
            record: "collision resolution".to_string(),
            expected: 2,
            actual: payload.len() as u64,
        })?;

        Ok(Self::new(u16::from_be_bytes(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn big_endian_id() {
        let record = CollisionResolutionRecord::new(321);

        let payload = record.encode().unwrap();
        assert_eq!(payload, vec![0x01, 0x41]);
        assert_eq!(CollisionResolutionRecord::decode(&payload).unwrap(), record);
    }

    #[test]
    fn full_range() {
        for id in [0, 1, 0x00FF, 0xFF00, u16::MAX] {
            let record = CollisionResolutionRecord::new(id);
            let payload = record.encode().unwrap();
            assert_eq!(CollisionResolutionRecord::decode(&payload).unwrap(), record);
        }
    }

    #[test]
    fn payload_must_be_two_bytes() {
        for payload in [&[][..], &[0x01][..], &[0x01, 0x41, 0x00][..]] {
            let error = CollisionResolutionRecord::decode(payload).unwrap_err();
            assert_eq!(
                error,
                FormatError::InvalidPayloadLength {
                    record: "collision resolution".into(),
                    expected: 2,
                    actual: payload.len() as u64,
                }
            );
        }
    }
}
