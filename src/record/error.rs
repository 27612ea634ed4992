use crate::{
    error::{DecodeResult, EncodeResult, FormatError},
    message::MessageCodec,
    registry,
};

use super::WellKnownRecord;

/// Largest error data field this crate carries, the width of a u64
pub const MAX_ERROR_DATA_LENGTH: usize = 8;

/// Why the handover selector failed to process the most recent handover request
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    uniffi::Enum,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum ErrorReason {
    /// Temporary memory constraints, the request may be resent after at least
    /// the number of milliseconds in the error data
    TemporaryMemoryConstraints,

    /// Permanent memory constraints, resending the same request always fails
    PermanentMemoryConstraints,

    /// Carrier specific constraints, the request may be resent after at least
    /// the number of milliseconds in the error data
    CarrierSpecificConstraints,
}

impl From<ErrorReason> for u8 {
    fn from(reason: ErrorReason) -> Self {
        match reason {
            ErrorReason::TemporaryMemoryConstraints => 0x01,
            ErrorReason::PermanentMemoryConstraints => 0x02,
            ErrorReason::CarrierSpecificConstraints => 0x03,
        }
    }
}

impl TryFrom<u8> for ErrorReason {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::TemporaryMemoryConstraints),
            0x02 => Ok(Self::PermanentMemoryConstraints),
            0x03 => Ok(Self::CarrierSpecificConstraints),
            _ => Err(FormatError::UnknownErrorReason(value)),
        }
    }
}

/// Error Record, only valid inside a handover select message
///
/// Payload: one reason byte, then the error data as a big-endian unsigned
/// integer filling the rest of the payload (0 to 8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Record)]
pub struct ErrorRecord {
    pub error_reason: ErrorReason,
    /// Meaning depends on `error_reason`
    pub error_data: u64,
}

impl ErrorRecord {
    pub fn new(error_reason: ErrorReason, error_data: u64) -> Self {
        Self { error_reason, error_data }
    }
}

impl WellKnownRecord for ErrorRecord {
    const TYPE: &'static [u8] = registry::ERROR;

    fn encode_with(&self, _codec: &impl MessageCodec) -> EncodeResult<Vec<u8>> {
        let data = self.error_data.to_be_bytes();
        let skip = (self.error_data.leading_zeros() / 8) as usize;

        let mut payload = Vec::with_capacity(1 + data.len() - skip);
        payload.push(u8::from(self.error_reason));
        payload.extend_from_slice(&data[skip..]);

        Ok(payload)
    }

    fn decode_with(payload: &[u8], _codec: &impl MessageCodec) -> DecodeResult<Self> {
        let Some((&reason, data)) = payload.split_first() else {
            return Err(FormatError::MissingErrorReason);
        };

        let error_reason = ErrorReason::try_from(reason)?;

        if data.len() > MAX_ERROR_DATA_LENGTH {
            return Err(FormatError::ErrorDataTooLong { length: data.len() as u64 });
        }

        let error_data = data.iter().fold(0_u64, |acc, &byte| (acc << 8) | u64::from(byte));

        Ok(Self { error_reason, error_data })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn permanent_memory_constraints_bytes() {
        let record = ErrorRecord::new(ErrorReason::PermanentMemoryConstraints, 321);

        let payload = record.encode().unwrap();
        assert_eq!(payload, vec![0x02, 0x01, 0x41]);
        assert_eq!(ErrorRecord::decode(&payload).unwrap(), record);
    }

    #[test]
    fn zero_error_data_is_reason_byte_only() {
        let record = ErrorRecord::new(ErrorReason::TemporaryMemoryConstraints, 0);

        let payload = record.encode().unwrap();
        assert_eq!(payload, vec![0x01]);

        let decoded = ErrorRecord::decode(&payload).unwrap();
        assert_eq!(decoded.error_data, 0);
        assert_eq!(decoded, record);
    }

    #[test]
    fn full_width_error_data() {
        let record = ErrorRecord::new(ErrorReason::CarrierSpecificConstraints, u64::MAX);

        let payload = record.encode().unwrap();
        assert_eq!(payload.len(), 9);
        assert_eq!(ErrorRecord::decode(&payload).unwrap(), record);
    }

    #[test]
    fn leading_zero_bytes_still_decode() {
        let decoded = ErrorRecord::decode(&[0x01, 0x00, 0x00, 0x01, 0xF4]).unwrap();
        assert_eq!(decoded, ErrorRecord::new(ErrorReason::TemporaryMemoryConstraints, 500));
    }

    #[test]
    fn empty_payload_is_missing_reason() {
        assert_eq!(ErrorRecord::decode(&[]).unwrap_err(), FormatError::MissingErrorReason);
    }

    #[test]
    fn unknown_reason_is_rejected() {
        assert_eq!(ErrorRecord::decode(&[0x00]).unwrap_err(), FormatError::UnknownErrorReason(0));
        assert_eq!(
            ErrorRecord::decode(&[0x04, 0x01]).unwrap_err(),
            FormatError::UnknownErrorReason(0x04)
        );
    }

    #[test]
    fn error_data_over_eight_bytes_is_rejected() {
        let payload = [0x02, 0, 0, 0, 0, 0, 0, 0, 0, 1];
        assert_eq!(
            ErrorRecord::decode(&payload).unwrap_err(),
            FormatError::ErrorDataTooLong { length: 9 }
        );
    }

    #[test]
    fn error_reason_table_is_closed() {
        assert_eq!(ErrorReason::try_from(0x00), Err(FormatError::UnknownErrorReason(0x00)));

        for byte in [0x01, 0x02, 0x03] {
            let reason = ErrorReason::try_from(byte).unwrap();
            assert_eq!(u8::from(reason), byte);
        }

        for reason in ErrorReason::iter() {
            assert_eq!(ErrorReason::try_from(u8::from(reason)), Ok(reason));
        }

        for byte in 0x04..=u8::MAX {
            assert!(ErrorReason::try_from(byte).is_err());
        }
    }

    #[test]
    fn type_identifier_is_err() {
        let record = ErrorRecord::new(ErrorReason::PermanentMemoryConstraints, 1);
        assert_eq!(record.type_identifier(), &[0x65, 0x72, 0x72]);
    }
}
