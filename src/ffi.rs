use strum::IntoEnumIterator as _;

use crate::{
    error::{FormatError, ValueError},
    message::NdefMessageCodec,
    record::{CarrierPowerState, CarrierTypeFormat, ErrorReason, HandoverRecord},
};

#[derive(Debug, Default, Clone, uniffi::Object)]
pub struct FfiHandoverCodec(NdefMessageCodec);

#[uniffi::export]
impl FfiHandoverCodec {
    #[uniffi::constructor]
    pub fn new() -> Self {
        Self(NdefMessageCodec)
    }

    /// Encode the record payload, without NDEF framing
    #[uniffi::method]
    pub fn encode(&self, record: HandoverRecord) -> Result<Vec<u8>, ValueError> {
        record.encode_with(&self.0)
    }

    #[uniffi::method]
    pub fn decode(
        &self,
        type_identifier: Vec<u8>,
        payload: Vec<u8>,
    ) -> Result<HandoverRecord, FormatError> {
        HandoverRecord::decode_with(&type_identifier, &payload, &self.0)
    }

    #[uniffi::method]
    pub fn type_identifier(&self, record: HandoverRecord) -> Vec<u8> {
        record.type_identifier().to_vec()
    }
}

#[uniffi::export]
fn handover_record_is_equal(lhs: HandoverRecord, rhs: HandoverRecord) -> bool {
    lhs == rhs
}

#[uniffi::export]
fn all_error_reasons() -> Vec<ErrorReason> {
    ErrorReason::iter().collect()
}

#[uniffi::export]
fn all_carrier_power_states() -> Vec<CarrierPowerState> {
    CarrierPowerState::iter().collect()
}

#[uniffi::export]
fn all_carrier_type_formats() -> Vec<CarrierTypeFormat> {
    CarrierTypeFormat::iter().collect()
}
