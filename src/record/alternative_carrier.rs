use tracing::warn;
use winnow::{ModalResult, Parser, combinator::repeat, error::StrContext};

use crate::{
    error::{DecodeResult, EncodeResult, FormatError, ValueError, malformed},
    message::MessageCodec,
    parser::{Stream, parse_length_prefixed},
    registry,
};

use super::{WellKnownRecord, utf8_field, write_length_prefixed};

const CARRIER_POWER_STATE_MASK: u8 = 0x03;

/// Power state of an alternative carrier, a 2-bit field
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
pub enum CarrierPowerState {
    Inactive,
    Active,
    Activating,
    Unknown,
}

impl From<CarrierPowerState> for u8 {
    fn from(state: CarrierPowerState) -> Self {
        match state {
            CarrierPowerState::Inactive => 0x00,
            CarrierPowerState::Active => 0x01,
            CarrierPowerState::Activating => 0x02,
            CarrierPowerState::Unknown => 0x03,
        }
    }
}

impl TryFrom<u8> for CarrierPowerState {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(Self::Inactive),
            0x01 => Ok(Self::Active),
            0x02 => Ok(Self::Activating),
            0x03 => Ok(Self::Unknown),
            _ => Err(FormatError::UnknownCarrierPowerState(value)),
        }
    }
}

/// Alternative Carrier Record, one carrier the sender can switch to
///
/// The references point at the id of the carrier configuration and
/// auxiliary data records sent alongside the handover message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct AlternativeCarrierRecord {
    pub carrier_power_state: CarrierPowerState,
    pub carrier_data_reference: String,
    pub auxiliary_data_references: Vec<String>,
}

impl AlternativeCarrierRecord {
    pub fn new(
        carrier_power_state: CarrierPowerState,
        carrier_data_reference: impl Into<String>,
    ) -> Self {
        Self {
            carrier_power_state,
            carrier_data_reference: carrier_data_reference.into(),
            auxiliary_data_references: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_auxiliary_data_reference(mut self, reference: impl Into<String>) -> Self {
        self.auxiliary_data_references.push(reference.into());
        self
    }
}

impl WellKnownRecord for AlternativeCarrierRecord {
    const TYPE: &'static [u8] = registry::ALTERNATIVE_CARRIER;

    fn encode_with(&self, _codec: &impl MessageCodec) -> EncodeResult<Vec<u8>> {
        let auxiliary_count = u8::try_from(self.auxiliary_data_references.len()).map_err(|_| {
            ValueError::TooManyAuxiliaryReferences {
                count: self.auxiliary_data_references.len() as u64,
            }
        })?;

        let mut payload = vec![u8::from(self.carrier_power_state)];
        write_length_prefixed(
            &mut payload,
            self.carrier_data_reference.as_bytes(),
            "carrier data reference",
        )?;

        payload.push(auxiliary_count);
        for reference in &self.auxiliary_data_references {
            write_length_prefixed(&mut payload, reference.as_bytes(), "auxiliary data reference")?;
        }

        Ok(payload)
    }

    fn decode_with(payload: &[u8], _codec: &impl MessageCodec) -> DecodeResult<Self> {
        let (power_state_byte, reference, auxiliary) =
            parse_alternative_carrier.parse(payload).map_err(malformed)?;

        if power_state_byte & !CARRIER_POWER_STATE_MASK != 0 {
            warn!(byte = power_state_byte, "reserved bits set in alternative carrier record");
        }

        let carrier_power_state =
            CarrierPowerState::try_from(power_state_byte & CARRIER_POWER_STATE_MASK)?;

        let carrier_data_reference = utf8_field(reference, "carrier data reference")?;
        let auxiliary_data_references = auxiliary
            .into_iter()
            .map(|reference| utf8_field(reference, "auxiliary data reference"))
            .collect::<DecodeResult<Vec<_>>>()?;

        Ok(Self { carrier_power_state, carrier_data_reference, auxiliary_data_references })
    }
}

fn parse_alternative_carrier<'i>(
    input: &mut Stream<'i>,
) -> ModalResult<(u8, &'i [u8], Vec<&'i [u8]>)> {
    let power_state_byte =
        winnow::binary::u8.context(StrContext::Label("carrier power state")).parse_next(input)?;

    let reference =
        parse_length_prefixed.context(StrContext::Label("carrier data reference")).parse_next(input)?;

    let auxiliary_count = winnow::binary::u8
        .context(StrContext::Label("auxiliary data reference count"))
        .parse_next(input)?;

    let auxiliary: Vec<&'i [u8]> = repeat(auxiliary_count as usize, parse_length_prefixed)
        .context(StrContext::Label("auxiliary data reference"))
        .parse_next(input)?;

    Ok((power_state_byte, reference, auxiliary))
}
