use tracing::warn;
use winnow::{ModalResult, Parser, error::StrContext, token::rest};

use crate::{
    error::{DecodeResult, EncodeResult, FormatError, malformed},
    message::MessageCodec,
    parser::{Stream, parse_length_prefixed},
    registry,
};

use super::{WellKnownRecord, utf8_field, write_length_prefixed};

const CARRIER_TYPE_FORMAT_MASK: u8 = 0x07;

/// How the carrier type name is to be read, values follow the NDEF TNF field
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
pub enum CarrierTypeFormat {
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
}

impl From<CarrierTypeFormat> for u8 {
    fn from(format: CarrierTypeFormat) -> Self {
        match format {
            CarrierTypeFormat::WellKnown => 0x01,
            CarrierTypeFormat::Mime => 0x02,
            CarrierTypeFormat::AbsoluteUri => 0x03,
            CarrierTypeFormat::External => 0x04,
            CarrierTypeFormat::Unknown => 0x05,
        }
    }
}

impl TryFrom<u8> for CarrierTypeFormat {
    type Error = FormatError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x01 => Ok(Self::WellKnown),
            0x02 => Ok(Self::Mime),
            0x03 => Ok(Self::AbsoluteUri),
            0x04 => Ok(Self::External),
            0x05 => Ok(Self::Unknown),
            _ => Err(FormatError::UnknownCarrierTypeFormat(value)),
        }
    }
}

/// Handover Carrier Record, names a carrier without giving its configuration
#[derive(Debug, Clone, PartialEq, Eq, Hash, uniffi::Record)]
pub struct HandoverCarrierRecord {
    pub carrier_type_format: CarrierTypeFormat,
    pub carrier_type: String,
    pub carrier_data: Vec<u8>,
}

impl HandoverCarrierRecord {
    pub fn new(
        carrier_type_format: CarrierTypeFormat,
        carrier_type: impl Into<String>,
        carrier_data: Vec<u8>,
    ) -> Self {
        Self { carrier_type_format, carrier_type: carrier_type.into(), carrier_data }
    }
}

impl WellKnownRecord for HandoverCarrierRecord {
    const TYPE: &'static [u8] = registry::HANDOVER_CARRIER;

    fn encode_with(&self, _codec: &impl MessageCodec) -> EncodeResult<Vec<u8>> {
        let mut payload = vec![u8::from(self.carrier_type_format)];
        write_length_prefixed(&mut payload, self.carrier_type.as_bytes(), "carrier type")?;
        payload.extend_from_slice(&self.carrier_data);

        Ok(payload)
    }

    fn decode_with(payload: &[u8], _codec: &impl MessageCodec) -> DecodeResult<Self> {
        let (format_byte, carrier_type, carrier_data) =
            parse_handover_carrier.parse(payload).map_err(malformed)?;

        if format_byte & !CARRIER_TYPE_FORMAT_MASK != 0 {
            warn!(byte = format_byte, "reserved bits set in handover carrier record");
        }

        let carrier_type_format =
            CarrierTypeFormat::try_from(format_byte & CARRIER_TYPE_FORMAT_MASK)?;

        Ok(Self {
            carrier_type_format,
            carrier_type: utf8_field(carrier_type, "carrier type")?,
            carrier_data: carrier_data.to_vec(),
        })
    }
}

fn parse_handover_carrier<'i>(input: &mut Stream<'i>) -> ModalResult<(u8, &'i [u8], &'i [u8])> {
    let format_byte =
        winnow::binary::u8.context(StrContext::Label("carrier type format")).parse_next(input)?;

    let carrier_type =
        parse_length_prefixed.context(StrContext::Label("carrier type")).parse_next(input)?;

    let carrier_data = rest.parse_next(input)?;

    Ok((format_byte, carrier_type, carrier_data))
}
