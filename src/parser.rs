use winnow::{
    ModalResult, Parser,
    binary::{
        Endianness, length_take,
        bits::{bits, bool as take_bool, take as take_bits},
    },
    error::{ContextError, ErrMode, StrContext},
    token::{any, take},
};

use crate::{header::NdefHeader, message::RawRecord, ndef_type::NdefType};

/// Complete input, handover payloads are always fully buffered
pub type Stream<'i> = &'i [u8];

/// Parse records until the one flagged message end, or until the input runs out
pub fn parse_ndef_records(input: &mut Stream<'_>) -> ModalResult<Vec<(NdefHeader, RawRecord)>> {
    let mut records = Vec::new();

    while !input.is_empty() {
        let (header, record) = parse_ndef_record.parse_next(input)?;
        let message_end = header.message_end;
        records.push((header, record));

        if message_end {
            break;
        }
    }

    Ok(records)
}

pub fn parse_ndef_record(input: &mut Stream<'_>) -> ModalResult<(NdefHeader, RawRecord)> {
    let header = parse_header.parse_next(input)?;
    let type_ = parse_type(input, header.type_length)?;
    let id = parse_id(input, header.id_length)?;
    let payload = parse_payload(input, header.payload_length)?;

    let record = RawRecord { type_name_format: header.type_name_format, type_, id, payload };
    Ok((header, record))
}

/// A single byte length followed by that many bytes
pub fn parse_length_prefixed<'i>(input: &mut Stream<'i>) -> ModalResult<&'i [u8]> {
    length_take(winnow::binary::u8).parse_next(input)
}

// private
fn parse_header_byte(input: &mut Stream<'_>) -> ModalResult<(bool, bool, bool, bool, bool, u8)> {
    bits::<_, _, ErrMode<ContextError>, _, _>((
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bool,
        take_bits(3_u8),
    ))
    .parse_next(input)
}

fn parse_header(input: &mut Stream<'_>) -> ModalResult<NdefHeader> {
    let (message_begin, message_end, chunked, short_record, has_id_length, type_name_format) =
        parse_header_byte.context(StrContext::Label("record header")).parse_next(input)?;

    let type_length =
        winnow::binary::u8.context(StrContext::Label("type length")).parse_next(input)?;

    let payload_length = if short_record {
        any.map(|x: u8| x as u32).context(StrContext::Label("payload length")).parse_next(input)?
    } else {
        winnow::binary::u32(Endianness::Big)
            .context(StrContext::Label("payload length"))
            .parse_next(input)?
    };

    let id_length = if has_id_length {
        Some(any.context(StrContext::Label("id length")).parse_next(input)?)
    } else {
        None
    };

    Ok(NdefHeader {
        message_begin,
        message_end,
        chunked,
        short_record,
        has_id_length,
        type_name_format: NdefType::from_bits(type_name_format),
        type_length,
        payload_length,
        id_length,
    })
}

fn parse_type(input: &mut Stream<'_>, type_length: u8) -> ModalResult<Vec<u8>> {
    take(type_length as usize)
        .map(|s: &[u8]| s.to_vec())
        .context(StrContext::Label("record type"))
        .parse_next(input)
}

fn parse_id(input: &mut Stream<'_>, id_length: Option<u8>) -> ModalResult<Option<Vec<u8>>> {
    if let Some(id_len) = id_length {
        take(id_len as usize)
            .map(|s: &[u8]| Some(s.to_vec()))
            .context(StrContext::Label("record id"))
            .parse_next(input)
    } else {
        Ok(None)
    }
}

fn parse_payload(input: &mut Stream<'_>, payload_length: u32) -> ModalResult<Vec<u8>> {
    take(payload_length as usize)
        .map(|s: &[u8]| s.to_vec())
        .context(StrContext::Label("record payload"))
        .parse_next(input)
}
