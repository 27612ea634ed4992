use crate::ndef_type::NdefType;

const MESSAGE_BEGIN: u8 = 0x80;
const MESSAGE_END: u8 = 0x40;
const CHUNKED: u8 = 0x20;
const SHORT_RECORD: u8 = 0x10;
const ID_LENGTH: u8 = 0x08;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefHeader {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub has_id_length: bool,
    pub type_name_format: NdefType,
    pub type_length: u8,
    pub payload_length: u32,
    pub id_length: Option<u8>,
}

impl NdefHeader {
    /// Pack the flags and TNF into the first header byte
    pub fn flags_byte(&self) -> u8 {
        let mut byte = u8::from(self.type_name_format);

        if self.message_begin {
            byte |= MESSAGE_BEGIN;
        }

        if self.message_end {
            byte |= MESSAGE_END;
        }

        if self.chunked {
            byte |= CHUNKED;
        }

        if self.short_record {
            byte |= SHORT_RECORD;
        }

        if self.has_id_length {
            byte |= ID_LENGTH;
        }

        byte
    }

    /// Write the full header: flags, type length, payload length and optional id length
    pub fn write(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.flags_byte());
        buffer.push(self.type_length);

        if self.short_record {
            buffer.push(self.payload_length as u8);
        } else {
            buffer.extend_from_slice(&self.payload_length.to_be_bytes());
        }

        if let Some(id_length) = self.id_length {
            buffer.push(id_length);
        }
    }
}
