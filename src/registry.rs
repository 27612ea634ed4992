//! Well-known record type identifiers from the NFC Forum Connection Handover specification
//! See: NFC Forum Connection Handover Technical Specification 1.2, section 6

/// Error Record, "err"
pub const ERROR: &[u8] = b"err";

/// Handover Request Record, "Hr"
pub const HANDOVER_REQUEST: &[u8] = b"Hr";

/// Handover Select Record, "Hs"
pub const HANDOVER_SELECT: &[u8] = b"Hs";

/// Handover Carrier Record, "Hc"
pub const HANDOVER_CARRIER: &[u8] = b"Hc";

/// Collision Resolution Record, "cr"
pub const COLLISION_RESOLUTION: &[u8] = b"cr";

/// Alternative Carrier Record, "ac"
pub const ALTERNATIVE_CARRIER: &[u8] = b"ac";

/// The handover record types this crate knows how to encode and decode
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, derive_more::Display, strum::EnumIter)]
pub enum RecordType {
    Error,
    HandoverRequest,
    HandoverSelect,
    HandoverCarrier,
    CollisionResolution,
    AlternativeCarrier,
}

impl RecordType {
    pub const fn type_identifier(self) -> &'static [u8] {
        match self {
            Self::Error => ERROR,
            Self::HandoverRequest => HANDOVER_REQUEST,
            Self::HandoverSelect => HANDOVER_SELECT,
            Self::HandoverCarrier => HANDOVER_CARRIER,
            Self::CollisionResolution => COLLISION_RESOLUTION,
            Self::AlternativeCarrier => ALTERNATIVE_CARRIER,
        }
    }

    /// Look up a record type by its identifier, `None` for anything unrecognized
    pub fn from_type_identifier(type_: &[u8]) -> Option<Self> {
        match type_ {
            ERROR => Some(Self::Error),
            HANDOVER_REQUEST => Some(Self::HandoverRequest),
            HANDOVER_SELECT => Some(Self::HandoverSelect),
            HANDOVER_CARRIER => Some(Self::HandoverCarrier),
            COLLISION_RESOLUTION => Some(Self::CollisionResolution),
            ALTERNATIVE_CARRIER => Some(Self::AlternativeCarrier),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn type_identifiers_match_the_nfc_forum_bytes() {
        assert_eq!(ERROR, &[0x65, 0x72, 0x72]);
        assert_eq!(HANDOVER_REQUEST, &[0x48, 0x72]);
    }

    #[test]
    fn lookup_is_the_inverse_of_type_identifier() {
        for record_type in RecordType::iter() {
            let type_ = record_type.type_identifier();
            assert_eq!(RecordType::from_type_identifier(type_), Some(record_type));
        }
    }

    #[test]
    fn unknown_identifiers_are_not_matched() {
        assert_eq!(RecordType::from_type_identifier(b"T"), None);
        assert_eq!(RecordType::from_type_identifier(b"hr"), None);
        assert_eq!(RecordType::from_type_identifier(b""), None);
    }
}
