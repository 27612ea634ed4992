/// The 3-bit type name format (TNF) of an NDEF record header
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NdefType {
    Empty,
    WellKnown,
    Mime,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl NdefType {
    /// Only the low 3 bits are read, every value maps to a TNF
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::Mime,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

impl From<NdefType> for u8 {
    fn from(tnf: NdefType) -> Self {
        match tnf {
            NdefType::Empty => 0,
            NdefType::WellKnown => 1,
            NdefType::Mime => 2,
            NdefType::AbsoluteUri => 3,
            NdefType::External => 4,
            NdefType::Unknown => 5,
            NdefType::Unchanged => 6,
            NdefType::Reserved => 7,
        }
    }
}
