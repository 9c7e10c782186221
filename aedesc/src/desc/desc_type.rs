use derive_more::{Deref, From};
use std::fmt;

/// A four-character code, the atom of descriptor typing. One alias per role:
/// [`DescType`] tags descriptors, [`AEKeyword`] keys record fields.
///
/// Stored as the big-endian interpretation of the four bytes, so that
/// ordering and hashing follow the canonical byte order.
#[derive(From, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct OSType(u32);

pub type DescType = OSType;
pub type AEKeyword = OSType;

impl OSType {
    pub const fn new(code: [u8; 4]) -> Self {
        Self(u32::from_be_bytes(code))
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for OSType {
    /// The four characters themselves when printable ASCII, else hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_bytes();
        if bytes.iter().all(|b| (0x20..=0x7e).contains(b)) {
            for b in bytes {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "0x{:08x}", self.0)
        }
    }
}

impl fmt::Debug for OSType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OSType({self})")
    }
}

/* Sentinels. */
pub const TYPE_NULL: DescType = OSType::new(*b"null");
pub const TYPE_TRUE: DescType = OSType::new(*b"true");
pub const TYPE_FALSE: DescType = OSType::new(*b"fals");
pub const TYPE_BOOLEAN: DescType = OSType::new(*b"bool");

/* Integers. */
pub const TYPE_SINT16: DescType = OSType::new(*b"shor");
pub const TYPE_SINT32: DescType = OSType::new(*b"long");
pub const TYPE_SINT64: DescType = OSType::new(*b"comp");
pub const TYPE_UINT16: DescType = OSType::new(*b"ushr");
pub const TYPE_UINT32: DescType = OSType::new(*b"magn");
pub const TYPE_UINT64: DescType = OSType::new(*b"ucom");

/* IEEE floating point. */
pub const TYPE_IEEE32_BIT_FLOATING_POINT: DescType = OSType::new(*b"sing");
pub const TYPE_IEEE64_BIT_FLOATING_POINT: DescType = OSType::new(*b"doub");

/* Text. */
pub const TYPE_UTF8_TEXT: DescType = OSType::new(*b"utf8");
pub const TYPE_UTF16_EXTERNAL_REPRESENTATION: DescType = OSType::new(*b"ut16");
pub const TYPE_UNICODE_TEXT: DescType = OSType::new(*b"utxt");

/* Dates and files. */
pub const TYPE_LONG_DATE_TIME: DescType = OSType::new(*b"ldt ");
pub const TYPE_FILE_URL: DescType = OSType::new(*b"furl");

/* Type codes and enumerations. */
pub const TYPE_TYPE: DescType = OSType::new(*b"type");
pub const TYPE_PROPERTY: DescType = OSType::new(*b"prop");
pub const TYPE_KEYWORD: DescType = OSType::new(*b"keyw");
pub const TYPE_ENUMERATED: DescType = OSType::new(*b"enum");
pub const TYPE_ABSOLUTE_ORDINAL: DescType = OSType::new(*b"abso");

/* Containers. */
pub const TYPE_AE_LIST: DescType = OSType::new(*b"list");
pub const TYPE_AE_RECORD: DescType = OSType::new(*b"reco");

/// The reserved code carried by the missing-value sentinel, inside a
/// `typeType` scalar payload.
pub const MISSING_VALUE: OSType = OSType::new(*b"msng");

/// Magic at the head of every flattened stream.
pub const FORMAT_DLE2: OSType = OSType::new(*b"dle2");
