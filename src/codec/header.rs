//! The 9-byte self-describing serialization header.
//!
//! ```text
//! MAGIC(4) = "OABE" | VERSION(1) | ELEM_TYPE(1) | CURVE_ID(1) | FORMAT(1) | FLAGS(1)
//! ```
//!
//! There is no length prefix; the payload length follows from the element
//! type, curve and format.

use crate::codec::{ElementType, Format};
use crate::errors::Error;
use crate::registry::{self, CurveId};

/// Header magic. Its absence marks legacy (pre-header) data.
pub const MAGIC: [u8; 4] = *b"OABE";

/// Current header version. Decoders accept this version and all older ones.
pub const VERSION: u8 = 2;

/// Encoded header length.
pub const HEADER_LEN: usize = 9;

/// Flag byte of the header.
///
/// `bit7` compression, `bit6` infinity, `bit5` y-sign, `bit4` cyclotomic GT
/// compression; bits 3–0 are reserved and must be zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Flags {
    pub compressed: bool,
    pub infinity: bool,
    pub y_sign: bool,
    pub cyclotomic: bool,
}

impl Flags {
    pub const COMPRESSED: u8 = 0x80;
    pub const INFINITY: u8 = 0x40;
    pub const Y_SIGN: u8 = 0x20;
    pub const CYCLOTOMIC: u8 = 0x10;
    pub const RESERVED: u8 = 0x0F;

    pub fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.compressed {
            byte |= Self::COMPRESSED;
        }
        if self.infinity {
            byte |= Self::INFINITY;
        }
        if self.y_sign {
            byte |= Self::Y_SIGN;
        }
        if self.cyclotomic {
            byte |= Self::CYCLOTOMIC;
        }
        byte
    }

    pub fn from_byte(byte: u8) -> Result<Self, Error> {
        if byte & Self::RESERVED != 0 {
            return Err(Error::MalformedHeader("reserved flag bits set"));
        }
        Ok(Self {
            compressed: byte & Self::COMPRESSED != 0,
            infinity: byte & Self::INFINITY != 0,
            y_sign: byte & Self::Y_SIGN != 0,
            cyclotomic: byte & Self::CYCLOTOMIC != 0,
        })
    }
}

/// Decoded header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub version: u8,
    pub element_type: ElementType,
    pub curve: CurveId,
    pub format: Format,
    pub flags: Flags,
}

impl Header {
    /// Header for a freshly encoded element at the current version.
    pub fn new(element_type: ElementType, curve: CurveId, format: Format, flags: Flags) -> Self {
        Self {
            version: VERSION,
            element_type,
            curve,
            format,
            flags,
        }
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[..4].copy_from_slice(&MAGIC);
        out[4] = self.version;
        out[5] = self.element_type.as_byte();
        out[6] = self.curve.as_byte();
        out[7] = self.format.as_byte();
        out[8] = self.flags.to_byte();
        out
    }

    /// Parses the header at the start of `bytes`, returning it and the payload.
    pub fn parse(bytes: &[u8]) -> Result<(Self, &[u8]), Error> {
        if bytes.len() < HEADER_LEN {
            return Err(Error::MalformedHeader("truncated header"));
        }
        let (head, payload) = bytes.split_at(HEADER_LEN);
        if head[..4] != MAGIC {
            return Err(Error::MalformedHeader("bad magic"));
        }
        let version = head[4];
        if version > VERSION {
            return Err(Error::UnsupportedVersion {
                found: version,
                supported: VERSION,
            });
        }
        let element_type = ElementType::from_byte(head[5])?;
        let curve = registry::ensure_decodable(head[6])?.id;
        let format = Format::from_byte(head[7])?;
        let flags = Flags::from_byte(head[8])?;
        Ok((
            Self {
                version,
                element_type,
                curve,
                format,
                flags,
            },
            payload,
        ))
    }
}

/// True iff `bytes` does not start with the header magic (short input
/// included).
pub fn is_legacy(bytes: &[u8]) -> bool {
    !bytes.starts_with(&MAGIC)
}
