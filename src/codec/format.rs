//! Wire format identifiers and per-format capability rules.

use serde::{Deserialize, Serialize};

use crate::codec::ElementType;
use crate::errors::Error;
use crate::registry::{CurveFamily, CurveId};

/// Wire formats, with their header byte.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Format {
    /// Backend-native encoding used before the header existed.
    Legacy = 0x00,
    /// SEC 1 v2 §2.3.3 octet strings.
    Sec1 = 0x01,
    /// ZCash BLS12-381 encoding with flag bits in the top byte.
    Zcash = 0x02,
    /// Ethereum alt_bn128 precompile layout (EIP-196/197).
    Ethereum = 0x03,
    /// IETF pairing-friendly curves draft, including GT.
    Ietf = 0x04,
    /// Resolved to a concrete format before encoding; never on the wire.
    Auto = 0xFF,
}

impl Format {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parses a header format byte. `Auto` is rejected.
    pub fn from_byte(byte: u8) -> Result<Self, Error> {
        match byte {
            0x00 => Ok(Format::Legacy),
            0x01 => Ok(Format::Sec1),
            0x02 => Ok(Format::Zcash),
            0x03 => Ok(Format::Ethereum),
            0x04 => Ok(Format::Ietf),
            0xFF => Err(Error::MalformedHeader("AUTO format on the wire")),
            _ => Err(Error::MalformedHeader("unknown format")),
        }
    }

    /// Whether points are compressed when the caller does not say.
    pub fn default_compression(self) -> bool {
        match self {
            Format::Sec1 | Format::Zcash | Format::Ietf | Format::Legacy => true,
            Format::Ethereum | Format::Auto => false,
        }
    }

    /// Resolves `Auto` for `element_type` on `curve`.
    ///
    /// GT has a standard encoding only in the IETF format, so automatic
    /// selection sends it there whatever the curve family.
    pub fn resolve(self, curve: CurveId, element_type: ElementType) -> Format {
        match (self, element_type) {
            (Format::Auto, ElementType::Gt) => Format::Ietf,
            (Format::Auto, _) => select_format(curve),
            (format, _) => format,
        }
    }

    /// Decides compression for one element, rejecting explicit requests the
    /// format cannot honour.
    pub fn compression_for(
        self,
        element_type: ElementType,
        requested: Option<bool>,
    ) -> Result<bool, Error> {
        let unsupported = Error::UnsupportedCombination {
            format: self,
            element: element_type,
        };
        match (self, element_type) {
            (_, ElementType::Zp) => Ok(false),
            (Format::Legacy, _) => Ok(true),
            (Format::Sec1, ElementType::G2) | (Format::Ethereum, _) => match requested {
                Some(true) => Err(unsupported),
                _ => Ok(false),
            },
            (Format::Auto, _) => Err(Error::InvalidConfig("AUTO format must be resolved first")),
            _ => Ok(requested.unwrap_or_else(|| self.default_compression())),
        }
    }

    /// Whether this format defines an encoding of `element_type` on `curve`.
    ///
    /// ZCash-style point flags need three spare bits above the field modulus
    /// and the Ethereum layout is defined for 32-byte base fields only. GT has
    /// an encoding in the IETF and legacy formats alone.
    pub fn supports(self, curve: CurveId, element_type: ElementType) -> bool {
        let descriptor = curve.descriptor();
        let spare_bits = descriptor.field_bits as usize + 3 <= descriptor.field_bytes() * 8;
        match (self, element_type) {
            (Format::Auto | Format::Legacy, _) => true,
            (Format::Ethereum, ElementType::Gt) => false,
            (Format::Ethereum, _) => descriptor.field_bytes() == 32,
            (Format::Sec1 | Format::Zcash, ElementType::Gt) => false,
            (Format::Zcash | Format::Ietf, ElementType::G1 | ElementType::G2) => spare_bits,
            _ => true,
        }
    }
}

/// Fixed format choice per curve family.
///
/// BN curves use the Ethereum layout, BLS12 curves the ZCash layout and NIST
/// prime curves SEC 1.
pub fn select_format(curve: CurveId) -> Format {
    match curve.family() {
        CurveFamily::Bn => Format::Ethereum,
        CurveFamily::Bls12 => Format::Zcash,
        CurveFamily::NistPrime => Format::Sec1,
    }
}
