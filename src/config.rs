//! Encoding configuration.
//!
//! # Example
//!
//! ```rust
//! use abe_codec::{CodecConfig, CurveId, Format};
//!
//! // Uncompressed points in the Ethereum precompile layout, no header
//! let config = CodecConfig::new(Format::Ethereum, Some(false), false);
//! assert_eq!(config.validate(CurveId::BnP254).expect("valid"), Format::Ethereum);
//! ```

use serde::{Deserialize, Serialize};

use crate::codec::{ElementType, Format};
use crate::errors::Error;
use crate::registry::CurveId;

/// How elements are written by [`serialize_with`](crate::codec::serialize_with).
///
/// `compress: None` means the format's default (see
/// [`Format::default_compression`]). Scalars ignore it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Target format. `Auto` picks one from the curve family.
    pub format: Format,
    /// Explicit compression request for points and GT.
    #[serde(default)]
    pub compress: Option<bool>,
    /// Prefix the 9-byte header.
    pub with_header: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            format: Format::Auto,
            compress: None,
            with_header: true,
        }
    }
}

impl CodecConfig {
    pub fn new(format: Format, compress: Option<bool>, with_header: bool) -> Self {
        Self {
            format,
            compress,
            with_header,
        }
    }

    /// Resolves the point format for `curve` and checks it can be honoured.
    ///
    /// GT always resolves to IETF under `Auto` and is checked per element at
    /// encode time; this validates the G1/G2 path.
    ///
    /// ```rust
    /// use abe_codec::{CodecConfig, CurveId, Error, Format};
    ///
    /// let config = CodecConfig::new(Format::Ethereum, Some(true), true);
    /// assert!(matches!(config.validate(CurveId::BnP254), Err(Error::InvalidConfig(_))));
    /// ```
    pub fn validate(&self, curve: CurveId) -> Result<Format, Error> {
        let format = self.format.resolve(curve, ElementType::G1);
        if !format.supports(curve, ElementType::G1) {
            return Err(match format {
                Format::Ethereum => {
                    Error::InvalidConfig("Ethereum layout needs a 32-byte base field")
                }
                _ => Error::InvalidConfig("format flag bits do not fit the curve's field"),
            });
        }
        match (format, self.compress) {
            (Format::Ethereum, Some(true)) => {
                Err(Error::InvalidConfig("Ethereum layout has no compressed form"))
            }
            _ => Ok(format),
        }
    }
}
