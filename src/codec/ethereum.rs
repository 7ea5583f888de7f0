//! Ethereum alt_bn128 precompile layout (EIP-196, EIP-197).
//!
//! Uncompressed only, 32-byte big-endian field elements:
//! G1 is `x ‖ y`, G2 is `x.c1 ‖ x.c0 ‖ y.c1 ‖ y.c0`. The point at infinity is
//! the all-zero buffer of the same size.

use crate::codec::header::Flags;
use crate::codec::{
    Encoded, Format, WireFormat, coordinate_len, point_type, put_coordinate, take_coordinate,
};
use crate::errors::Error;
use crate::{CoordinateField, CurvePoint, FieldElement};

/// Field element width fixed by the precompiles.
const WORD: usize = 32;

pub struct Ethereum;

impl Ethereum {
    fn check_width<C: CoordinateField>() -> Result<usize, Error> {
        if <C::Base as FieldElement>::byte_len() != WORD {
            return Err(Error::UnsupportedCombination {
                format: Self::FORMAT,
                element: point_type::<C>(),
            });
        }
        Ok(coordinate_len::<C>())
    }
}

impl WireFormat for Ethereum {
    const FORMAT: Format = Format::Ethereum;

    fn encode_point<F: FieldElement, P: CurvePoint<F>>(
        point: &P,
        compress: bool,
    ) -> Result<Encoded, Error> {
        let n = Self::check_width::<P::Coordinate>()?;
        if compress {
            return Err(Error::UnsupportedCombination {
                format: Self::FORMAT,
                element: point_type::<P::Coordinate>(),
            });
        }
        match point.coordinates() {
            None => {
                let flags = Flags {
                    infinity: true,
                    ..Flags::default()
                };
                Ok((vec![0u8; 2 * n], flags))
            }
            Some((x, y)) => {
                let mut out = Vec::with_capacity(2 * n);
                put_coordinate(&mut out, &x);
                put_coordinate(&mut out, &y);
                Ok((out, Flags::default()))
            }
        }
    }

    fn decode_point<F: FieldElement, P: CurvePoint<F>>(bytes: &[u8]) -> Result<(P, Flags), Error> {
        let n = Self::check_width::<P::Coordinate>()?;
        if bytes.len() != 2 * n {
            return Err(Error::InvalidEncoding("wrong length"));
        }
        if bytes.iter().all(|b| *b == 0) {
            let flags = Flags {
                infinity: true,
                ..Flags::default()
            };
            return Ok((P::identity(), flags));
        }
        let (xb, yb) = bytes.split_at(n);
        let point = P::from_coordinates(take_coordinate(xb)?, take_coordinate(yb)?)?;
        Ok((point, Flags::default()))
    }
}
