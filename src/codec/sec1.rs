//! SEC 1 v2 §2.3.3 octet strings.
//!
//! | Element | Encoding |
//! |---|---|
//! | identity | `0x00` |
//! | compressed G1 | `0x02 \| x` (even y) or `0x03 \| x` (odd y) |
//! | uncompressed G1/G2 | `0x04 \| x \| y` |
//!
//! Extension-field coordinates are written `c1 ‖ c0`. SEC 1 defines no
//! compressed form for G2 and nothing for GT.

use crate::codec::compress::{RootConvention, recover_y, sign_of};
use crate::codec::header::Flags;
use crate::codec::{
    Encoded, Format, WireFormat, coordinate_len, point_type, put_coordinate, take_coordinate,
};
use crate::errors::Error;
use crate::{CoordinateField, CurvePoint, FieldElement};

const TAG_INFINITY: u8 = 0x00;
const TAG_EVEN: u8 = 0x02;
const TAG_ODD: u8 = 0x03;
const TAG_UNCOMPRESSED: u8 = 0x04;

pub struct Sec1;

impl Sec1 {
    fn no_compressed_form<C: CoordinateField>() -> Error {
        Error::UnsupportedCombination {
            format: Self::FORMAT,
            element: point_type::<C>(),
        }
    }
}

impl WireFormat for Sec1 {
    const FORMAT: Format = Format::Sec1;

    fn encode_point<F: FieldElement, P: CurvePoint<F>>(
        point: &P,
        compress: bool,
    ) -> Result<Encoded, Error> {
        let Some((x, y)) = point.coordinates() else {
            let flags = Flags {
                infinity: true,
                ..Flags::default()
            };
            return Ok((vec![TAG_INFINITY], flags));
        };
        let n = coordinate_len::<P::Coordinate>();
        if compress {
            if P::Coordinate::DEGREE != 1 {
                return Err(Self::no_compressed_form::<P::Coordinate>());
            }
            let odd = sign_of(&y, RootConvention::Parity);
            let mut out = Vec::with_capacity(1 + n);
            out.push(if odd { TAG_ODD } else { TAG_EVEN });
            put_coordinate(&mut out, &x);
            let flags = Flags {
                compressed: true,
                y_sign: odd,
                ..Flags::default()
            };
            Ok((out, flags))
        } else {
            let mut out = Vec::with_capacity(1 + 2 * n);
            out.push(TAG_UNCOMPRESSED);
            put_coordinate(&mut out, &x);
            put_coordinate(&mut out, &y);
            Ok((out, Flags::default()))
        }
    }

    fn decode_point<F: FieldElement, P: CurvePoint<F>>(bytes: &[u8]) -> Result<(P, Flags), Error> {
        let (&tag, body) = bytes
            .split_first()
            .ok_or(Error::InvalidEncoding("empty input"))?;
        let n = coordinate_len::<P::Coordinate>();
        match tag {
            TAG_INFINITY if body.is_empty() => {
                let flags = Flags {
                    infinity: true,
                    ..Flags::default()
                };
                Ok((P::identity(), flags))
            }
            TAG_EVEN | TAG_ODD => {
                if P::Coordinate::DEGREE != 1 {
                    return Err(Self::no_compressed_form::<P::Coordinate>());
                }
                if body.len() != n {
                    return Err(Error::InvalidEncoding("wrong length"));
                }
                let x: P::Coordinate = take_coordinate(body)?;
                let (a, b) = P::curve_coefficients();
                let odd = tag == TAG_ODD;
                let y = recover_y(&x, &a, &b, odd, RootConvention::Parity)?;
                let point = P::from_coordinates(x, y)?;
                let flags = Flags {
                    compressed: true,
                    y_sign: odd,
                    ..Flags::default()
                };
                Ok((point, flags))
            }
            TAG_UNCOMPRESSED => {
                if body.len() != 2 * n {
                    return Err(Error::InvalidEncoding("wrong length"));
                }
                let (xb, yb) = body.split_at(n);
                let point = P::from_coordinates(take_coordinate(xb)?, take_coordinate(yb)?)?;
                Ok((point, Flags::default()))
            }
            _ => Err(Error::InvalidEncoding("unknown SEC1 tag")),
        }
    }
}
