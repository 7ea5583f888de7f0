//! ZCash BLS12-381 point encoding.
//!
//! The three most significant bits of the first byte carry flags:
//!
//! | bit | meaning |
//! |---|---|
//! | 7 | compressed (`x` only) |
//! | 6 | point at infinity (rest of the buffer zero) |
//! | 5 | `y` is the lexicographically largest root (compressed only) |
//!
//! Fp2 coordinates are written `c1 ‖ c0`, so the flags live in the top byte
//! of `x.c1` for G2. The layout needs three spare bits above the modulus.

use crate::codec::compress::{RootConvention, recover_y, sign_of};
use crate::codec::header::Flags;
use crate::codec::{
    Encoded, Format, WireFormat, coordinate_len, point_type, put_coordinate, take_coordinate,
};
use crate::errors::Error;
use crate::{CoordinateField, CurvePoint, FieldElement};

const COMPRESSION_BIT: u8 = 0x80;
const INFINITY_BIT: u8 = 0x40;
const SIGN_BIT: u8 = 0x20;
const FLAG_MASK: u8 = COMPRESSION_BIT | INFINITY_BIT | SIGN_BIT;

pub struct Zcash;

impl WireFormat for Zcash {
    const FORMAT: Format = Format::Zcash;

    fn encode_point<F: FieldElement, P: CurvePoint<F>>(
        point: &P,
        compress: bool,
    ) -> Result<Encoded, Error> {
        encode_flagged(point, compress, Self::FORMAT)
    }

    fn decode_point<F: FieldElement, P: CurvePoint<F>>(bytes: &[u8]) -> Result<(P, Flags), Error> {
        decode_flagged(bytes)
    }
}

/// Encodes a point in the flag-bit layout shared by ZCash and IETF.
pub(crate) fn encode_flagged<F: FieldElement, P: CurvePoint<F>>(
    point: &P,
    compress: bool,
    format: Format,
) -> Result<Encoded, Error> {
    let n = coordinate_len::<P::Coordinate>();
    let len = if compress { n } else { 2 * n };
    let compression = if compress { COMPRESSION_BIT } else { 0 };

    let Some((x, y)) = point.coordinates() else {
        let mut out = vec![0u8; len];
        out[0] = compression | INFINITY_BIT;
        let flags = Flags {
            compressed: compress,
            infinity: true,
            ..Flags::default()
        };
        return Ok((out, flags));
    };

    let mut out = Vec::with_capacity(len);
    put_coordinate(&mut out, &x);
    if out[0] & FLAG_MASK != 0 {
        return Err(Error::UnsupportedCombination {
            format,
            element: point_type::<P::Coordinate>(),
        });
    }
    if compress {
        let sign = sign_of(&y, RootConvention::Lexicographic);
        out[0] |= compression | if sign { SIGN_BIT } else { 0 };
        let flags = Flags {
            compressed: true,
            y_sign: sign,
            ..Flags::default()
        };
        Ok((out, flags))
    } else {
        put_coordinate(&mut out, &y);
        Ok((out, Flags::default()))
    }
}

/// Decodes the flag-bit layout, validating curve and subgroup membership.
pub(crate) fn decode_flagged<F: FieldElement, P: CurvePoint<F>>(
    bytes: &[u8],
) -> Result<(P, Flags), Error> {
    let first = *bytes.first().ok_or(Error::InvalidEncoding("empty input"))?;
    let compressed = first & COMPRESSION_BIT != 0;
    let infinity = first & INFINITY_BIT != 0;
    let sign = first & SIGN_BIT != 0;

    let n = coordinate_len::<P::Coordinate>();
    let expected = if compressed { n } else { 2 * n };
    if bytes.len() != expected {
        return Err(Error::InvalidEncoding("wrong length"));
    }

    let mut body = bytes.to_vec();
    body[0] &= !FLAG_MASK;

    if infinity {
        if sign || body.iter().any(|b| *b != 0) {
            return Err(Error::InvalidEncoding("non-canonical infinity"));
        }
        let flags = Flags {
            compressed,
            infinity: true,
            ..Flags::default()
        };
        return Ok((P::identity(), flags));
    }
    if !compressed && sign {
        return Err(Error::InvalidEncoding("sign bit on uncompressed point"));
    }

    let x: P::Coordinate = take_coordinate(&body[..n])?;
    let y = if compressed {
        let (a, b) = P::curve_coefficients();
        recover_y(&x, &a, &b, sign, RootConvention::Lexicographic)?
    } else {
        take_coordinate(&body[n..])?
    };
    let point = P::from_coordinates(x, y)?;
    let flags = Flags {
        compressed,
        y_sign: sign,
        ..Flags::default()
    };
    Ok((point, flags))
}
