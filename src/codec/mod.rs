//! Standard serialization of field and group elements.
//!
//! Elements are encoded in one of the wire formats of [`Format`], optionally
//! behind the 9-byte [`Header`]. Decoding never trusts the bytes: every
//! component is range-checked, every point is checked against the curve
//! equation and the prime-order subgroup, and compressed points are
//! recovered through the square-root engine in [`compress`].
//!
//! | Format | Zp | G1 | G2 | GT |
//! |---|---|---|---|---|
//! | [`Sec1`] | BE | `02/03 \| x`, `04 \| x \| y` | `04 \| x \| y` | — |
//! | [`Zcash`] | BE | flag bits \| x (\| y) | flag bits \| x1 x0 (\| y1 y0) | — |
//! | [`Ethereum`] | BE | `x ‖ y` | `x1 ‖ x0 ‖ y1 ‖ y0` | — |
//! | [`Ietf`] | BE | as ZCash | as ZCash | 12 or 8 Fp (cyclotomic) |
//! | [`Legacy`] | LE | backend native | backend native | backend native |
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "ark_bn254")]
//! # {
//! use abe_codec::codec::{self, Element, ElementType, Format};
//! use abe_codec::{Bn254Engine, CurvePoint, PairingBackend};
//!
//! let g = <Bn254Engine as PairingBackend>::G1::generator();
//! let bytes = codec::serialize(&Element::<Bn254Engine>::G1(g), Format::Ethereum, true)?;
//! assert_eq!(bytes.len(), 9 + 64);
//!
//! let back = codec::deserialize::<Bn254Engine>(&bytes, true, ElementType::G1)?;
//! assert_eq!(back, Element::G1(g));
//! # }
//! # Ok::<(), abe_codec::Error>(())
//! ```

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

pub mod compress;
mod ethereum;
mod format;
pub mod header;
mod ietf;
mod legacy;
mod sec1;
mod zcash;

pub use ethereum::Ethereum;
pub use format::{Format, select_format};
pub use header::{Flags, HEADER_LEN, Header, MAGIC, VERSION, is_legacy};
pub use ietf::Ietf;
pub use legacy::{Legacy, convert_legacy_to_standard};
pub use sec1::Sec1;
pub use zcash::Zcash;

pub use crate::config::CodecConfig;
use crate::errors::Error;
use crate::{CoordinateField, CurvePoint, FieldElement, PairingBackend, TargetGroup};

/// Element type codes carried in the header.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum ElementType {
    /// Scalar modulo the group order `r`.
    Zp = 0xB1,
    G1 = 0xB2,
    G2 = 0xB3,
    Gt = 0xB4,
}

impl ElementType {
    pub const fn as_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(byte: u8) -> Result<Self, Error> {
        match byte {
            0xB1 => Ok(ElementType::Zp),
            0xB2 => Ok(ElementType::G1),
            0xB3 => Ok(ElementType::G2),
            0xB4 => Ok(ElementType::Gt),
            _ => Err(Error::MalformedHeader("unknown element type")),
        }
    }
}

/// Any serializable element of a pairing engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Element<B: PairingBackend> {
    Zp(B::Scalar),
    G1(B::G1),
    G2(B::G2),
    Gt(B::Target),
}

impl<B: PairingBackend> Element<B> {
    pub fn element_type(&self) -> ElementType {
        match self {
            Element::Zp(_) => ElementType::Zp,
            Element::G1(_) => ElementType::G1,
            Element::G2(_) => ElementType::G2,
            Element::Gt(_) => ElementType::Gt,
        }
    }
}

/// Encoded payload and the header flags describing it.
pub(crate) type Encoded = (Vec<u8>, Flags);

/// One wire format.
///
/// Scalars default to fixed-width big-endian and GT to unsupported; formats
/// override what they define. Decoders report the flags of what they actually
/// parsed so the header can be cross-checked.
pub(crate) trait WireFormat {
    const FORMAT: Format;

    fn encode_zp<F: FieldElement>(scalar: &F) -> Vec<u8> {
        scalar.to_bytes_be()
    }

    fn decode_zp<F: FieldElement>(bytes: &[u8]) -> Result<F, Error> {
        Ok(F::from_bytes_be(bytes)?)
    }

    fn encode_point<F: FieldElement, P: CurvePoint<F>>(
        point: &P,
        compress: bool,
    ) -> Result<Encoded, Error>;

    fn decode_point<F: FieldElement, P: CurvePoint<F>>(bytes: &[u8]) -> Result<(P, Flags), Error>;

    fn encode_gt<T: TargetGroup>(_gt: &T, _compress: bool) -> Result<Encoded, Error> {
        Err(Error::UnsupportedCombination {
            format: Self::FORMAT,
            element: ElementType::Gt,
        })
    }

    fn decode_gt<T: TargetGroup>(_bytes: &[u8]) -> Result<(T, Flags), Error> {
        Err(Error::UnsupportedCombination {
            format: Self::FORMAT,
            element: ElementType::Gt,
        })
    }
}

/// G1 or G2, judged by the coordinate field's degree.
pub(crate) fn point_type<C: CoordinateField>() -> ElementType {
    if C::DEGREE == 1 {
        ElementType::G1
    } else {
        ElementType::G2
    }
}

/// Encoded width of one coordinate.
pub(crate) fn coordinate_len<C: CoordinateField>() -> usize {
    C::DEGREE * <C::Base as FieldElement>::byte_len()
}

/// Appends a coordinate, highest coefficient first (`c1 ‖ c0` for Fp2).
pub(crate) fn put_coordinate<C: CoordinateField>(out: &mut Vec<u8>, value: &C) {
    for coeff in value.coefficients().iter().rev() {
        out.extend_from_slice(&coeff.to_bytes_be());
    }
}

/// Parses a coordinate written by [`put_coordinate`].
pub(crate) fn take_coordinate<C: CoordinateField>(bytes: &[u8]) -> Result<C, Error> {
    if bytes.len() != coordinate_len::<C>() {
        return Err(Error::InvalidEncoding("wrong length"));
    }
    let mut coeffs = bytes
        .chunks(<C::Base as FieldElement>::byte_len())
        .map(<C::Base as FieldElement>::from_bytes_be)
        .collect::<Result<Vec<_>, _>>()?;
    coeffs.reverse();
    Ok(C::from_coefficients(&coeffs)?)
}

fn encode_with<W: WireFormat, B: PairingBackend>(
    element: &Element<B>,
    compress: bool,
) -> Result<Encoded, Error> {
    match element {
        Element::Zp(s) => Ok((W::encode_zp(s), Flags::default())),
        Element::G1(p) => W::encode_point(p, compress),
        Element::G2(q) => W::encode_point(q, compress),
        Element::Gt(t) => W::encode_gt(t, compress),
    }
}

fn decode_with<W: WireFormat, B: PairingBackend>(
    bytes: &[u8],
    element_type: ElementType,
) -> Result<(Element<B>, Flags), Error> {
    match element_type {
        ElementType::Zp => Ok((Element::Zp(W::decode_zp(bytes)?), Flags::default())),
        ElementType::G1 => W::decode_point(bytes).map(|(p, f)| (Element::G1(p), f)),
        ElementType::G2 => W::decode_point(bytes).map(|(q, f)| (Element::G2(q), f)),
        ElementType::Gt => W::decode_gt(bytes).map(|(t, f)| (Element::Gt(t), f)),
    }
}

fn encode_element<B: PairingBackend>(
    element: &Element<B>,
    format: Format,
    compress: bool,
) -> Result<Encoded, Error> {
    match format {
        Format::Legacy => encode_with::<Legacy, B>(element, compress),
        Format::Sec1 => encode_with::<Sec1, B>(element, compress),
        Format::Zcash => encode_with::<Zcash, B>(element, compress),
        Format::Ethereum => encode_with::<Ethereum, B>(element, compress),
        Format::Ietf => encode_with::<Ietf, B>(element, compress),
        Format::Auto => Err(Error::InvalidConfig("AUTO format must be resolved first")),
    }
}

fn decode_payload<B: PairingBackend>(
    bytes: &[u8],
    element_type: ElementType,
    format: Format,
) -> Result<(Element<B>, Flags), Error> {
    if !format.supports(B::CURVE, element_type) {
        return Err(Error::UnsupportedCombination {
            format,
            element: element_type,
        });
    }
    match format {
        Format::Legacy => decode_with::<Legacy, B>(bytes, element_type),
        Format::Sec1 => decode_with::<Sec1, B>(bytes, element_type),
        Format::Zcash => decode_with::<Zcash, B>(bytes, element_type),
        Format::Ethereum => decode_with::<Ethereum, B>(bytes, element_type),
        Format::Ietf => decode_with::<Ietf, B>(bytes, element_type),
        Format::Auto => Err(Error::InvalidConfig("AUTO format must be resolved first")),
    }
}

/// Serializes `element` in `format` with the format's default compression.
///
/// `Format::Auto` resolves through [`select_format`] (GT always goes to
/// IETF).
pub fn serialize<B: PairingBackend>(
    element: &Element<B>,
    format: Format,
    with_header: bool,
) -> Result<Vec<u8>, Error> {
    serialize_with(element, &CodecConfig::new(format, None, with_header))
}

/// Serializes `element` as described by `config`.
#[instrument(
    level = "trace",
    skip_all,
    fields(curve = ?B::CURVE, element = ?element.element_type(), format = ?config.format)
)]
pub fn serialize_with<B: PairingBackend>(
    element: &Element<B>,
    config: &CodecConfig,
) -> Result<Vec<u8>, Error> {
    let element_type = element.element_type();
    let format = config.format.resolve(B::CURVE, element_type);
    if !format.supports(B::CURVE, element_type) {
        return Err(Error::UnsupportedCombination {
            format,
            element: element_type,
        });
    }
    let compress = format.compression_for(element_type, config.compress)?;
    let (payload, flags) = encode_element(element, format, compress)?;
    if !config.with_header {
        return Ok(payload);
    }
    let header = Header::new(element_type, B::CURVE, format, flags);
    let mut out = Vec::with_capacity(HEADER_LEN + payload.len());
    out.extend_from_slice(&header.to_bytes());
    out.extend_from_slice(&payload);
    Ok(out)
}

/// Deserializes an element of type `expected`.
///
/// With a header, the header's curve must be this engine's curve, its element
/// type must be `expected` and its flags must match the payload. Without one,
/// the curve's automatic format is assumed and compression is read from the
/// payload itself.
#[instrument(
    level = "trace",
    skip_all,
    fields(curve = ?B::CURVE, element = ?expected, len = bytes.len(), has_header)
)]
pub fn deserialize<B: PairingBackend>(
    bytes: &[u8],
    has_header: bool,
    expected: ElementType,
) -> Result<Element<B>, Error> {
    let result = if has_header {
        decode_framed::<B>(bytes, expected)
    } else {
        let format = Format::Auto.resolve(B::CURVE, expected);
        decode_payload::<B>(bytes, expected, format).map(|(element, _)| element)
    };
    if let Err(err) = &result {
        debug!(kind = err.kind(), "element rejected");
    }
    result
}

/// Deserializes headerless bytes in an explicitly named format.
pub fn deserialize_as<B: PairingBackend>(
    bytes: &[u8],
    element_type: ElementType,
    format: Format,
) -> Result<Element<B>, Error> {
    let format = format.resolve(B::CURVE, element_type);
    decode_payload::<B>(bytes, element_type, format).map(|(element, _)| element)
}

fn decode_framed<B: PairingBackend>(
    bytes: &[u8],
    expected: ElementType,
) -> Result<Element<B>, Error> {
    let (header, payload) = Header::parse(bytes)?;
    if header.curve != B::CURVE {
        return Err(Error::CurveMismatch {
            expected: B::CURVE.as_byte(),
            found: header.curve.as_byte(),
        });
    }
    if header.element_type != expected {
        return Err(Error::InvalidEncoding("unexpected element type"));
    }
    let (element, flags) = decode_payload::<B>(payload, expected, header.format)?;
    if flags != header.flags {
        return Err(Error::InvalidEncoding("header flags disagree with payload"));
    }
    Ok(element)
}

/// Serializes independent elements in parallel; fails on the first error.
#[instrument(level = "trace", skip_all, fields(len = elements.len()))]
pub fn serialize_batch<B: PairingBackend>(
    elements: &[Element<B>],
    config: &CodecConfig,
) -> Result<Vec<Vec<u8>>, Error> {
    elements
        .par_iter()
        .map(|element| serialize_with(element, config))
        .collect()
}

/// Deserializes independent buffers in parallel; fails on the first error.
#[instrument(level = "trace", skip_all, fields(len = items.len()))]
pub fn deserialize_batch<B, T>(
    items: &[T],
    has_header: bool,
    expected: ElementType,
) -> Result<Vec<Element<B>>, Error>
where
    B: PairingBackend,
    T: AsRef<[u8]> + Sync,
{
    items
        .par_iter()
        .map(|bytes| deserialize::<B>(bytes.as_ref(), has_header, expected))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn sample<B: PairingBackend>(rng: &mut StdRng) -> Vec<Element<B>> {
        vec![
            Element::Zp(B::Scalar::random(rng)),
            Element::Zp(B::Scalar::zero()),
            Element::G1(B::G1::random(rng)),
            Element::G1(B::G1::identity()),
            Element::G2(B::G2::random(rng)),
            Element::G2(B::G2::identity()),
            Element::Gt(B::Target::random(rng)),
            Element::Gt(B::Target::identity()),
        ]
    }

    const FORMATS: [Format; 6] = [
        Format::Legacy,
        Format::Sec1,
        Format::Zcash,
        Format::Ethereum,
        Format::Ietf,
        Format::Auto,
    ];

    fn round_trip_every_combination<B: PairingBackend>(rng: &mut StdRng) {
        for element in sample::<B>(rng) {
            let element_type = element.element_type();
            for format in FORMATS {
                let resolved = format.resolve(B::CURVE, element_type);
                for compress in [None, Some(false), Some(true)] {
                    let config = CodecConfig::new(format, compress, true);
                    let encoded = serialize_with(&element, &config);
                    if !resolved.supports(B::CURVE, element_type) {
                        assert!(matches!(
                            encoded,
                            Err(Error::UnsupportedCombination { .. })
                        ));
                        continue;
                    }
                    let Ok(bytes) = encoded else {
                        // explicit compression the format cannot express
                        assert_eq!(compress, Some(true));
                        continue;
                    };
                    assert_eq!(bytes[7], resolved.as_byte());
                    let back: Element<B> =
                        deserialize(&bytes, true, element_type).expect("framed decode");
                    assert_eq!(back, element, "{resolved:?} {element_type:?} {compress:?}");

                    let headerless =
                        serialize_with(&element, &CodecConfig::new(format, compress, false))
                            .expect("headerless encode");
                    assert_eq!(headerless, bytes[HEADER_LEN..]);
                    let back: Element<B> = deserialize_as(&headerless, element_type, resolved)
                        .expect("payload decode");
                    assert_eq!(back, element);
                }
            }
        }
    }

    fn headerless_uses_auto_format<B: PairingBackend>(rng: &mut StdRng) {
        for element in sample::<B>(rng) {
            for compress in [None, Some(false)] {
                let config = CodecConfig::new(Format::Auto, compress, false);
                let bytes = serialize_with(&element, &config).expect("encode");
                let back: Element<B> =
                    deserialize(&bytes, false, element.element_type()).expect("decode");
                assert_eq!(back, element);
            }
        }
    }

    fn header_mismatches_rejected<B: PairingBackend>(rng: &mut StdRng) {
        let element = Element::<B>::G1(B::G1::random(rng));
        let bytes = serialize(&element, Format::Auto, true).expect("encode");

        assert!(matches!(
            deserialize::<B>(&bytes, true, ElementType::G2),
            Err(Error::InvalidEncoding(_))
        ));

        let mut flipped = bytes.clone();
        flipped[8] ^= Flags::INFINITY;
        assert!(matches!(
            deserialize::<B>(&flipped, true, ElementType::G1),
            Err(Error::InvalidEncoding(_))
        ));

        let mut reserved = bytes.clone();
        reserved[8] |= 0x01;
        assert!(matches!(
            deserialize::<B>(&reserved, true, ElementType::G1),
            Err(Error::MalformedHeader(_))
        ));

        let mut future = bytes.clone();
        future[4] = VERSION + 1;
        assert!(matches!(
            deserialize::<B>(&future, true, ElementType::G1),
            Err(Error::UnsupportedVersion { .. })
        ));

        let mut other_curve = bytes.clone();
        other_curve[6] = crate::registry::CurveId::NistP256.as_byte();
        assert!(matches!(
            deserialize::<B>(&other_curve, true, ElementType::G1),
            Err(Error::CurveMismatch { .. })
        ));

        let mut corrupted = bytes;
        corrupted[0] = b'X';
        assert!(is_legacy(&corrupted));
        assert!(matches!(
            deserialize::<B>(&corrupted, true, ElementType::G1),
            Err(Error::MalformedHeader(_))
        ));
    }

    fn gt_outside_ietf_rejected<B: PairingBackend>(rng: &mut StdRng) {
        let gt = Element::<B>::Gt(B::Target::random(rng));
        for format in [Format::Sec1, Format::Zcash, Format::Ethereum] {
            assert!(matches!(
                serialize(&gt, format, true),
                Err(Error::UnsupportedCombination {
                    element: ElementType::Gt,
                    ..
                })
            ));
            assert!(matches!(
                deserialize_as::<B>(&[0u8; 64], ElementType::Gt, format),
                Err(Error::UnsupportedCombination { .. })
            ));
        }
    }

    fn scalar_range_checked<B: PairingBackend>() {
        let modulus = <B::Scalar as FieldElement>::modulus().to_bytes_be();
        assert!(matches!(
            deserialize_as::<B>(&modulus, ElementType::Zp, Format::Ietf),
            Err(Error::InvalidFieldElement)
        ));
        assert!(matches!(
            deserialize_as::<B>(&modulus[1..], ElementType::Zp, Format::Ietf),
            Err(Error::InvalidEncoding(_))
        ));
    }

    fn batches<B: PairingBackend>(rng: &mut StdRng) {
        let elements: Vec<Element<B>> = (0..16).map(|_| Element::G2(B::G2::random(rng))).collect();
        let config = CodecConfig::default();
        let encoded = serialize_batch(&elements, &config).expect("batch encode");
        let decoded: Vec<Element<B>> =
            deserialize_batch(&encoded, true, ElementType::G2).expect("batch decode");
        assert_eq!(decoded, elements);

        let mut broken = encoded;
        broken[5].truncate(HEADER_LEN + 1);
        assert!(deserialize_batch::<B, _>(&broken, true, ElementType::G2).is_err());
    }

    fn elements_are_plain_values<B: PairingBackend>(rng: &mut StdRng) {
        let elements = sample::<B>(rng);
        for (i, element) in elements.iter().enumerate() {
            let copy = *element;
            assert_eq!(copy, *element);
            assert_eq!(copy.element_type(), element.element_type());
            for other in &elements[i + 1..] {
                assert_ne!(copy, *other);
            }
        }
        let g1 = Element::<B>::G1(B::G1::generator());
        assert_ne!(g1, Element::G1(B::G1::generator().double()));
    }

    fn run_all<B: PairingBackend>(seed: u64) {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
        let mut rng = StdRng::seed_from_u64(seed);
        round_trip_every_combination::<B>(&mut rng);
        headerless_uses_auto_format::<B>(&mut rng);
        header_mismatches_rejected::<B>(&mut rng);
        gt_outside_ietf_rejected::<B>(&mut rng);
        scalar_range_checked::<B>();
        batches::<B>(&mut rng);
        elements_are_plain_values::<B>(&mut rng);
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn codec_bn254() {
        run_all::<crate::Bn254Engine>(71);
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn codec_bls12_381() {
        run_all::<crate::Bls12Engine>(72);
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn ethereum_generator_with_header() {
        use crate::Bn254Engine;
        let g = <Bn254Engine as PairingBackend>::G1::generator();
        let bytes = serialize(&Element::<Bn254Engine>::G1(g), Format::Auto, true).expect("encode");
        assert_eq!(&bytes[..HEADER_LEN], b"OABE\x02\xB2\x6F\x03\x00");
        let mut payload = [0u8; 64];
        payload[31] = 1;
        payload[63] = 2;
        assert_eq!(bytes[HEADER_LEN..], payload);

        let infinity: Element<Bn254Engine> =
            deserialize(&[0u8; 64], false, ElementType::G1).expect("decode");
        assert_eq!(
            infinity,
            Element::G1(<Bn254Engine as PairingBackend>::G1::identity())
        );
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn zcash_on_bn254_is_unsupported() {
        use crate::Bn254Engine;
        let g = <Bn254Engine as PairingBackend>::G1::generator();
        assert_eq!(
            serialize(&Element::<Bn254Engine>::G1(g), Format::Zcash, true),
            Err(Error::UnsupportedCombination {
                format: Format::Zcash,
                element: ElementType::G1
            })
        );
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn zcash_header_flags_mirror_payload() {
        use crate::Bls12Engine;
        let mut rng = StdRng::seed_from_u64(73);
        for _ in 0..16 {
            let p = <Bls12Engine as PairingBackend>::G1::random(&mut rng);
            let bytes =
                serialize(&Element::<Bls12Engine>::G1(p), Format::Zcash, true).expect("encode");
            assert_eq!(bytes[8], bytes[HEADER_LEN] & 0xE0);
        }
    }
}
