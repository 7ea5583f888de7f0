//! Legacy (pre-header) encoding and the conversion shim.
//!
//! Legacy data is the backend's own canonical serialization: arkworks
//! compressed points, full Fq12 for GT and little-endian scalars. It carries
//! no header, which is how [`is_legacy`](crate::codec::is_legacy) tells it
//! apart.

use tracing::{debug, instrument};

use crate::codec::header::Flags;
use crate::codec::{CodecConfig, Element, ElementType, Encoded, Format, WireFormat};
use crate::errors::Error;
use crate::registry::CurveId;
use crate::{CurvePoint, FieldElement, PairingBackend, TargetGroup};

pub struct Legacy;

impl WireFormat for Legacy {
    const FORMAT: Format = Format::Legacy;

    fn encode_zp<F: FieldElement>(scalar: &F) -> Vec<u8> {
        let mut bytes = scalar.to_bytes_be();
        bytes.reverse();
        bytes
    }

    fn decode_zp<F: FieldElement>(bytes: &[u8]) -> Result<F, Error> {
        let mut be = bytes.to_vec();
        be.reverse();
        Ok(F::from_bytes_be(&be)?)
    }

    fn encode_point<F: FieldElement, P: CurvePoint<F>>(
        point: &P,
        _compress: bool,
    ) -> Result<Encoded, Error> {
        let flags = Flags {
            compressed: true,
            infinity: point.is_identity(),
            ..Flags::default()
        };
        Ok((point.to_native_bytes()?, flags))
    }

    fn decode_point<F: FieldElement, P: CurvePoint<F>>(bytes: &[u8]) -> Result<(P, Flags), Error> {
        let point = P::from_native_bytes(bytes)?;
        let flags = Flags {
            compressed: true,
            infinity: point.is_identity(),
            ..Flags::default()
        };
        Ok((point, flags))
    }

    fn encode_gt<T: TargetGroup>(gt: &T, _compress: bool) -> Result<Encoded, Error> {
        let flags = Flags {
            infinity: gt.is_unity(),
            ..Flags::default()
        };
        Ok((gt.to_native_bytes()?, flags))
    }

    fn decode_gt<T: TargetGroup>(bytes: &[u8]) -> Result<(T, Flags), Error> {
        let gt = T::from_native_bytes(bytes)?;
        let flags = Flags {
            infinity: gt.is_unity(),
            ..Flags::default()
        };
        Ok((gt, flags))
    }
}

/// Re-encodes legacy bytes in the curve's automatically selected format,
/// with a header.
///
/// The input is only read. `curve` must be the engine's curve.
#[instrument(level = "trace", skip_all, fields(element = ?element_type, len = bytes.len()))]
pub fn convert_legacy_to_standard<B: PairingBackend>(
    bytes: &[u8],
    element_type: ElementType,
    curve: CurveId,
) -> Result<Vec<u8>, Error> {
    if curve != B::CURVE {
        return Err(Error::CurveMismatch {
            expected: B::CURVE.as_byte(),
            found: curve.as_byte(),
        });
    }
    let element: Element<B> = crate::codec::deserialize_as(bytes, element_type, Format::Legacy)?;
    let converted = crate::codec::serialize_with(&element, &CodecConfig::default())?;
    debug!(from = bytes.len(), to = converted.len(), "converted legacy element");
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{deserialize, is_legacy, select_format};
    use rand::{SeedableRng, rngs::StdRng};

    fn convert_all_types<B: PairingBackend>(rng: &mut StdRng) {
        let elements: Vec<Element<B>> = vec![
            Element::Zp(B::Scalar::random(rng)),
            Element::G1(B::G1::random(rng)),
            Element::G2(B::G2::random(rng)),
            Element::Gt(B::Target::random(rng)),
            Element::G1(B::G1::identity()),
        ];
        for element in elements {
            let legacy = crate::codec::serialize(&element, Format::Legacy, false).expect("legacy");
            assert!(is_legacy(&legacy));
            let snapshot = legacy.clone();
            let standard =
                convert_legacy_to_standard::<B>(&legacy, element.element_type(), B::CURVE)
                    .expect("convert");
            assert_eq!(legacy, snapshot);
            assert!(!is_legacy(&standard));

            let expected_format = Format::Auto.resolve(B::CURVE, element.element_type());
            assert_eq!(standard[7], expected_format.as_byte());
            let back: Element<B> =
                deserialize(&standard, true, element.element_type()).expect("decode");
            assert_eq!(back, element);
        }
        assert_eq!(
            Format::Auto.resolve(B::CURVE, ElementType::G1),
            select_format(B::CURVE)
        );
    }

    fn scalar_is_little_endian<B: PairingBackend>() {
        let one = B::Scalar::one();
        let bytes = Legacy::encode_zp(&one);
        assert_eq!(bytes[0], 1);
        assert!(bytes[1..].iter().all(|b| *b == 0));
        assert_eq!(Legacy::decode_zp::<B::Scalar>(&bytes), Ok(one));
    }

    fn garbage_rejected<B: PairingBackend>() {
        let garbage = vec![0xFFu8; 7];
        assert!(convert_legacy_to_standard::<B>(&garbage, ElementType::G1, B::CURVE).is_err());
    }

    fn run_all<B: PairingBackend>(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        convert_all_types::<B>(&mut rng);
        scalar_is_little_endian::<B>();
        garbage_rejected::<B>();
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn legacy_bn254() {
        run_all::<crate::Bn254Engine>(61);
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn legacy_bls12_381() {
        run_all::<crate::Bls12Engine>(62);
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn conversion_checks_curve() {
        let result = convert_legacy_to_standard::<crate::Bls12Engine>(
            &[0u8; 48],
            ElementType::G1,
            CurveId::BnP254,
        );
        assert_eq!(
            result,
            Err(Error::CurveMismatch {
                expected: 0xA2,
                found: 0x6F
            })
        );
    }
}
