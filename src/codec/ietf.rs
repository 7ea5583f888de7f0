//! IETF pairing-friendly curves draft encoding.
//!
//! Scalars are big-endian, G1 and G2 reuse the ZCash flag-bit layout. GT is
//! written as the six Fp2 coefficients of `(1, w³, w, w⁴, w², w⁵)` in
//! Karabina order `g0..g5`, each as `c1 ‖ c0`: twelve base field elements.
//! The cyclotomic-compressed form keeps `g2..g5` (field elements 4–11).

use crate::codec::compress::{
    compress_cyclotomic, decompress_cyclotomic, from_karabina, to_karabina,
};
use crate::codec::header::Flags;
use crate::codec::zcash::{decode_flagged, encode_flagged};
use crate::codec::{Encoded, Format, WireFormat, coordinate_len, put_coordinate, take_coordinate};
use crate::errors::Error;
use crate::{CurvePoint, FieldElement, TargetGroup};

pub struct Ietf;

fn gt_flags<T: TargetGroup>(gt: &T, compressed: bool) -> Flags {
    Flags {
        compressed,
        infinity: gt.is_unity(),
        y_sign: false,
        cyclotomic: compressed,
    }
}

impl WireFormat for Ietf {
    const FORMAT: Format = Format::Ietf;

    fn encode_point<F: FieldElement, P: CurvePoint<F>>(
        point: &P,
        compress: bool,
    ) -> Result<Encoded, Error> {
        encode_flagged(point, compress, Self::FORMAT)
    }

    fn decode_point<F: FieldElement, P: CurvePoint<F>>(bytes: &[u8]) -> Result<(P, Flags), Error> {
        decode_flagged(bytes)
    }

    fn encode_gt<T: TargetGroup>(gt: &T, compress: bool) -> Result<Encoded, Error> {
        let coeffs = if compress {
            compress_cyclotomic(gt).to_vec()
        } else {
            to_karabina(gt).to_vec()
        };
        let mut out = Vec::with_capacity(coeffs.len() * coordinate_len::<T::Fp2>());
        for c in &coeffs {
            put_coordinate(&mut out, c);
        }
        Ok((out, gt_flags(gt, compress)))
    }

    fn decode_gt<T: TargetGroup>(bytes: &[u8]) -> Result<(T, Flags), Error> {
        let n = coordinate_len::<T::Fp2>();
        if bytes.len() != 6 * n && bytes.len() != 4 * n {
            return Err(Error::InvalidEncoding("wrong length"));
        }
        let coeffs = bytes
            .chunks(n)
            .map(take_coordinate::<T::Fp2>)
            .collect::<Result<Vec<_>, _>>()?;
        match *coeffs.as_slice() {
            [g0, g1, g2, g3, g4, g5] => {
                let gt: T = from_karabina([g0, g1, g2, g3, g4, g5]);
                if !gt.is_in_subgroup() {
                    return Err(Error::InvalidSubgroup);
                }
                Ok((gt, gt_flags(&gt, false)))
            }
            [g2, g3, g4, g5] => {
                let gt: T = decompress_cyclotomic([g2, g3, g4, g5])?;
                Ok((gt, gt_flags(&gt, true)))
            }
            _ => Err(Error::InvalidEncoding("wrong length")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PairingBackend;
    use rand::{SeedableRng, rngs::StdRng};

    fn gt_round_trips<B: PairingBackend>(rng: &mut StdRng) {
        let n = B::Base::byte_len();
        for _ in 0..8 {
            let gt = B::Target::random(rng);
            let (full, flags) = Ietf::encode_gt(&gt, false).expect("encode");
            assert_eq!(full.len(), 12 * n);
            assert!(!flags.cyclotomic);
            let (back, _): (B::Target, _) = Ietf::decode_gt(&full).expect("decode");
            assert_eq!(back, gt);

            let (compressed, flags) = Ietf::encode_gt(&gt, true).expect("encode");
            assert_eq!(compressed.len(), 8 * n);
            assert!(flags.cyclotomic && flags.compressed);
            assert_eq!(compressed, full[4 * n..]);
            let (back, decoded): (B::Target, _) = Ietf::decode_gt(&compressed).expect("decode");
            assert_eq!(back, gt);
            assert_eq!(decoded, flags);
        }
    }

    fn unity_encodings<B: PairingBackend>() {
        let n = B::Base::byte_len();
        let unity = B::Target::identity();
        let (full, flags) = Ietf::encode_gt(&unity, false).expect("encode");
        assert!(flags.infinity);
        let mut expected = vec![0u8; 12 * n];
        // g0 = 1 is written c1 ‖ c0, so the one sits at the end of the second field element
        expected[2 * n - 1] = 1;
        assert_eq!(full, expected);

        let (compressed, _) = Ietf::encode_gt(&unity, true).expect("encode");
        assert_eq!(compressed, vec![0u8; 8 * n]);
        let (back, _): (B::Target, _) = Ietf::decode_gt(&compressed).expect("decode");
        assert!(back.is_unity());
    }

    fn bad_gt_rejected<B: PairingBackend>(rng: &mut StdRng) {
        let n = B::Base::byte_len();
        let gt = B::Target::random(rng);
        let (mut full, _) = Ietf::encode_gt(&gt, false).expect("encode");
        let last = full.len() - 1;
        full[last] ^= 0x01;
        assert!(matches!(
            Ietf::decode_gt::<B::Target>(&full),
            Err(Error::InvalidSubgroup)
        ));
        assert!(matches!(
            Ietf::decode_gt::<B::Target>(&full[..10 * n]),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(matches!(
            Ietf::decode_gt::<B::Target>(&full[..8 * n - 1]),
            Err(Error::InvalidEncoding(_))
        ));
    }

    fn run_all<B: PairingBackend>(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        gt_round_trips::<B>(&mut rng);
        unity_encodings::<B>();
        bad_gt_rejected::<B>(&mut rng);
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn ietf_gt_bn254() {
        run_all::<crate::Bn254Engine>(51);
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn ietf_gt_bls12_381() {
        run_all::<crate::Bls12Engine>(52);
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn points_share_zcash_layout() {
        use crate::Bls12Engine;
        use crate::codec::zcash::Zcash;
        let mut rng = StdRng::seed_from_u64(53);
        let q = <Bls12Engine as PairingBackend>::G2::random(&mut rng);
        let (ietf, _) = Ietf::encode_point(&q, true).expect("encode");
        let (zcash, _) = Zcash::encode_point(&q, true).expect("encode");
        assert_eq!(ietf, zcash);
    }
}
