use ark_bls12_381::{Bls12_381, Fq, Fr};
use ark_ec::pairing::Pairing;
use tracing::instrument;

use crate::arith::group::ark_bls12_381::{G1, G2, Gt};
use crate::registry::CurveId;
use crate::{ArithError, PairingBackend};

/// Arkworks BLS12-381 pairing engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bls12Engine;

impl PairingBackend for Bls12Engine {
    const CURVE: CurveId = CurveId::Bls12_381;

    type Scalar = Fr;
    type Base = Fq;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Gt(Bls12_381::pairing(g1.0, g2.0))
    }

    #[instrument(level = "trace", skip_all, fields(len = g1.len()))]
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, ArithError> {
        if g1.len() != g2.len() {
            return Err(ArithError::LengthMismatch("pairing inputs"));
        }
        let g1_proj: Vec<_> = g1.iter().map(|p| p.0).collect();
        let g2_proj: Vec<_> = g2.iter().map(|p| p.0).collect();
        Ok(Gt(Bls12_381::multi_pairing(g1_proj, g2_proj)))
    }
}
