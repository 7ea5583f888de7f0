use ark_bn254::{Bn254, Fq, Fr};
use ark_ec::pairing::Pairing;
use tracing::instrument;

use crate::arith::group::ark_bn254::{G1, G2, Gt};
use crate::registry::CurveId;
use crate::{ArithError, PairingBackend};

/// Arkworks BN254 (alt_bn128) pairing engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bn254Engine;

impl PairingBackend for Bn254Engine {
    const CURVE: CurveId = CurveId::BnP254;

    type Scalar = Fr;
    type Base = Fq;
    type G1 = G1;
    type G2 = G2;
    type Target = Gt;

    fn pairing(g1: &Self::G1, g2: &Self::G2) -> Self::Target {
        Gt(Bn254::pairing(g1.0, g2.0))
    }

    #[instrument(level = "trace", skip_all, fields(len = g1.len()))]
    fn multi_pairing(g1: &[Self::G1], g2: &[Self::G2]) -> Result<Self::Target, ArithError> {
        if g1.len() != g2.len() {
            return Err(ArithError::LengthMismatch("pairing inputs"));
        }
        let g1_proj: Vec<_> = g1.iter().map(|p| p.0).collect();
        let g2_proj: Vec<_> = g2.iter().map(|p| p.0).collect();
        Ok(Gt(Bn254::multi_pairing(g1_proj, g2_proj)))
    }
}
