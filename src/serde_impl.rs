//! Serde support for [`Element`].
//!
//! Elements are stored as their element type plus the framed bytes produced by
//! [`serialize_with`] under the default configuration (automatic format, 9-byte
//! header). Loading goes through the full decoder, so curve, subgroup and flag
//! checks apply to serde input exactly as they do to raw bytes.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

use crate::PairingBackend;
use crate::codec::{CodecConfig, Element, ElementType, deserialize, serialize_with};

impl<B: PairingBackend> Serialize for Element<B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let bytes = serialize_with(self, &CodecConfig::default()).map_err(ser::Error::custom)?;
        let mut state = serializer.serialize_struct("Element", 2)?;
        state.serialize_field("element_type", &self.element_type())?;
        state.serialize_field("bytes", &bytes)?;
        state.end()
    }
}

impl<'de, B: PairingBackend> Deserialize<'de> for Element<B> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ElementHelper {
            element_type: ElementType,
            bytes: Vec<u8>,
        }

        let helper = ElementHelper::deserialize(deserializer)?;
        deserialize::<B>(&helper.bytes, true, helper.element_type).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CurvePoint, FieldElement, TargetGroup};
    use rand::{SeedableRng, rngs::StdRng};

    fn json_round_trip<B: PairingBackend>(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let elements: Vec<Element<B>> = vec![
            Element::Zp(B::Scalar::random(&mut rng)),
            Element::G1(B::G1::random(&mut rng)),
            Element::G2(B::G2::identity()),
            Element::Gt(B::Target::random(&mut rng)),
        ];
        let json = serde_json::to_string(&elements).expect("serialize");
        let back: Vec<Element<B>> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, elements);
    }

    fn tampered_bytes_rejected<B: PairingBackend>(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let element = Element::<B>::G1(B::G1::random(&mut rng));
        let mut value = serde_json::to_value(element).expect("serialize");
        value["element_type"] = serde_json::to_value(ElementType::G2).expect("element type");
        assert!(serde_json::from_value::<Element<B>>(value).is_err());
    }

    #[cfg(feature = "ark_bn254")]
    #[test]
    fn serde_bn254() {
        json_round_trip::<crate::Bn254Engine>(81);
        tampered_bytes_rejected::<crate::Bn254Engine>(82);
    }

    #[cfg(feature = "ark_bls12381")]
    #[test]
    fn serde_bls12_381() {
        json_round_trip::<crate::Bls12Engine>(83);
        tampered_bytes_rejected::<crate::Bls12Engine>(84);
    }
}
