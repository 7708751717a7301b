use super::*;

#[test]
fn one_matches_scale() {
    assert_eq!(Sfixed8P8::ONE.epsilons, 256);
    assert_eq!(Ufixed8P8::ONE.epsilons, 256);
    assert_eq!(Sfixed16P16::ONE.epsilons, 65536);
    assert_eq!(Ufixed16P16::ONE.epsilons, 65536);
}

#[test]
fn from_value_rounds_to_nearest_epsilon() {
    assert_eq!(Sfixed8P8::from_value(1.5).epsilons, 384);
    assert_eq!(Sfixed8P8::from_value(-0.5).epsilons, -128);
    assert_eq!(Ufixed8P8::from_value(24.0).epsilons, 24 * 256);
    assert_eq!(Sfixed16P16::from_value(0.25).epsilons, 16384);
    assert_eq!(Sfixed16P16::from_value(2.0).value(), 2.0);
}

#[test]
fn serde_uses_raw_epsilons() {
    let v: Sfixed8P8 = serde_json::from_str("-256").unwrap();
    assert_eq!(v.value(), -1.0);
    assert_eq!(serde_json::to_string(&Ufixed16P16::ONE).unwrap(), "65536");
}
