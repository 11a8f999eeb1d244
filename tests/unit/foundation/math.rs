use super::*;

#[test]
fn svg_number_trims_and_normalizes() {
    assert_eq!(svg_number(10.0), "10");
    assert_eq!(svg_number(-2.5), "-2.5");
    assert_eq!(svg_number(0.1 + 0.2), "0.3");
    assert_eq!(svg_number(-0.0), "0");
    assert_eq!(svg_number(-0.000_000_001), "0");
    assert_eq!(svg_number(1.0 / 3.0), "0.33333333");
    assert_eq!(svg_number(f64::NAN), "0");
}

#[test]
fn split_mix_is_seed_deterministic() {
    let mut a = SplitMix64::new(7);
    let mut b = SplitMix64::new(7);
    let xs: Vec<u64> = (0..4).map(|_| a.next_u64()).collect();
    let ys: Vec<u64> = (0..4).map(|_| b.next_u64()).collect();
    assert_eq!(xs, ys);
    assert_ne!(xs[0], xs[1]);
}
