use super::*;

#[test]
fn can_produce_uniform_real_within_range() {
    let random = DefaultRandom::default();

    for _ in 0..100 {
        let value = random.uniform_real(1., 3.);
        assert!((1.0..3.0).contains(&value));
    }
}

#[test]
fn can_produce_uniform_int_within_range() {
    let random = DefaultRandom::default();

    for _ in 0..100 {
        let value = random.uniform_int(-2, 2);
        assert!((-2..=2).contains(&value));
    }
}

#[test]
fn can_handle_equal_bounds() {
    let random = DefaultRandom::default();

    assert_eq!(random.uniform_real(2., 2.), 2.);
    assert_eq!(random.uniform_int(5, 5), 5);
}
