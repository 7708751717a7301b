use super::*;

#[test]
fn unsigned_boundaries() {
    let table: [(u32, u32); 10] = [
        (0, 0),
        (1, 1),
        (2, 2),
        (3, 2),
        (4, 3),
        (7, 3),
        (8, 4),
        (255, 8),
        (256, 9),
        ((1 << 31) - 1, 31),
    ];
    for (input, expected) in table {
        assert_eq!(unsigned_bit_count(input).unwrap(), expected, "input {input}");
    }
}

#[test]
fn signed_boundaries() {
    let table: [(i64, u32); 14] = [
        (0, 0),
        (1, 2),
        (-1, 1),
        (2, 3),
        (-2, 2),
        (3, 3),
        (-3, 3),
        (-4, 3),
        (4, 4),
        (-5, 4),
        (127, 8),
        (-128, 8),
        ((1 << 31) - 1, 32),
        (-(1 << 31), 32),
    ];
    for (input, expected) in table {
        assert_eq!(signed_bit_count(input).unwrap(), expected, "input {input}");
    }
}

#[test]
fn out_of_domain_is_a_range_error() {
    assert!(matches!(
        unsigned_bit_count(1 << 31),
        Err(EmitError::Range(_))
    ));
    assert!(matches!(signed_bit_count(1 << 31), Err(EmitError::Range(_))));
    assert!(matches!(
        signed_bit_count(-(1 << 31) - 1),
        Err(EmitError::Range(_))
    ));
    assert!(matches!(
        min_signed_bit_count([0, 1 << 40]),
        Err(EmitError::Range(_))
    ));
}

#[test]
fn min_counts_take_the_max_and_empty_is_zero() {
    assert_eq!(min_unsigned_bit_count([]).unwrap(), 0);
    assert_eq!(min_signed_bit_count([]).unwrap(), 0);
    assert_eq!(min_unsigned_bit_count([1, 8, 3]).unwrap(), 4);
    assert_eq!(min_signed_bit_count([0, -1, 100, -3]).unwrap(), 8);
    assert_eq!(min_signed_bit_count([0, 0]).unwrap(), 0);
}
