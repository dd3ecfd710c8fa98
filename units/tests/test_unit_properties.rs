// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Properties that must hold for every count and offset, checked over a grid of small
//! values plus the edge cases that matter (zero, equal operands, aligned values).

use pretty_assertions::assert_eq;
use r3bl_units::{ByteCount, Count, Offset, RawUnit, UnitsError, byte_count, byte_offset,
                 count, offset};
use test_case::test_case;

const SAMPLES: [RawUnit; 8] = [0, 1, 2, 3, 7, 8, 64, 1000];

#[test]
fn test_saturating_sub_clamps_at_zero() {
    for a in SAMPLES {
        for b in SAMPLES {
            let actual = count::<u8>(a).saturating_sub(count(b));
            assert_eq!(actual, count((a - b).max(0)), "{a} - {b}");
        }
    }
}

#[test]
fn test_try_sub_is_exact_or_errors() {
    for a in SAMPLES {
        for b in SAMPLES {
            let actual = count::<u8>(a).try_sub(count(b));
            if a >= b {
                assert_eq!(actual, Ok(count(a - b)));
                assert_eq!(count::<u8>(a).strict_sub(count(b)), count(a - b));
            } else {
                assert_eq!(
                    actual,
                    Err(UnitsError::SubtractionUnderflow {
                        minuend: a,
                        subtrahend: b
                    })
                );
            }
        }
    }
}

#[test]
#[should_panic(expected = "Count subtraction underflow")]
fn test_strict_sub_underflow_is_fatal() {
    let _unused = count::<u8>(1).strict_sub(count(2));
}

#[test]
fn test_last_offset_of_non_empty() {
    for n in SAMPLES.into_iter().filter(|it| *it > 0) {
        assert_eq!(count::<char>(n).last_offset(), offset(n - 1));
    }
}

#[test]
#[should_panic(expected = "An empty count has no last offset")]
fn test_last_offset_of_empty_is_fatal() { let _unused = count::<char>(0).last_offset(); }

#[test]
fn test_equals_count_iff_same_raw() {
    for o in SAMPLES {
        for c in SAMPLES {
            assert_eq!(offset::<u16>(o).equals_count(count(c)), o == c);
        }
    }
}

#[test]
fn test_count_offset_round_trip() {
    for x in SAMPLES {
        let it: Count<u64> = count(x);
        assert_eq!(it.as_offset().as_count(), it);
    }
}

#[test]
fn test_no_negative_count_from_offsets() {
    for a in SAMPLES {
        for b in SAMPLES {
            let (lhs, rhs) = (offset::<u8>(a), offset::<u8>(b));
            let raw_difference = lhs.difference(rhs);
            assert_eq!(raw_difference.try_as_count().is_ok(), a >= b, "{a} - {b}");
            assert!(lhs.saturating_distance_from(rhs).as_raw() >= 0);
            if let Ok(it) = lhs.try_distance_from(rhs) {
                assert_eq!(it.as_raw(), a - b);
            }
        }
    }
}

#[test]
#[should_panic(expected = "is negative and can't be used as a count")]
fn test_negative_offset_as_count_is_fatal() {
    let _unused = offset::<u8>(5).add_raw(-6).as_count();
}

#[test]
fn test_to_byte_offset_scales_by_elem_size() {
    for n in SAMPLES {
        assert_eq!(
            offset::<u32>(n).to_byte_offset(byte_count(4)),
            byte_offset(4 * n)
        );
    }
}

#[test_case(13, 8, 16)]
#[test_case(16, 8, 16)]
#[test_case(1, 4096, 4096)]
fn test_round_up_to_alignment(raw: RawUnit, alignment: RawUnit, expected: RawUnit) {
    let once = count::<u8>(raw).round_up_to_alignment(alignment);
    assert_eq!(once, count(expected));
    // Idempotent on already aligned values.
    assert_eq!(once.round_up_to_alignment(alignment), once);
}

#[test]
fn test_native_size_conversions() {
    assert_eq!(ByteCount::from_signed_native_size(42), byte_count(42));
    assert_eq!(ByteCount::from_unsigned_native_size(42), byte_count(42));
}

#[test]
#[should_panic(expected = "-1 sentinel")]
fn test_signed_native_size_sentinel_is_fatal() {
    let _unused = ByteCount::from_signed_native_size(-1);
}

#[test]
#[should_panic(expected = "Attempted to negate count")]
fn test_negate_is_fatal() { let _unused = -count::<u8>(5); }

#[test]
fn test_element_to_byte_extent_and_back() {
    // 6 `u16` code units in a buffer, starting at element offset 2.
    let start: Offset<u16> = offset(2);
    let length: Count<u16> = count(6);
    let elem_size = byte_count(2);

    let byte_start = start.to_byte_offset(elem_size);
    let byte_length = length.scale_by(elem_size);
    assert_eq!(byte_start, byte_offset(4));
    assert_eq!(byte_length, byte_count(12));

    let byte_end = byte_start + byte_length;
    let end: Offset<u16> = byte_end.rescale(byte_count(1), elem_size);
    assert_eq!(end, start + length);
    assert_eq!(end - start, length);
}
