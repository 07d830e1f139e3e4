#![allow(unused)]

/// Scalar reference for the broadcast form.
pub fn reference_flag_and(value: f32, control: &[f32]) -> Vec<f32> {
    control
        .iter()
        .map(|&c| if c == 0.0 { 0.0 } else { value })
        .collect()
}

/// Scalar reference for the two-array form.
pub fn reference_flag_and_select(lhs: &[f32], rhs: &[f32]) -> Vec<f32> {
    lhs.iter()
        .zip(rhs)
        .map(|(&l, &r)| if l == 0.0 { 0.0 } else { r })
        .collect()
}

/// Bitwise slice equality, so NaN payloads and signed zeros are compared exactly.
pub fn assert_same_bits(a: &[f32], e: &[f32]) {
    assert_eq!(a.len(), e.len(), "len mismatch");
    for (i, (&ai, &ei)) in a.iter().zip(e.iter()).enumerate() {
        assert!(
            ai.to_bits() == ei.to_bits(),
            "idx {i}: got {ai} ({:#010x}), expect {ei} ({:#010x})",
            ai.to_bits(),
            ei.to_bits()
        );
    }
}
