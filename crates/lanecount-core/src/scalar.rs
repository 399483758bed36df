//! Scalar reference path.

/// Counts elements equal to `target` with a plain linear scan.
///
/// This is both the execution path for types and hardware without a
/// vector kernel and the semantic oracle every kernel must match
/// exactly.
#[inline]
pub(crate) fn count<T: PartialEq>(haystack: &[T], target: &T) -> usize {
    haystack.iter().filter(|value| *value == target).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_every_occurrence() {
        assert_eq!(count(&[1, 2, 3, 3, 3, 4], &3), 3);
    }

    #[test]
    fn empty_slice_counts_zero() {
        assert_eq!(count::<i32>(&[], &7), 0);
    }

    #[test]
    fn nan_never_matches() {
        let values = [f32::NAN, 1.0, f32::NAN];
        assert_eq!(count(&values, &f32::NAN), 0);
    }

    #[test]
    fn signed_zeros_are_equal() {
        let values = [-0.0_f64, 0.0, 1.0];
        assert_eq!(count(&values, &0.0), 2);
    }

    #[test]
    fn works_for_non_primitive_types() {
        let words = ["fir", "oak", "fir"];
        assert_eq!(count(&words, &"fir"), 2);
    }
}
