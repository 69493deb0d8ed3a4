/// A value type that linear descent knows how to perturb.
///
/// Implementors describe the neighbourhood of a candidate: the set of
/// directions to probe for a given step scale, how a direction is applied,
/// and how a candidate is pulled back into its admissible range.
///
/// Implementations are provided for `f32` and for `[f32; N]`. The array
/// implementation works for any `N`, but the direction count grows as
/// `3^N - 1`, so it is only practical for small vectors (2, 3, or 4
/// components).
pub trait DirectionProvider: Copy {
    /// Returns every probe direction for the step scale `epsilon`.
    ///
    /// The zero direction is never included.
    fn directions(epsilon: Self) -> Vec<Self>;

    /// Returns `self + other`, component-wise.
    #[must_use]
    fn add(self, other: Self) -> Self;

    /// Clamps each component of `self` into `[min, max]`.
    ///
    /// Never panics, even if a lower bound exceeds its upper bound.
    /// In that case the upper bound wins for values above it.
    #[must_use]
    fn clamp(self, min: Self, max: Self) -> Self;

    /// Returns `true` if `min <= max` holds for every component.
    ///
    /// `NaN` bounds are never ordered.
    fn is_ordered(min: Self, max: Self) -> bool;
}

impl DirectionProvider for f32 {
    fn directions(epsilon: Self) -> Vec<Self> {
        if epsilon == 0.0 {
            return Vec::new();
        }
        vec![-epsilon, epsilon]
    }

    fn add(self, other: Self) -> Self {
        self + other
    }

    fn clamp(self, min: Self, max: Self) -> Self {
        clamp_component(self, min, max)
    }

    fn is_ordered(min: Self, max: Self) -> bool {
        min <= max
    }
}

impl<const N: usize> DirectionProvider for [f32; N] {
    /// Enumerates `{-1, 0, 1}` per component, scaled by that component's
    /// epsilon.
    ///
    /// The first component varies slowest. Combinations that scale to the
    /// zero vector are skipped.
    fn directions(epsilon: Self) -> Vec<Self> {
        let Some(count) = u32::try_from(N).ok().and_then(|n| 3_usize.checked_pow(n)) else {
            return Vec::new();
        };

        let mut directions = Vec::with_capacity(count.saturating_sub(1));
        for combination in 0..count {
            let mut direction = [0.0; N];
            let mut rest = combination;
            for i in (0..N).rev() {
                let sign = match rest % 3 {
                    0 => -1.0,
                    1 => 0.0,
                    _ => 1.0,
                };
                direction[i] = sign * epsilon[i];
                rest /= 3;
            }

            if direction.iter().all(|&c| c == 0.0) {
                continue;
            }
            directions.push(direction);
        }
        directions
    }

    fn add(self, other: Self) -> Self {
        std::array::from_fn(|i| self[i] + other[i])
    }

    fn clamp(self, min: Self, max: Self) -> Self {
        std::array::from_fn(|i| clamp_component(self[i], min[i], max[i]))
    }

    fn is_ordered(min: Self, max: Self) -> bool {
        min.iter().zip(max.iter()).all(|(lo, hi)| lo <= hi)
    }
}

/// Clamps only the components of `value` selected by `mask`.
///
/// Components whose mask entry is `false` are returned unchanged, which keeps
/// those axes free while the others stay within `[min, max]`.
#[must_use]
pub fn clamp_masked<const N: usize>(
    value: [f32; N],
    min: [f32; N],
    max: [f32; N],
    mask: [bool; N],
) -> [f32; N] {
    std::array::from_fn(|i| {
        if mask[i] {
            clamp_component(value[i], min[i], max[i])
        } else {
            value[i]
        }
    })
}

/// Checks `min <= max` only for the components selected by `mask`.
#[must_use]
pub fn is_ordered_masked<const N: usize>(min: [f32; N], max: [f32; N], mask: [bool; N]) -> bool {
    (0..N).all(|i| !mask[i] || min[i] <= max[i])
}

/// Lower bound first, then upper bound. Unlike [`f32::clamp`] this does not
/// panic on reversed bounds.
fn clamp_component(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn assert_complete<const N: usize>(epsilon: [f32; N], expected: usize) {
        let directions = <[f32; N]>::directions(epsilon);
        assert_eq!(directions.len(), expected);

        for (i, a) in directions.iter().enumerate() {
            assert!(a.iter().any(|&c| c != 0.0), "zero direction at {i}");
            for b in &directions[i + 1..] {
                assert_ne!(a, b, "duplicate direction {a:?}");
            }
        }
    }

    #[test]
    fn scalar_has_two_directions() {
        assert_eq!(f32::directions(0.1), vec![-0.1, 0.1]);
    }

    #[test]
    fn zero_scalar_epsilon_has_no_directions() {
        assert!(f32::directions(0.0).is_empty());
    }

    #[test]
    fn vector_direction_counts() {
        assert_complete([0.1, 0.2], 8);
        assert_complete([0.1, 0.2, 0.3], 26);
        assert_complete([0.1, 0.2, 0.3, 0.4], 80);
    }

    #[test]
    fn vector_directions_are_scaled_per_component() {
        let directions = <[f32; 2]>::directions([0.5, 2.0]);

        assert!(directions.contains(&[0.5, 2.0]));
        assert!(directions.contains(&[-0.5, 0.0]));
        assert!(directions.contains(&[0.0, -2.0]));
        assert!(!directions.contains(&[0.0, 0.0]));
    }

    #[test]
    fn vector_directions_first_component_varies_slowest() {
        let directions = <[f32; 2]>::directions([1.0, 1.0]);

        assert_eq!(directions[0], [-1.0, -1.0]);
        assert_eq!(directions[1], [-1.0, 0.0]);
        assert_eq!(directions[2], [-1.0, 1.0]);
        assert_eq!(directions[3], [0.0, -1.0]);
        assert_eq!(directions[4], [0.0, 1.0]);
        assert_eq!(directions[7], [1.0, 1.0]);
    }

    #[test]
    fn zero_epsilon_component_drops_zero_results() {
        // Only the combinations that move x survive.
        let directions = <[f32; 2]>::directions([1.0, 0.0]);
        assert_eq!(directions.len(), 6);
        assert!(directions.iter().all(|d| d[0] != 0.0));
    }

    #[test]
    fn empty_array_has_no_directions() {
        assert!(<[f32; 0]>::directions([]).is_empty());
    }

    #[test]
    fn add_is_component_wise() {
        assert_relative_eq!(1.5_f32.add(-0.5), 1.0);
        assert_eq!([1.0_f32, 2.0, 3.0].add([0.5, -1.0, 0.0]), [1.5, 1.0, 3.0]);
    }

    #[test]
    fn clamp_is_component_wise() {
        assert_relative_eq!(DirectionProvider::clamp(12.0_f32, -10.0, 10.0), 10.0);
        assert_eq!(
            DirectionProvider::clamp([-3.0_f32, 0.5, 9.0, 2.0], [0.0; 4], [1.0, 1.0, 5.0, 2.0]),
            [0.0, 0.5, 5.0, 2.0]
        );
    }

    #[test]
    fn clamp_tolerates_reversed_bounds() {
        assert_relative_eq!(DirectionProvider::clamp(0.0_f32, 1.0, -1.0), 1.0);
        assert_relative_eq!(DirectionProvider::clamp(5.0_f32, 1.0, -1.0), -1.0);
    }

    #[test]
    fn ordering_checks_every_component() {
        assert!(f32::is_ordered(-1.0, 1.0));
        assert!(f32::is_ordered(2.0, 2.0));
        assert!(!f32::is_ordered(1.0, -1.0));
        assert!(!f32::is_ordered(f32::NAN, 1.0));

        assert!(<[f32; 3]>::is_ordered([0.0; 3], [1.0; 3]));
        assert!(!<[f32; 3]>::is_ordered([0.0, 2.0, 0.0], [1.0; 3]));
    }

    #[test]
    fn masked_clamp_leaves_free_axes_alone() {
        let clamped = clamp_masked(
            [-4.0, 7.0, 3.0],
            [-1.0; 3],
            [1.0; 3],
            [true, false, true],
        );
        assert_eq!(clamped, [-1.0, 7.0, 1.0]);
    }

    #[test]
    fn masked_ordering_ignores_free_axes() {
        let min = [0.0, 5.0];
        let max = [1.0, -5.0];
        assert!(is_ordered_masked(min, max, [true, false]));
        assert!(!is_ordered_masked(min, max, [true, true]));
    }
}
