//! Piecewise-linear mapping of a scroll position onto an output range.
//!
//! `input` breakpoints must be non-decreasing. Between breakpoints the output
//! is linearly interpolated. Outside the outer breakpoints the behavior
//! depends on [`Clamp`]: either the end value is held, or the first/last
//! segment is extended.

/// Behavior outside the outer input breakpoints
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Clamp {
    /// Hold the first/last output value
    Clamped,
    /// Extrapolate along the first/last segment
    Extrapolate,
}

/// Map `value` through `input` onto `output`.
///
/// Zero-width segments (equal adjacent breakpoints) jump straight to the
/// segment's end value, so a zero viewport height degrades to a step
/// function instead of producing NaN.
pub fn interpolate<const N: usize>(
    value: f64,
    input: &[f64; N],
    output: &[f64; N],
    clamp: Clamp,
) -> f64 {
    let (input, output) = (&input[..], &output[..]);
    match N {
        0 => return value,
        1 => return output[0],
        _ => {}
    }

    let last = N - 1;
    if clamp == Clamp::Clamped {
        if value <= input[0] {
            return output[0];
        }
        if value >= input[last] {
            return output[last];
        }
    }

    // First segment whose upper breakpoint reaches `value`; falls through to
    // the last segment when extrapolating past the end.
    let segment = (0..last)
        .find(|&i| value <= input[i + 1])
        .unwrap_or(last - 1);

    let (from, to) = (input[segment], input[segment + 1]);
    let span = to - from;
    let progress = if span.abs() <= f64::EPSILON {
        1.0
    } else {
        (value - from) / span
    };

    output[segment] + (output[segment + 1] - output[segment]) * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: [f64; 4] = [0.0, 1.0, 1.0, 0.0];

    #[test]
    fn two_point_linear() {
        let y = interpolate(500.0, &[0.0, 1000.0], &[80.0, -80.0], Clamp::Extrapolate);
        assert!((y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn extrapolates_past_both_ends() {
        let below = interpolate(-1000.0, &[0.0, 1000.0], &[80.0, -80.0], Clamp::Extrapolate);
        let above = interpolate(2000.0, &[0.0, 1000.0], &[80.0, -80.0], Clamp::Extrapolate);
        assert!((below - 240.0).abs() < 1e-9);
        assert!((above + 240.0).abs() < 1e-9);
    }

    #[test]
    fn clamps_outside_range() {
        let input = [0.0, 300.0, 700.0, 1000.0];
        assert_eq!(interpolate(-50.0, &input, &ENVELOPE, Clamp::Clamped), 0.0);
        assert_eq!(interpolate(5000.0, &input, &ENVELOPE, Clamp::Clamped), 0.0);
    }

    #[test]
    fn envelope_breakpoints() {
        let input = [0.0, 300.0, 700.0, 1000.0];
        assert_eq!(interpolate(0.0, &input, &ENVELOPE, Clamp::Clamped), 0.0);
        assert_eq!(interpolate(300.0, &input, &ENVELOPE, Clamp::Clamped), 1.0);
        assert_eq!(interpolate(700.0, &input, &ENVELOPE, Clamp::Clamped), 1.0);
        assert_eq!(interpolate(1000.0, &input, &ENVELOPE, Clamp::Clamped), 0.0);
        assert!((interpolate(150.0, &input, &ENVELOPE, Clamp::Clamped) - 0.5).abs() < 1e-9);
        assert!((interpolate(850.0, &input, &ENVELOPE, Clamp::Clamped) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_segments_do_not_produce_nan() {
        let input = [100.0; 4];
        for v in [0.0, 100.0, 200.0] {
            let o = interpolate(v, &input, &ENVELOPE, Clamp::Clamped);
            assert!(o.is_finite());
        }
        let y = interpolate(100.0, &[100.0, 100.0], &[80.0, -80.0], Clamp::Extrapolate);
        assert!(y.is_finite());
    }

    #[test]
    fn single_point_is_constant() {
        assert_eq!(interpolate(42.0, &[10.0], &[3.0], Clamp::Extrapolate), 3.0);
    }
}
