//! Unit tests for field synthesis and the array factor.

use bf_core::{ArrayConfig, SimulatorState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn state(freq: f64, steering: f64, arrays: Vec<ArrayConfig>) -> SimulatorState {
    SimulatorState::new(freq, steering, arrays).unwrap()
}

fn two_element(steering: f64) -> SimulatorState {
    state(100e3, steering, vec![ArrayConfig::linear(2, 0.05).unwrap()])
}

/// 8 elements at half-wavelength spacing (λ = 0.1 m at 3 GHz).
fn half_wave_ula(steering: f64) -> SimulatorState {
    state(3e9, steering, vec![ArrayConfig::linear(8, 0.05).unwrap()])
}

// ── Grid ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use bf_core::BfError;

    use crate::{GridSpec, linspace};

    #[test]
    fn linspace_endpoints_exact() {
        let v = linspace(-10.0, 10.0, 200);
        assert_eq!(v.len(), 200);
        assert_eq!(v[0], -10.0);
        assert_eq!(v[199], 10.0);
        assert!(v.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn default_resolution() {
        let g = GridSpec::new((-10.0, 10.0), (0.0, 10.0));
        assert_eq!((g.nx, g.ny), (200, 200));
        assert_eq!(g.len(), 40_000);
    }

    #[test]
    fn zero_resolution_rejected() {
        let g = GridSpec::with_resolution((0.0, 1.0), (0.0, 1.0), 0, 10);
        assert!(matches!(g.validate(), Err(BfError::InvalidParameter { name: "nx", .. })));
        let g = GridSpec::with_resolution((0.0, 1.0), (0.0, 1.0), 10, 0);
        assert!(matches!(g.validate(), Err(BfError::InvalidParameter { name: "ny", .. })));
    }

    #[test]
    fn non_finite_bounds_rejected() {
        let g = GridSpec::new((f64::NEG_INFINITY, 1.0), (0.0, 1.0));
        assert!(g.validate().is_err());
    }

    #[test]
    fn overflowing_width_rejected() {
        let g = GridSpec::with_resolution((-1e308, 1e308), (0.0, 10.0), 5, 5);
        assert!(matches!(
            g.validate(),
            Err(BfError::InvalidParameter { name: "range width", .. })
        ));
        let g = GridSpec::with_resolution((0.0, 1.0), (1e308, -1e308), 5, 5);
        assert!(g.validate().is_err());
    }
}

// ── Normalization ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod normalize {
    use bf_core::BfError;

    use crate::normalize_in_place;

    #[test]
    fn peak_becomes_exactly_one() {
        let mut v = vec![0.5, 2.0, 1.0];
        let max = normalize_in_place(&mut v).unwrap();
        assert_eq!(max, 2.0);
        assert_eq!(v, vec![0.25, 1.0, 0.5]);
    }

    #[test]
    fn all_zero_is_degenerate_and_untouched() {
        let mut v = vec![0.0; 4];
        let err = normalize_in_place(&mut v).unwrap_err();
        assert!(matches!(err, BfError::DegenerateConfiguration(_)));
        assert_eq!(v, vec![0.0; 4]);
    }

    #[test]
    fn empty_is_degenerate() {
        assert!(normalize_in_place(&mut Vec::<f64>::new()).is_err());
    }

    #[test]
    fn non_finite_sample_is_degenerate_and_untouched() {
        for bad in [f64::NAN, f64::INFINITY] {
            let mut v = vec![1.0, bad, 0.5];
            let err = normalize_in_place(&mut v).unwrap_err();
            assert!(matches!(err, BfError::DegenerateConfiguration(_)));
            assert_eq!(v[0], 1.0);
            assert_eq!(v[2], 0.5);
        }
    }

    #[test]
    fn leading_nan_is_not_skipped() {
        let mut v = vec![f64::NAN, 2.0];
        assert!(normalize_in_place(&mut v).is_err());
        assert!(v[0].is_nan());
        assert_eq!(v[1], 2.0);
    }
}

// ── Field synthesis ───────────────────────────────────────────────────────────

#[cfg(test)]
mod field {
    use bf_core::{ArrayConfig, BfError};

    use super::{half_wave_ula, state, two_element};
    use crate::{GridSpec, steered_elements, synthesize_field};

    #[test]
    fn shape_matches_resolution() {
        let spec = GridSpec::with_resolution((-10.0, 10.0), (0.0, 10.0), 40, 25);
        let f = synthesize_field(&two_element(0.0), &spec).unwrap();
        assert_eq!(f.nx(), 40);
        assert_eq!(f.ny(), 25);
        assert_eq!(f.values.len(), 1000);
        assert_eq!(f.rows().count(), 25);
        assert_eq!(f.to_rows()[0].len(), 40);
    }

    #[test]
    fn values_in_unit_interval_with_exact_peak() {
        let spec = GridSpec::with_resolution((-1.0, 1.0), (0.0, 2.0), 60, 60);
        let f = synthesize_field(&half_wave_ula(20.0), &spec).unwrap();
        assert!(f.values.iter().all(|&v| (0.0..=1.0).contains(&v)));
        assert!(f.values.contains(&1.0));
        assert!(f.raw_peak > 0.0);
        assert!(f.peak().is_some());
    }

    #[test]
    fn single_element_is_uniform() {
        let s = state(1e9, 0.0, vec![ArrayConfig::linear(1, 0.1).unwrap()]);
        let spec = GridSpec::with_resolution((-2.0, 2.0), (0.0, 2.0), 30, 30);
        let f = synthesize_field(&s, &spec).unwrap();
        assert!(f.values.iter().all(|&v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn no_arrays_is_degenerate() {
        let s = state(1e9, 0.0, vec![]);
        let err = synthesize_field(&s, &GridSpec::new((-1.0, 1.0), (0.0, 1.0))).unwrap_err();
        assert!(matches!(err, BfError::DegenerateConfiguration(_)));
    }

    #[test]
    fn zero_resolution_is_invalid() {
        let spec = GridSpec::with_resolution((-1.0, 1.0), (0.0, 1.0), 0, 0);
        let err = synthesize_field(&two_element(0.0), &spec).unwrap_err();
        assert!(matches!(err, BfError::InvalidParameter { .. }));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let spec = GridSpec::with_resolution((-1.0, 1.0), (0.0, 1.0), 4, 3);
        let f = synthesize_field(&two_element(0.0), &spec).unwrap();
        assert!(f.get(2, 3).is_some());
        assert_eq!(f.get(0, 4), None);
        assert_eq!(f.get(3, 0), None);
        assert_eq!(f.get(usize::MAX, usize::MAX), None);
        assert_eq!(f.get(1, 2), Some(f.values[4 + 2]));
    }

    #[test]
    fn overflowing_grid_is_invalid_not_nan() {
        let spec = GridSpec::with_resolution((-1e308, 1e308), (0.0, 10.0), 5, 5);
        let err = synthesize_field(&two_element(0.0), &spec).unwrap_err();
        assert!(matches!(err, BfError::InvalidParameter { .. }));
    }

    #[test]
    fn broadside_field_mirror_symmetric() {
        let spec = GridSpec::with_resolution((-1.0, 1.0), (0.1, 2.0), 41, 20);
        let f = synthesize_field(&half_wave_ula(0.0), &spec).unwrap();
        for row in 0..f.ny() {
            for col in 0..f.nx() {
                let mirror = f.get(row, f.nx() - 1 - col).unwrap();
                let here = f.get(row, col).unwrap();
                assert!((here - mirror).abs() < 1e-9, "asymmetry at ({row}, {col})");
            }
        }
    }

    #[test]
    fn coincident_arrays_superpose_coherently() {
        let a = ArrayConfig::linear(4, 0.05).unwrap();
        let one = state(3e9, 10.0, vec![a]);
        let two = state(3e9, 10.0, vec![a, a]);
        let spec = GridSpec::with_resolution((-0.5, 0.5), (0.1, 1.0), 20, 20);

        let f1 = synthesize_field(&one, &spec).unwrap();
        let f2 = synthesize_field(&two, &spec).unwrap();
        // Doubling every amplitude quadruples intensity; normalization hides it.
        assert!((f2.raw_peak / f1.raw_peak - 4.0).abs() < 1e-9);
        for (a, b) in f1.values.iter().zip(&f2.values) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn field_beam_mirrors_steering_sign() {
        // With φ = −k·x·sin θs added to the outgoing k·r phase, the bright
        // lobe on a far ring sits at bearing −θs (measured from +y towards +x).
        let s = half_wave_ula(30.0);
        let spec = GridSpec::with_resolution((-5.0, 5.0), (0.0, 5.0), 201, 101);
        let f = synthesize_field(&s, &spec).unwrap();

        let mut best = (f64::MIN, 0.0);
        for (x, y, v) in f.samples() {
            let r = x.hypot(y);
            if (r - 4.5).abs() < 0.05 && v > best.0 {
                best = (v, x.atan2(y).to_degrees());
            }
        }
        assert!((best.1 + 30.0).abs() < 6.0, "peak bearing {}", best.1);
    }

    #[test]
    fn steered_elements_follow_array_order() {
        let s = state(
            1e9,
            15.0,
            vec![ArrayConfig::linear(2, 0.1).unwrap(), ArrayConfig::linear(3, 0.2).unwrap()],
        );
        let e = steered_elements(&s, s.arrays());
        assert_eq!(e.len(), 5);
        assert_eq!(e[0].position.x, -0.05);
        assert_eq!(e[2].position.x, -0.2);
        for el in &e {
            assert_eq!(el.phase, s.phase_shift(el.position.x));
        }
    }
}

// ── Array factor ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod array_factor {
    use bf_core::{ArrayConfig, BfError};

    use super::{half_wave_ula, state, two_element};
    use crate::{DEFAULT_PROFILE_SAMPLES, array_factor, array_factor_raw, profile_angles};

    #[test]
    fn broadside_pair_adds_in_phase() {
        let s = two_element(0.0);
        assert_eq!(array_factor_raw(&s, &[0.0]).unwrap(), vec![4.0]);

        let p = array_factor(&s, &profile_angles(DEFAULT_PROFILE_SAMPLES)).unwrap();
        assert_eq!(p.raw_peak, 4.0);
        assert_eq!(p.values[90], 1.0); // angle 0°
        assert_eq!(p.angles[90], 0.0);
    }

    #[test]
    fn endfire_steering_moves_peak_off_broadside() {
        let s = two_element(90.0);
        let p = array_factor(&s, &profile_angles(DEFAULT_PROFILE_SAMPLES)).unwrap();
        assert_eq!(p.values[180], 1.0); // angle 90°
        assert!(p.values[90] < p.values[180]);
        assert!(p.peak_angle().unwrap() > 0.0);
    }

    #[test]
    fn half_wave_array_peaks_at_steering_angle() {
        let p = array_factor(&half_wave_ula(30.0), &profile_angles(181)).unwrap();
        assert_eq!(p.peak_angle(), Some(30.0));
        assert_eq!(p.raw_peak, 64.0);
    }

    #[test]
    fn symmetric_about_broadside_when_unsteered() {
        let s = half_wave_ula(0.0);
        let angles = profile_angles(181);
        let raw = array_factor_raw(&s, &angles).unwrap();
        for i in 0..angles.len() {
            let j = angles.len() - 1 - i;
            assert!((raw[i] - raw[j]).abs() < 1e-9, "{} vs {}", angles[i], angles[j]);
        }
    }

    #[test]
    fn order_independent() {
        let s = half_wave_ula(12.0);
        let ab = array_factor_raw(&s, &[-20.0, 45.0]).unwrap();
        let ba = array_factor_raw(&s, &[45.0, -20.0]).unwrap();
        assert_eq!(ab[0], ba[1]);
        assert_eq!(ab[1], ba[0]);
    }

    #[test]
    fn single_element_profile_is_flat() {
        let s = state(1e9, 25.0, vec![ArrayConfig::linear(1, 0.1).unwrap()]);
        let p = array_factor(&s, &profile_angles(37)).unwrap();
        assert!(p.values.iter().all(|&v| (v - 1.0).abs() < 1e-12));
    }

    #[test]
    fn only_first_array_contributes() {
        let first = ArrayConfig::linear(4, 0.05).unwrap();
        let other = ArrayConfig::new(6, 0.07, 40.0).unwrap();
        let alone = state(3e9, 5.0, vec![first]);
        let with_other = state(3e9, 5.0, vec![first, other]);
        let angles = profile_angles(61);
        assert_eq!(
            array_factor_raw(&alone, &angles).unwrap(),
            array_factor_raw(&with_other, &angles).unwrap(),
        );
    }

    #[test]
    fn subnormal_curvature_behaves_like_straight_array() {
        let bent = state(3e9, 10.0, vec![ArrayConfig::new(8, 0.05, 5e-324).unwrap()]);
        let angles = profile_angles(91);
        assert_eq!(
            array_factor(&bent, &angles).unwrap(),
            array_factor(&half_wave_ula(10.0), &angles).unwrap(),
        );
    }

    #[test]
    fn no_arrays_is_degenerate() {
        let s = state(1e9, 0.0, vec![]);
        assert!(matches!(
            array_factor_raw(&s, &[0.0]),
            Err(BfError::DegenerateConfiguration(_))
        ));
    }

    #[test]
    fn empty_angle_list_cannot_be_normalized() {
        assert!(array_factor_raw(&two_element(0.0), &[]).unwrap().is_empty());
        assert!(array_factor(&two_element(0.0), &[]).is_err());
    }
}

// ── Row filling ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use num_complex::Complex64;

    use super::half_wave_ula;
    use crate::synth::fill_rows_sequential;
    use crate::{GridSpec, steered_elements};

    fn inputs() -> (Vec<f64>, Vec<f64>, Vec<crate::SteeredElement>, f64) {
        let s = half_wave_ula(25.0);
        let spec = GridSpec::with_resolution((-1.5, 1.5), (0.05, 2.0), 33, 17);
        (spec.x_axis(), spec.y_axis(), steered_elements(&s, s.arrays()), s.wavenumber())
    }

    #[test]
    fn sequential_matches_direct_superposition() {
        let (xs, ys, elements, k) = inputs();
        let mut values = vec![0.0; xs.len() * ys.len()];
        fill_rows_sequential(&mut values, &xs, &ys, &elements, k);

        for (r, &py) in ys.iter().enumerate() {
            for (c, &px) in xs.iter().enumerate() {
                let expected = elements
                    .iter()
                    .map(|e| Complex64::cis(k * (px - e.position.x).hypot(py - e.position.y) + e.phase))
                    .sum::<Complex64>()
                    .norm_sqr();
                assert_eq!(values[r * xs.len() + c], expected, "mismatch at ({r}, {c})");
            }
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_is_bit_identical_to_sequential() {
        use crate::synth::fill_rows_parallel;

        let (xs, ys, elements, k) = inputs();
        let mut seq = vec![0.0; xs.len() * ys.len()];
        let mut par = vec![0.0; xs.len() * ys.len()];
        fill_rows_sequential(&mut seq, &xs, &ys, &elements, k);
        fill_rows_parallel(&mut par, &xs, &ys, &elements, k);
        assert_eq!(seq, par);
    }
}
