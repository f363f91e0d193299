//! End-to-end checks on the design pipeline across a handful of footings.

use footing_core::calculations::sizing::size_footing;
use footing_core::equations::{PLAN_MODULUS_CM, SPACING_MODULUS_CM, THICKNESS_MODULUS_CM};
use footing_core::materials::RebarSize;
use footing_core::{calculate, calculate_with, CalcError, DesignWarning, FootingInput, SolverSettings};

fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() < tol
}

fn scenarios() -> Vec<FootingInput> {
    let base = FootingInput::default();
    vec![
        base.clone(),
        FootingInput {
            label: "light".to_string(),
            dead_load_tonf: 60.0,
            live_load_tonf: 25.0,
            eccentricity_m: 0.10,
            ..base.clone()
        },
        FootingInput {
            label: "concentric".to_string(),
            dead_load_tonf: 120.0,
            live_load_tonf: 80.0,
            eccentricity_m: 0.0,
            concrete_strength_kgf_cm2: 280.0,
            ..base.clone()
        },
        FootingInput {
            label: "heavy".to_string(),
            dead_load_tonf: 250.0,
            live_load_tonf: 90.0,
            eccentricity_m: 0.35,
            allowable_bearing_tonf_m2: 45.0,
            ..base.clone()
        },
        FootingInput {
            label: "soft soil".to_string(),
            dead_load_tonf: 40.0,
            live_load_tonf: 15.0,
            eccentricity_m: 0.05,
            allowable_bearing_tonf_m2: 20.0,
            cover_cm: 7.5,
            column_dim1_cm: 40.0,
            column_dim2_cm: 40.0,
            ..base
        },
    ]
}

#[test]
fn plan_size_is_rounded_up_to_modulus() {
    for input in scenarios() {
        let design = calculate(&input).unwrap();
        let s = &design.sizing;
        assert_eq!(s.width_cm % PLAN_MODULUS_CM, 0.0, "{}", input.label);
        assert!(s.width_cm >= s.raw_side_length_cm, "{}", input.label);
        assert!(s.width_cm - s.raw_side_length_cm < PLAN_MODULUS_CM, "{}", input.label);
        assert_eq!(s.width_cm, s.length_cm);
        assert!(s.max_edge_pressure <= s.net_allowable_pressure, "{}", input.label);
    }
}

#[test]
fn thickness_and_depth_are_consistent() {
    for input in scenarios() {
        let design = calculate(&input).unwrap();
        let shear = &design.shear;
        assert_eq!(shear.thickness_cm % THICKNESS_MODULUS_CM, 0.0, "{}", input.label);
        assert_eq!(shear.thickness_cm - input.cover_cm, shear.effective_depth_cm, "{}", input.label);
        assert!(shear.effective_depth_cm >= shear.raw_effective_depth_cm, "{}", input.label);
        // Rounding up only adds depth, so the section has spare shear capacity
        assert!(shear.factored_shear_kgf <= shear.shear_capacity_kgf + 1.0, "{}", input.label);
    }
}

#[test]
fn adopted_spacing_never_exceeds_theoretical() {
    for input in scenarios() {
        let design = calculate(&input).unwrap();
        assert_eq!(design.bar_spacing.len(), RebarSize::ALL.len());
        for row in &design.bar_spacing {
            assert!(row.adopted_spacing_cm <= row.theoretical_spacing_cm, "{} {}", input.label, row.bar);
            assert_eq!(row.adopted_spacing_cm % SPACING_MODULUS_CM, 0.0);
        }
    }
}

#[test]
fn compression_block_fits_in_section() {
    for input in scenarios() {
        let design = calculate(&input).unwrap();
        let y = design.flexure.compression_depth_cm;
        assert!(y > 0.0 && y < design.shear.effective_depth_cm, "{}", input.label);
        assert!(design.flexure.required_steel_area_cm2 > 0.0);
    }
}

#[test]
fn repeated_runs_are_identical() {
    for input in scenarios() {
        let first = calculate(&input).unwrap();
        let second = calculate(&input).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn steel_grows_with_dead_load_at_fixed_geometry() {
    // 175..185 Tn all land on a 350 cm plan and a 60 cm thickness
    let mut previous = 0.0;
    for dead in [175.0, 177.0, 180.0, 182.0, 185.0] {
        let input = FootingInput {
            dead_load_tonf: dead,
            ..FootingInput::default()
        };
        let design = calculate(&input).unwrap();
        assert_eq!(design.sizing.width_cm, 350.0);
        assert_eq!(design.shear.thickness_cm, 60.0);
        assert!(design.flexure.required_steel_area_cm2 > previous, "dead = {}", dead);
        previous = design.flexure.required_steel_area_cm2;
    }
}

#[test]
fn reference_footing() {
    let design = calculate(&FootingInput::default()).unwrap();

    assert_eq!(design.sizing.service_load_kgf, 245_000.0);
    assert_eq!(design.sizing.service_moment_kgf_cm, 6_125_000.0);
    assert!(design.sizing.net_allowable_pressure > 0.0);
    assert!(design.sizing.width_cm > design.sizing.raw_side_length_cm);
    assert!(design.sizing.min_edge_pressure < design.sizing.max_edge_pressure);

    assert_eq!(design.shear.thickness_cm, 60.0);
    assert_eq!(design.shear.effective_depth_cm, 55.0);
    assert_eq!(design.shear.punching_perimeter_cm, 490.0);
    assert!(approx_eq(design.flexure.required_steel_area_cm2, 53.739, 0.01));

    // Bigger bars, wider spacing
    let adopted: Vec<f64> = design.bar_spacing.iter().map(|r| r.adopted_spacing_cm).collect();
    assert_eq!(adopted, vec![5.0, 10.0, 20.0, 30.0, 50.0]);
    assert!(adopted.windows(2).all(|w| w[0] < w[1]));
    assert!(design.warnings.is_empty());
}

#[test]
fn overburden_exceeding_bearing_is_infeasible() {
    // q = 2.1 Tn/m³ · 1.7 m = 3.57 Tn/m² > 3.0 Tn/m²
    let input = FootingInput {
        allowable_bearing_tonf_m2: 3.0,
        ..FootingInput::default()
    };
    let err = calculate(&input).unwrap_err();
    assert!(matches!(err, CalcError::SizingInfeasible { .. }));
    assert!(err.is_design_inadequacy());
}

#[test]
fn zero_concrete_strength_is_rejected() {
    let input = FootingInput {
        concrete_strength_kgf_cm2: 0.0,
        ..FootingInput::default()
    };
    let err = calculate(&input).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn sizing_stage_runs_on_its_own() {
    let normalized = FootingInput::default().normalize().unwrap();
    let sizing = size_footing(
        &normalized.loads,
        &normalized.soil,
        &normalized.materials,
        &SolverSettings::default(),
    )
    .unwrap();
    assert_eq!(sizing.width_cm, 350.0);
    assert!(approx_eq(sizing.raw_side_length_cm, 324.879, 0.01));
}

#[test]
fn iteration_budget_exhaustion_names_the_stage() {
    let settings = SolverSettings {
        max_iterations: 3,
        ..SolverSettings::default()
    };
    let err = calculate_with(&FootingInput::default(), &settings).unwrap_err();
    assert_eq!(
        err,
        CalcError::SolverDivergence {
            stage: "service sizing".to_string(),
            iterations: 3,
        }
    );
    assert!(!err.is_design_inadequacy());
}

#[test]
fn heavy_footing_flags_small_bars() {
    // 2800 Tn on 100 Tn/m² soil: B = 650 cm, h = 190 cm, As ≈ 397.7 cm²
    let input = FootingInput {
        label: "heavy pier".to_string(),
        dead_load_tonf: 2000.0,
        live_load_tonf: 800.0,
        allowable_bearing_tonf_m2: 100.0,
        ..FootingInput::default()
    };
    let design = calculate(&input).unwrap();
    assert_eq!(design.sizing.width_cm, 650.0);
    assert_eq!(design.shear.thickness_cm, 190.0);

    let adopted: Vec<f64> = design.bar_spacing.iter().map(|r| r.adopted_spacing_cm).collect();
    assert_eq!(adopted, vec![0.0, 0.0, 5.0, 5.0, 10.0]);

    let flagged: Vec<RebarSize> = design
        .warnings
        .iter()
        .filter_map(|w| match w {
            DesignWarning::SpacingBelowModulus { bar, .. } => Some(*bar),
            DesignWarning::Uplift { .. } => None,
        })
        .collect();
    assert_eq!(flagged, vec![RebarSize::D12, RebarSize::D16]);
    assert_eq!(design.warnings.len(), 2);
}

#[test]
fn zero_solver_tolerance_is_rejected() {
    let settings = SolverSettings {
        tolerance: 0.0,
        ..SolverSettings::default()
    };
    match calculate_with(&FootingInput::default(), &settings) {
        Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "solver.tolerance"),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}
