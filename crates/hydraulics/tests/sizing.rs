//! End-to-end sizing scenarios through the public API.

use approx::assert_relative_eq;
use pluvia_hydraulics::{
    ChannelSection, FlowRegime, Material, analyse_channel, conveyance, critical_depth,
    full_circular_capacity, normal_depth, required_base_width, size_circular_conduit,
};

#[test]
fn commercial_scan_matches_default_dashboard_range() {
    // 5 cm .. 3 m in 1 cm increments, concrete pipe at 1 %.
    let n = Material::FinishedConcrete.roughness();
    let design = size_circular_conduit(0.3, n, 0.01, 0.05, 3.0, 0.01).unwrap();

    assert!(design.capacity() >= 0.3);
    let one_step_smaller = full_circular_capacity(design.diameter() - 0.01, n, 0.01);
    assert!(
        one_step_smaller < 0.3,
        "d={} is not the smallest adequate diameter",
        design.diameter()
    );
}

#[test]
fn rougher_material_needs_larger_pipe() {
    let smooth = size_circular_conduit(0.5, Material::SmoothPvc.roughness(), 0.005, 0.05, 3.0, 0.01)
        .unwrap();
    let rough = size_circular_conduit(
        0.5,
        Material::RoughConcrete.roughness(),
        0.005,
        0.05,
        3.0,
        0.01,
    )
    .unwrap();
    assert!(rough.diameter() > smooth.diameter());
}

#[test]
fn normal_depth_and_base_width_are_consistent() {
    let (z, s, n, q) = (1.5, 0.002, Material::AverageEarth.roughness(), 4.0);
    let y = normal_depth(q, 3.0, z, s, n).unwrap();
    let b = required_base_width(q, z, y, s, n).unwrap();
    assert_relative_eq!(b, 3.0, epsilon = 1e-3);
}

#[test]
fn normal_depth_grows_with_flow() {
    let mut prev = 0.0;
    for q in [0.5, 1.0, 2.0, 4.0, 8.0] {
        let y = normal_depth(q, 2.0, 1.0, 0.001, 0.015).unwrap();
        assert!(y > prev, "q={q}: y={y} <= {prev}");
        prev = y;
    }
}

#[test]
fn critical_depth_independent_of_slope_and_roughness() {
    let yc = critical_depth(3.0, 2.0, 1.0).unwrap();
    let a = analyse_channel(3.0, 2.0, 1.0, 0.001, 0.013).unwrap();
    let b = analyse_channel(3.0, 2.0, 1.0, 0.02, 0.035).unwrap();
    assert_eq!(a.critical_depth, Some(yc));
    assert_eq!(b.critical_depth, Some(yc));
}

#[test]
fn regime_matches_froude_at_normal_depth() {
    for slope in [0.0002, 0.001, 0.01, 0.05] {
        let design = analyse_channel(2.0, 1.5, 0.5, slope, 0.014).unwrap();
        match design.regime.unwrap() {
            FlowRegime::Subcritical => assert!(design.froude < 1.0 + 1e-3),
            FlowRegime::Supercritical => assert!(design.froude > 1.0 - 1e-3),
        }
    }
}

#[test]
fn capacity_at_given_depth() {
    let section = ChannelSection::new(1.0, 1.0, 0.5);
    let q = conveyance(
        section.area(),
        section.wetted_perimeter(),
        0.001,
        Material::Custom(0.015).roughness(),
    );
    let y = normal_depth(q, 1.0, 1.0, 0.001, 0.015).unwrap();
    assert_relative_eq!(y, 0.5, epsilon = 1e-4);
}
