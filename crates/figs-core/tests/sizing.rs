// File: crates/figs-core/tests/sizing.rs
// Purpose: Figure width scales with bar count within fixed clamps.

use figs_core::FigSize;

#[test]
fn width_scales_and_clamps() {
    // 0.65 * 2 + 3 = 4.3 -> clamped up to the floor
    assert_eq!(FigSize::for_bar_count(2, 300.0).width_in, 5.5);
    // 0.65 * 5 + 3 = 6.25, inside the clamp window
    assert!((FigSize::for_bar_count(5, 300.0).width_in - 6.25).abs() < 1e-5);
    // 0.65 * 40 + 3 = 29 -> clamped down to the ceiling
    assert_eq!(FigSize::for_bar_count(40, 300.0).width_in, 14.0);
}

#[test]
fn height_is_fixed() {
    for bars in [1, 4, 25] {
        assert_eq!(FigSize::for_bar_count(bars, 300.0).height_in, 4.2);
    }
}

#[test]
fn pixel_dimensions_follow_dpi() {
    let size = FigSize::for_bar_count(4, 300.0);
    assert_eq!(size.height_px(), 1260); // 4.2 in at 300 dpi
    assert_eq!(size.width_px(), (size.width_in * 300.0).round() as i32);

    // Two typographic points at 300 dpi is the annotation offset
    assert!((size.pt(2.0) - 8.333_333).abs() < 1e-3);
}
