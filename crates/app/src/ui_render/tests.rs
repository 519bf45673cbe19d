use super::{centered_x, health_bar_fraction};

#[test]
fn full_health_fills_the_bar() {
    assert_eq!(health_bar_fraction(100, 100), 1.0);
}

#[test]
fn partial_health_scales_linearly() {
    assert!((health_bar_fraction(85, 100) - 0.85).abs() < 0.0001);
}

#[test]
fn bar_fraction_is_clamped() {
    assert_eq!(health_bar_fraction(0, 100), 0.0);
    assert_eq!(health_bar_fraction(-5, 100), 0.0);
    assert_eq!(health_bar_fraction(150, 100), 1.0);
    assert_eq!(health_bar_fraction(10, 0), 0.0);
}

#[test]
fn centering_never_goes_off_screen() {
    assert_eq!(centered_x(200.0, 800.0), 300.0);
    assert_eq!(centered_x(900.0, 800.0), 0.0);
}
