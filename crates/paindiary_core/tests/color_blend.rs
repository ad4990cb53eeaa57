use paindiary_core::{blend, severity_color, ColorError, Rgba};

#[test]
fn blend_endpoints_select_each_color() {
    assert_eq!(blend(Rgba::RED, Rgba::GREEN, 0.0).unwrap(), Rgba::GREEN);
    assert_eq!(blend(Rgba::RED, Rgba::GREEN, 1.0).unwrap(), Rgba::RED);
}

#[test]
fn blend_midpoint_rounds_each_channel() {
    assert_eq!(
        blend(Rgba::RED, Rgba::GREEN, 0.5).unwrap(),
        Rgba::new(128, 128, 0, 255)
    );
    assert_eq!(
        blend(Rgba::new(10, 0, 0, 255), Rgba::TRANSPARENT, 0.25).unwrap(),
        Rgba::new(3, 0, 0, 64)
    );
}

#[test]
fn blend_rejects_factor_outside_unit_interval() {
    assert_eq!(
        blend(Rgba::RED, Rgba::GREEN, 1.5).unwrap_err(),
        ColorError::FactorOutOfRange { factor: 1.5 }
    );
    assert!(blend(Rgba::RED, Rgba::GREEN, -0.01).is_err());
    assert!(blend(Rgba::RED, Rgba::GREEN, f32::NAN).is_err());
}

#[test]
fn severity_color_runs_from_green_to_red() {
    assert_eq!(severity_color(0.0).unwrap(), Rgba::GREEN);
    assert_eq!(severity_color(10.0).unwrap(), Rgba::RED);
    assert_eq!(severity_color(5.0).unwrap(), Rgba::new(128, 128, 0, 255));
    assert!(severity_color(11.0).is_err());
}
