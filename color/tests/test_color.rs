use drawing_color::convert::{
    cmyk_components_to_rgb_components, rgb_components_to_cmyk_components,
    rgb_components_to_rgb_value, rgba_value_to_rgba_components,
};
use drawing_color::html::{html_to_rgba_value, rgba_value_to_html};
use drawing_color::validator::is_valid_html_value;
use drawing_color::{CmykColor, Color, ColorModel, RgbaColor, ValidationError};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_packed_round_trip() {
    init();
    for red in (0..=255_i64).step_by(5) {
        for green in 0..=255_i64 {
            for blue in (0..=255_i64).step_by(7) {
                let value = rgb_components_to_rgb_value(red, green, blue).unwrap();
                let c = rgba_value_to_rgba_components(value as i64).unwrap();
                assert_eq!(
                    (c.red, c.green, c.blue, c.alpha),
                    (red as u8, green as u8, blue as u8, 0xFF)
                );
            }
        }
    }
}

#[test]
fn test_html_round_trip() {
    init();
    for value in (0..=0xFFFFFF_i64).step_by(0x1F3) {
        let html = rgba_value_to_html(value).unwrap();
        assert_eq!(html_to_rgba_value(&html).unwrap() as i64, value);
    }
    assert_eq!(rgba_value_to_html(0xFFFFFF).unwrap(), "#ffffff");
    assert_eq!(rgba_value_to_html(0xFFA500).unwrap(), "#ffa500");
    assert_eq!(html_to_rgba_value("red").unwrap(), 0xFF0000);
    assert!(is_valid_html_value("#f00"));
}

#[test]
fn test_canonical_colors() {
    init();
    let cases = [
        ("black", (0, 0, 0), (0, 0, 0, 100)),
        ("white", (255, 255, 255), (0, 0, 0, 0)),
        ("red", (255, 0, 0), (0, 100, 100, 0)),
        ("lime", (0, 255, 0), (100, 0, 100, 0)),
        ("blue", (0, 0, 255), (100, 100, 0, 0)),
    ];
    for (name, (r, g, b), (c, m, y, k)) in cases {
        let cmyk = rgb_components_to_cmyk_components(r, g, b).unwrap();
        assert_eq!(
            (cmyk.cyan as i64, cmyk.magenta as i64, cmyk.yellow as i64, cmyk.key as i64),
            (c, m, y, k)
        );
        let rgb = cmyk_components_to_rgb_components(c, m, y, k).unwrap();
        assert_eq!((rgb.red as i64, rgb.green as i64, rgb.blue as i64), (r, g, b));

        let rgba = RgbaColor::from_html(name).unwrap();
        let expected = CmykColor::from_components(c, m, y, k).unwrap();
        assert_eq!(rgba.as_cmyk_color(), expected);
        assert_eq!(expected.as_rgba_color(), rgba);
        assert_eq!(CmykColor::from_html(name).unwrap(), expected);
    }
}

#[test]
fn test_boundaries() {
    init();
    assert!(RgbaColor::from_components(0, 0, 0, 0).is_ok());
    assert!(RgbaColor::from_components(255, 255, 255, 255).is_ok());
    assert!(CmykColor::from_components(0, 0, 0, 0).is_ok());
    assert!(CmykColor::from_components(100, 100, 100, 100).is_ok());

    match RgbaColor::from_components(0, 0, 256, 0) {
        Err(ValidationError::RgbaComponent { name, value }) => {
            assert_eq!(name, "blue");
            assert_eq!(value, 256);
        }
        other => panic!("expected blue to be rejected, got:{:?}", other),
    }
    let err = CmykColor::from_components(0, -1, 0, 0).unwrap_err();
    assert_eq!(err.component(), "magenta");
    assert!(err.to_string().contains("less than 0 or greater than 100"));
}

#[test]
fn test_css_strings() {
    init();
    let cmyk = CmykColor::from_components(0, 35, 100, 0).unwrap();
    assert_eq!(cmyk.to_css_string(), "device-cmyk(0, 35, 100, 0)");
    let rgba = RgbaColor::from_components(255, 165, 0, 15).unwrap();
    assert_eq!(rgba.to_css_string(), "rgba(255, 165, 0, 0.06)");
}

#[test]
fn test_equality() {
    init();
    let a = RgbaColor::from_rgb_components(255, 0, 0).unwrap();
    let b = RgbaColor::from_value(0xFF0000).unwrap();
    let c = RgbaColor::from_html("red").unwrap();
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_ne!(a, RgbaColor::from_components(255, 0, 0, 254).unwrap());

    let cmyk = a.as_cmyk_color();
    assert_ne!(Color::from(a), Color::from(cmyk));
    assert_eq!(Color::from(cmyk), Color::Cmyk(CmykColor::from_value(0xFF0000).unwrap()));
}

#[test]
fn test_shared_between_threads() {
    init();
    let color = RgbaColor::from_html("orange").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || color.as_cmyk_color().to_html_string()))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "#ffa500");
    }
}
