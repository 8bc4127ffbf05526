// Invariants of palette generation over arbitrary inputs.

use n_color::{Hsl, Rgb};
use n_swatch::{BASE_INDEX, Intensity, PALETTE_LEN, Palette, generate};
use proptest::prelude::*;

fn any_hsl() -> impl Strategy<Value = Hsl> {
    (0.0f64..1.0, 0.0f64..=1.0, 0.0f64..=1.0).prop_map(|(h, s, l)| Hsl::new(h, s, l))
}

fn any_intensity() -> impl Strategy<Value = Intensity> {
    (-0.1f64..=0.1).prop_map(Intensity::new)
}

proptest! {
    #[test]
    fn hues_are_wrapped(base in any_hsl(), intensity in any_intensity()) {
        for hsl in generate(base, intensity) {
            prop_assert!((0.0..1.0).contains(&hsl.h), "h = {}", hsl.h);
        }
    }

    #[test]
    fn lightness_stays_in_unit_range(base in any_hsl(), intensity in any_intensity()) {
        for hsl in generate(base, intensity) {
            prop_assert!((0.0..=1.0).contains(&hsl.l), "l = {}", hsl.l);
        }
    }

    #[test]
    fn saturation_is_unchanged(base in any_hsl(), intensity in any_intensity()) {
        for hsl in generate(base, intensity) {
            prop_assert_eq!(hsl.s, base.s);
        }
    }

    #[test]
    fn base_swatch_is_the_base(base in any_hsl(), intensity in any_intensity()) {
        let colors = generate(base, intensity);
        prop_assert_eq!(colors.len(), PALETTE_LEN);
        prop_assert_eq!(colors[BASE_INDEX].s, base.s);
        prop_assert_eq!(colors[BASE_INDEX].l, base.l);
        prop_assert_eq!(colors[BASE_INDEX].h.to_bits(), base.h.to_bits());
    }

    #[test]
    fn generation_is_deterministic(base in any_hsl(), pct in 0.0f64..=100.0) {
        let intensity = Intensity::from_percent(pct);
        prop_assert_eq!(generate(base, intensity), generate(base, intensity));
    }

    #[test]
    fn base_swatch_renders_input_hex(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let rgb = Rgb::new(r, g, b);
        let palette = Palette::from_rgb(rgb, Intensity::NEUTRAL);
        let back = palette.base_entry().hsl.to_rgb();
        prop_assert!(
            back.r.abs_diff(r) <= 1 && back.g.abs_diff(g) <= 1 && back.b.abs_diff(b) <= 1,
            "{rgb} came back as {back}"
        );
    }
}
