// Copyright 2022-2023 Martin Pool.

//! Conversion from hue-lightness-saturation to red-green-blue.

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Convert a color from HLS space to RGB.
///
/// All inputs and outputs are in `[0, 1]`. Hue wraps around, so `1.25` is
/// the same hue as `0.25`.
///
/// ```
/// let (r, g, b) = paprika::hls_to_rgb(0.0, 0.5, 1.0);
/// assert_eq!((r, g, b), (1.0, 0.0, 0.0));
/// ```
pub fn hls_to_rgb(hue: f64, lightness: f64, saturation: f64) -> (f64, f64, f64) {
    if saturation == 0.0 {
        return (lightness, lightness, lightness);
    }
    let m2 = if lightness <= 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - (lightness * saturation)
    };
    let m1 = 2.0 * lightness - m2;
    (
        channel(m1, m2, hue + ONE_THIRD),
        channel(m1, m2, hue),
        channel(m1, m2, hue - ONE_THIRD),
    )
}

fn channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}
