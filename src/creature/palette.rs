//! Trait-derived colors.
//!
//! Two palette modes share the 6-bit color indices: hue-wheel mode maps an
//! index to `hsl(index * 60 mod 360, 70%, 50%)`, literal mode reads the index
//! as a raw 24-bit hex color (which lands in the near-black blues; preserved
//! verbatim from the reference behavior).

use crate::foundation::core::Rgba8;
use crate::genome::codec::CreatureTraits;

/// Resolved creature colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Torso, tail and head fill.
    pub body: Rgba8,
    /// Limb and spike strokes.
    pub accent: Rgba8,
    /// Eye fill.
    pub eye: Rgba8,
    /// Translucent fore-body highlight, present only for shiny genes.
    pub highlight: Option<Rgba8>,
}

/// Outline stroke shared by the filled body shapes.
pub(crate) const OUTLINE: Rgba8 = Rgba8::opaque(0, 0, 0);

const EYE_GREEN: Rgba8 = Rgba8::opaque(0, 128, 0);
const HIGHLIGHT_WHITE: Rgba8 = Rgba8::new(255, 255, 255, 77); // 30% alpha

/// Resolve the palette for a trait struct.
pub fn palette_for(traits: &CreatureTraits) -> Palette {
    Palette {
        body: index_color(traits.color1, traits.rgb_mode == 1),
        accent: index_color(traits.color2, traits.rgb_mode == 1),
        eye: EYE_GREEN,
        highlight: (traits.shiny == 1).then_some(HIGHLIGHT_WHITE),
    }
}

fn index_color(index: u8, hue_mode: bool) -> Rgba8 {
    if hue_mode {
        let hue = f64::from(u32::from(index) * 60 % 360);
        hsl_to_rgb(hue, 0.7, 0.5)
    } else {
        let v = u32::from(index);
        Rgba8::opaque(((v >> 16) & 0xff) as u8, ((v >> 8) & 0xff) as u8, (v & 0xff) as u8)
    }
}

/// Standard HSL to RGB conversion; `h` in degrees, `s`/`l` in `[0, 1]`.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgba8 {
    let c = (1.0 - ((2.0 * l) - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - ((hp % 2.0) - 1.0).abs());
    let (r1, g1, b1) = match hp {
        hp if hp < 1.0 => (c, x, 0.0),
        hp if hp < 2.0 => (x, c, 0.0),
        hp if hp < 3.0 => (0.0, c, x),
        hp if hp < 4.0 => (0.0, x, c),
        hp if hp < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - (c / 2.0);
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgba8::opaque(to_u8(r1), to_u8(g1), to_u8(b1))
}
