//! Packs and unpacks the integer gene against a fixed bit-layout table.
//!
//! Every trait occupies a contiguous run of bits; the shift of a field is the
//! sum of the widths of all fields placed at lower positions. Decode is pure
//! masking arithmetic and cannot fail; encode silently truncates out-of-range
//! field values through the same masks (lenient by design, not an error path).

/// A packed creature gene.
pub type Gene = u64;

/// One row of the bit-layout table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraitField {
    /// Field name, matching the `CreatureTraits` member.
    pub name: &'static str,
    /// Declared bit width; the valid value range is `[0, 2^bits)`.
    pub bits: u32,
}

const fn field(name: &'static str, bits: u32) -> TraitField {
    TraitField { name, bits }
}

/// The authoritative bit layout, lowest bit position first.
pub const TRAIT_LAYOUT: [TraitField; 15] = [
    field("spike_density", 2),
    field("arm_count", 2),
    field("eye_count", 2),
    field("tail_length", 2),
    field("tail_width", 2),
    field("limb_width", 2),
    field("limb_length", 2),
    field("torso_width", 2),
    field("torso_length", 1),
    field("head_width", 2),
    field("head_length", 2),
    field("color2", 6),
    field("color1", 6),
    field("rgb_mode", 1),
    field("shiny", 1),
];

const fn total_bits() -> u32 {
    let mut sum = 0;
    let mut i = 0;
    while i < TRAIT_LAYOUT.len() {
        sum += TRAIT_LAYOUT[i].bits;
        i += 1;
    }
    sum
}

/// Total declared gene width; valid genes are `[0, 2^GENE_BITS)`.
pub const GENE_BITS: u32 = total_bits();

const GENE_MASK: Gene = (1 << GENE_BITS) - 1;

/// Decoded creature traits, one member per bit-layout field.
///
/// Members are plain integers in `[0, 2^bits)` for the field's declared
/// width; values outside that range survive until the next encode, where the
/// field mask truncates them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreatureTraits {
    /// Radial spike strokes are drawn at `spike_density * 3` positions (2 bits).
    pub spike_density: u8,
    /// Limb pair selector; the creature gets `arm_count + 1` legs (2 bits).
    pub arm_count: u8,
    /// Number of eyes to place (2 bits).
    pub eye_count: u8,
    /// Tail axial compression factor (2 bits).
    pub tail_length: u8,
    /// Tail thinning factor (2 bits).
    pub tail_width: u8,
    /// Limb stroke thickness (2 bits).
    pub limb_width: u8,
    /// Limb skeleton length (2 bits).
    pub limb_length: u8,
    /// Torso thinning factor (2 bits).
    pub torso_width: u8,
    /// Torso axial compression factor (1 bit).
    pub torso_length: u8,
    /// Head vertical warp factor (2 bits).
    pub head_width: u8,
    /// Head forward warp factor (2 bits).
    pub head_length: u8,
    /// Accent color index, limbs and spikes (6 bits).
    pub color2: u8,
    /// Body color index (6 bits).
    pub color1: u8,
    /// Palette mode: 0 = literal hex, 1 = hue wheel (1 bit).
    pub rgb_mode: u8,
    /// Adds a translucent highlight over the fore-body (1 bit).
    pub shiny: u8,
}

impl CreatureTraits {
    /// Field values in bit-layout order (lowest bit position first).
    pub fn as_layout_array(&self) -> [u8; TRAIT_LAYOUT.len()] {
        [
            self.spike_density,
            self.arm_count,
            self.eye_count,
            self.tail_length,
            self.tail_width,
            self.limb_width,
            self.limb_length,
            self.torso_width,
            self.torso_length,
            self.head_width,
            self.head_length,
            self.color2,
            self.color1,
            self.rgb_mode,
            self.shiny,
        ]
    }

    /// Rebuild the struct from values in bit-layout order.
    pub fn from_layout_array(values: [u8; TRAIT_LAYOUT.len()]) -> Self {
        let [
            spike_density,
            arm_count,
            eye_count,
            tail_length,
            tail_width,
            limb_width,
            limb_length,
            torso_width,
            torso_length,
            head_width,
            head_length,
            color2,
            color1,
            rgb_mode,
            shiny,
        ] = values;
        Self {
            spike_density,
            arm_count,
            eye_count,
            tail_length,
            tail_width,
            limb_width,
            limb_length,
            torso_width,
            torso_length,
            head_width,
            head_length,
            color2,
            color1,
            rgb_mode,
            shiny,
        }
    }

    /// Normalized factor for a 2-bit morphology field: `value / 4`, in `[0, 0.75]`.
    pub(crate) fn factor2(value: u8) -> f64 {
        f64::from(value & 0b11) / 4.0
    }

    /// Normalized factor for a 1-bit morphology field: `value / 2`, in `{0, 0.5}`.
    pub(crate) fn factor1(value: u8) -> f64 {
        f64::from(value & 0b1) / 2.0
    }
}

/// Extract every declared field from `gene` by shift-and-mask.
///
/// Bits above [`GENE_BITS`] are ignored.
pub fn decode_gene(gene: Gene) -> CreatureTraits {
    let mut values = [0u8; TRAIT_LAYOUT.len()];
    let mut shift = 0u32;
    for (value, field) in values.iter_mut().zip(TRAIT_LAYOUT.iter()) {
        let mask: Gene = (1 << field.bits) - 1;
        *value = ((gene >> shift) & mask) as u8;
        shift += field.bits;
    }
    CreatureTraits::from_layout_array(values)
}

/// Pack `traits` back into a gene, masking each field to its declared width.
pub fn encode_gene(traits: &CreatureTraits) -> Gene {
    let mut gene: Gene = 0;
    let mut shift = 0u32;
    for (value, field) in traits.as_layout_array().iter().zip(TRAIT_LAYOUT.iter()) {
        let mask: Gene = (1 << field.bits) - 1;
        gene |= (Gene::from(*value) & mask) << shift;
        shift += field.bits;
    }
    gene & GENE_MASK
}

#[cfg(test)]
#[path = "../../tests/unit/genome/codec.rs"]
mod tests;
