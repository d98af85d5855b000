//! Human-readable palette names: `"<tone> <hue> <harmony>"`.
//!
//! The hue word and harmony word are fixed by the input. The tone word is
//! drawn at random from a pool picked by lightness, so regenerating the same
//! palette can produce "Bold Azure Trio" one time and "Pure Azure Trio" the
//! next. That variety is intended; callers that need a stable name pass a
//! seeded generator.

use prism_color::Color;
use rand::Rng;

use crate::harmony::HarmonyType;

/// Hue words for the twelve 30° buckets, starting at 0°.
pub const HUE_NAMES: [&str; 12] = [
    "Crimson", "Coral", "Amber", "Golden", "Lime", "Emerald",
    "Teal", "Azure", "Sapphire", "Violet", "Magenta", "Rose",
];

const LIGHT_TONES: [&str; 3] = ["Light", "Pale", "Soft"];
const DARK_TONES: [&str; 3] = ["Deep", "Dark", "Rich"];
const VIBRANT_TONES: [&str; 3] = ["Vibrant", "Bold", "Pure"];

/// Suffix word for a harmony.
#[must_use]
pub const fn harmony_suffix(harmony: HarmonyType) -> &'static str {
    match harmony {
        HarmonyType::Analogous => "Harmony",
        HarmonyType::Complementary => "Contrast",
        HarmonyType::Triadic => "Trio",
        HarmonyType::Tetradic => "Quad",
        HarmonyType::SplitComplementary => "Split",
        HarmonyType::Monochromatic => "Mono",
    }
}

/// Hue word for an angle in degrees.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_name(hue: f64) -> &'static str {
    if !(0.0..360.0).contains(&hue) {
        return "Spectrum";
    }
    HUE_NAMES.get((hue / 30.0).floor() as usize).copied().unwrap_or("Spectrum")
}

/// Tone words for a lightness in [0, 1].
#[must_use]
pub fn tone_pool(lightness: f64) -> &'static [&'static str] {
    if lightness > 0.7 {
        &LIGHT_TONES
    } else if lightness < 0.3 {
        &DARK_TONES
    } else {
        &VIBRANT_TONES
    }
}

/// Name a palette generated from `base` with `harmony`, drawing the tone
/// word from `rng`.
#[must_use]
pub fn generate_palette_name<R: Rng + ?Sized>(
    harmony: HarmonyType,
    base: Color,
    rng: &mut R,
) -> String {
    let (hue, _, lightness) = base.hsl_f();
    let pool = tone_pool(lightness);
    let tone = pool[rng.gen_range(0..pool.len())];
    format!("{tone} {} {}", hue_name(hue), harmony_suffix(harmony))
}

/// [`generate_palette_name`] with the thread-local generator.
#[must_use]
pub fn random_palette_name(harmony: HarmonyType, base: Color) -> String {
    generate_palette_name(harmony, base, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hex(s: &str) -> Color {
        Color::from_hex(s).unwrap()
    }

    #[test]
    fn hue_buckets() {
        assert_eq!(hue_name(0.0), "Crimson");
        assert_eq!(hue_name(29.9), "Crimson");
        assert_eq!(hue_name(30.0), "Coral");
        assert_eq!(hue_name(217.0), "Azure");
        assert_eq!(hue_name(359.9), "Rose");
    }

    #[test]
    fn out_of_table_hue_is_spectrum() {
        assert_eq!(hue_name(360.0), "Spectrum");
        assert_eq!(hue_name(f64::NAN), "Spectrum");
    }

    #[test]
    fn tone_pools_by_lightness() {
        assert_eq!(tone_pool(0.8), &LIGHT_TONES);
        assert_eq!(tone_pool(0.2), &DARK_TONES);
        assert_eq!(tone_pool(0.5), &VIBRANT_TONES);
        // Boundaries fall into the vibrant pool.
        assert_eq!(tone_pool(0.7), &VIBRANT_TONES);
        assert_eq!(tone_pool(0.3), &VIBRANT_TONES);
    }

    #[test]
    fn suffixes() {
        let words: Vec<&str> = HarmonyType::all().iter().map(|&h| harmony_suffix(h)).collect();
        assert_eq!(words, ["Harmony", "Contrast", "Trio", "Quad", "Split", "Mono"]);
    }

    #[test]
    fn name_shape() {
        let name = generate_palette_name(
            HarmonyType::Triadic,
            hex("#3B82F6"),
            &mut StdRng::seed_from_u64(1),
        );
        let words: Vec<&str> = name.split(' ').collect();
        assert_eq!(words.len(), 3);
        assert!(VIBRANT_TONES.contains(&words[0]), "tone {}", words[0]);
        assert_eq!(words[1], "Azure");
        assert_eq!(words[2], "Trio");
    }

    /// The tone word is random by design; a seeded generator pins it.
    #[test]
    fn seeded_rng_pins_the_tone_word() {
        let base = hex("#1e3a8a");
        let name = |seed| {
            generate_palette_name(HarmonyType::Monochromatic, base, &mut StdRng::seed_from_u64(seed))
        };
        let a = name(9);
        let b = name(9);
        assert_eq!(a, b);
        assert!(a.ends_with("Sapphire Mono") || a.ends_with("Azure Mono"), "{a}");
    }

    /// Non-deterministic across calls: every tone in the pool shows up.
    #[test]
    fn tone_word_varies_across_calls() {
        let base = hex("#fde68a");
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen: Vec<String> = (0..200)
            .map(|_| {
                let name = generate_palette_name(HarmonyType::Analogous, base, &mut rng);
                name.split(' ').next().unwrap_or_default().to_string()
            })
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen, ["Light", "Pale", "Soft"]);
    }

    #[test]
    fn thread_rng_variant_has_fixed_parts() {
        let name = random_palette_name(HarmonyType::SplitComplementary, hex("#111827"));
        assert!(name.ends_with(" Split"), "{name}");
    }
}
