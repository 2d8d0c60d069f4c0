//! Deterministischer Zufalls-Versatz für Abstand, Seitenversatz und Erscheinung.
//!
//! Alle Generatoren werden aus der aktuellen Pfadlänge (bzw. dem Radius) und
//! dem festen Seed abgeleitet: bei unverändertem Pfad bleibt die Vorschau
//! stabil, jede Längenänderung würfelt neu.

use crate::shared::options::{PlacementSettings, MIN_SPACING};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Salt für den Seitenversatz-Generator
const OFFSET_SALT: u64 = 0x5eed_0ff5;
/// Salt für den Erscheinungs-Generator
const APPEARANCE_SALT: u64 = 0xa99e_a4a0;

/// Seed aus abgeschnittener Länge: `trunc(length) · 1000 XOR salt`.
///
/// Pfade gleicher ganzzahliger Länge teilen sich den Seed.
pub fn seed_for_length(length: f32, salt: u64) -> u64 {
    let whole = if length.is_finite() {
        length.trunc() as i64
    } else {
        0
    };
    (whole as u64).wrapping_mul(1000) ^ salt
}

/// Begrenzte, gleichverteilte Störungen in [-max, max].
#[derive(Debug, Clone)]
pub struct RandomJitter {
    spacing_max: f32,
    offset_max: f32,
    spacing_rng: StdRng,
    offset_rng: StdRng,
    appearance_rng: StdRng,
    randomize_appearance: bool,
    fixed_seed: u32,
}

impl RandomJitter {
    /// Jitter nach Einstellungen, geseedet aus `seed_length`.
    pub fn new(seed_length: f32, settings: &PlacementSettings) -> Self {
        let salt = settings.fixed_seed as u32 as u64;
        let seed = seed_for_length(seed_length, salt);
        Self {
            spacing_max: settings.random_spacing_max.max(0.0),
            offset_max: settings.random_offset_max.max(0.0),
            spacing_rng: StdRng::seed_from_u64(seed),
            offset_rng: StdRng::seed_from_u64(seed ^ OFFSET_SALT),
            appearance_rng: StdRng::seed_from_u64(seed ^ APPEARANCE_SALT),
            randomize_appearance: settings.randomize_appearance,
            fixed_seed: settings.fixed_seed as u32,
        }
    }

    /// Ohne Abstands- und Versatz-Jitter (Zaun-/W2W-Modus). Erscheinungs-Seeds bleiben aktiv.
    pub fn disabled(seed_length: f32, settings: &PlacementSettings) -> Self {
        let mut jitter = Self::new(seed_length, settings);
        jitter.spacing_max = 0.0;
        jitter.offset_max = 0.0;
        jitter
    }

    /// Nächste Abstands-Störung.
    pub fn spacing_offset(&mut self) -> f32 {
        draw(&mut self.spacing_rng, self.spacing_max)
    }

    /// Nächster Seitenversatz (senkrecht zur Pfadtangente).
    pub fn lateral_offset(&mut self) -> f32 {
        draw(&mut self.offset_rng, self.offset_max)
    }

    /// Gestörter Schritt, nie kleiner als `MIN_SPACING`.
    pub fn apply_step(&mut self, base: f32) -> f32 {
        (base + self.spacing_offset()).max(MIN_SPACING)
    }

    /// Erscheinungs-Seed für den nächsten Punkt.
    pub fn appearance_seed(&mut self) -> u32 {
        if self.randomize_appearance {
            self.appearance_rng.gen()
        } else {
            self.fixed_seed
        }
    }
}

fn draw(rng: &mut StdRng, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(-max..=max)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jittery() -> PlacementSettings {
        PlacementSettings {
            random_spacing_max: 2.0,
            random_offset_max: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_same_length_same_sequence() {
        let mut a = RandomJitter::new(42.7, &jittery());
        let mut b = RandomJitter::new(42.2, &jittery());
        for _ in 0..10 {
            assert_eq!(a.spacing_offset(), b.spacing_offset());
            assert_eq!(a.lateral_offset(), b.lateral_offset());
        }
    }

    #[test]
    fn test_other_length_other_sequence() {
        let mut a = RandomJitter::new(42.0, &jittery());
        let mut b = RandomJitter::new(43.0, &jittery());
        let sa: Vec<f32> = (0..5).map(|_| a.spacing_offset()).collect();
        let sb: Vec<f32> = (0..5).map(|_| b.spacing_offset()).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn test_offsets_bounded() {
        let mut j = RandomJitter::new(10.0, &jittery());
        for _ in 0..200 {
            assert!(j.spacing_offset().abs() <= 2.0);
            assert!(j.lateral_offset().abs() <= 1.0);
        }
    }

    #[test]
    fn test_disabled_is_zero() {
        let mut j = RandomJitter::disabled(10.0, &jittery());
        assert_eq!(j.lateral_offset(), 0.0);
        assert_eq!(j.spacing_offset(), 0.0);
        assert_eq!(j.apply_step(5.0), 5.0);
    }

    #[test]
    fn test_appearance_fixed_unless_randomized() {
        let mut settings = PlacementSettings {
            fixed_seed: 7,
            ..Default::default()
        };
        let mut j = RandomJitter::new(10.0, &settings);
        assert_eq!(j.appearance_seed(), 7);
        settings.randomize_appearance = true;
        let mut a = RandomJitter::new(10.0, &settings);
        let mut b = RandomJitter::new(10.0, &settings);
        assert_eq!(a.appearance_seed(), b.appearance_seed());
    }
}
