//! Twinkle particles for tile merges.
//!
//! A purely cosmetic subscriber: it consumes merge events and produces
//! short-lived particles for the renderer to draw. Nothing here feeds back
//! into grid state, and a dropped frame of particles loses nothing.

use crate::core::GameRng;
use crate::engine::MergeEvent;
use super::layout::BoardLayout;

/// Smallest merge value that produces a twinkle.
pub const TWINKLE_THRESHOLD: u32 = 64;

/// Particle count cap per merge.
const MAX_PARTICLES_PER_MERGE: u32 = 20;

/// One decorative particle. Alpha decays linearly with remaining lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwinkleParticle {
    /// Board-local position.
    pub x: f32,
    pub y: f32,
    /// Diameter in pixels.
    pub size: f32,
    lifetime: u32,
    max_lifetime: u32,
}

impl TwinkleParticle {
    /// Create a particle with the given lifetime in frames.
    #[must_use]
    pub fn new(x: f32, y: f32, size: f32, lifetime: u32) -> Self {
        Self {
            x,
            y,
            size,
            lifetime,
            max_lifetime: lifetime,
        }
    }

    /// Advance one frame. Returns whether the particle is still alive.
    pub fn update(&mut self) -> bool {
        self.lifetime = self.lifetime.saturating_sub(1);
        self.lifetime > 0
    }

    /// Current opacity, 255 at spawn down to 0 at expiry.
    #[must_use]
    pub fn alpha(&self) -> u8 {
        ((self.lifetime as f32 / self.max_lifetime as f32) * 255.0) as u8
    }

    /// Remaining lifetime in frames.
    #[must_use]
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }
}

/// The live particle population, fed by merge events once per move.
#[derive(Clone, Debug)]
pub struct TwinkleField {
    particles: Vec<TwinkleParticle>,
    rng: GameRng,
}

impl TwinkleField {
    /// Create an empty field with its own RNG stream.
    ///
    /// Fork the session RNG (or seed independently) so cosmetic draws never
    /// disturb the spawn stream.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    /// Spawn particles for one move's merge events.
    ///
    /// Merges below [`TWINKLE_THRESHOLD`] are skipped. Bigger merges burst
    /// more particles, capped at 20.
    pub fn spawn_for_merges(&mut self, events: &[MergeEvent], layout: &BoardLayout) {
        for event in events {
            if event.value < TWINKLE_THRESHOLD {
                continue;
            }

            let (cx, cy) = layout.tile_center(event.row, event.col);
            let spread = layout.tile_size / 3.0;
            let count = (event.value.trailing_zeros() * 2).min(MAX_PARTICLES_PER_MERGE);

            for _ in 0..count {
                let dx = self.offset_within(spread);
                let dy = self.offset_within(spread);
                let size = self.rng.gen_range_usize(3..9) as f32 * layout.scale;
                let lifetime = self.rng.gen_range_usize(15..31) as u32;

                self.particles
                    .push(TwinkleParticle::new(cx + dx, cy + dy, size, lifetime));
            }
        }
    }

    /// Advance every particle one frame and drop the expired ones.
    pub fn update(&mut self) {
        self.particles.retain_mut(|particle| particle.update());
    }

    /// The live particles, for the renderer.
    #[must_use]
    pub fn particles(&self) -> &[TwinkleParticle] {
        &self.particles
    }

    /// True when nothing is left to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Drop all particles, e.g. on restart.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    fn offset_within(&mut self, spread: f32) -> f32 {
        let span = (spread * 2.0) as usize;
        if span == 0 {
            return 0.0;
        }
        self.rng.gen_range_usize(0..span + 1) as f32 - spread
    }
}
