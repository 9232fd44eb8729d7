//! Animated atom scene
//!
//! The home hero's background: a nucleus with four electron orbits, each
//! rotating at its own period, with electrons pulsing out of phase. A force
//! calculation can flash a transient bar across the scene.

use common::theme;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Shape of one electron orbit
pub struct OrbitSpec {
    pub radius: f32,
    /// Seconds per full rotation
    pub period: f32,
    pub color: [f32; 4],
    pub electrons: usize,
}

/// The four shells, innermost first
pub const ORBITS: [OrbitSpec; 4] = [
    OrbitSpec { radius: 60.0, period: 6.0, color: theme::TEAL, electrons: 2 },
    OrbitSpec { radius: 100.0, period: 10.0, color: theme::ORANGE, electrons: 8 },
    OrbitSpec { radius: 140.0, period: 16.0, color: theme::PURPLE, electrons: 8 },
    OrbitSpec { radius: 180.0, period: 24.0, color: theme::GREEN, electrons: 2 },
];

/// Electron dot radius before pulsing
pub const ELECTRON_RADIUS: f32 = 6.0;

/// Nucleus radius before pulsing
pub const NUCLEUS_RADIUS: f32 = 20.0;

/// Electron pulse cycle length and per-electron phase offset, in seconds
const PULSE_PERIOD: f32 = 2.0;
const PULSE_OFFSET: f32 = 0.5;

/// Nucleus pulse cycle length in seconds
const NUCLEUS_PULSE_PERIOD: f32 = 3.0;

/// Seconds a force flash lives: half expanding, half fading
pub const FLASH_LIFETIME: f32 = 1.0;

/// A renderable dot (electron or nucleus)
pub struct Dot {
    pub position: Vec2,
    pub radius: f32,
    pub color: [f32; 4],
}

/// Transient bar visualizing a computed force
#[derive(Debug, Clone, Copy)]
pub struct ForceFlash {
    force: f32,
    age: f32,
}

impl ForceFlash {
    /// Bar width in px at full expansion: 2 px per newton, capped at 100.
    pub fn full_width(&self) -> f32 {
        (self.force * 2.0).min(100.0)
    }

    /// Current width: eases out to full width over the expansion phase.
    pub fn width(&self) -> f32 {
        let t = (self.age / (FLASH_LIFETIME * 0.5)).clamp(0.0, 1.0);
        let eased = 1.0 - (1.0 - t) * (1.0 - t);
        self.full_width() * eased
    }

    /// Opacity: holds at 0.8 while expanding, then fades to zero.
    pub fn alpha(&self) -> f32 {
        let half = FLASH_LIFETIME * 0.5;
        if self.age <= half {
            0.8
        } else {
            0.8 * (1.0 - (self.age - half) / half).max(0.0)
        }
    }
}

/// Scene state: orbit rotations, pulse clock, and an optional force flash.
pub struct AtomScene {
    /// Per-orbit starting angle, jittered at launch
    start_angles: [f32; ORBITS.len()],
    time: f32,
    flash: Option<ForceFlash>,
}

impl AtomScene {
    pub fn new() -> Self {
        let mut rng = rand::thread_rng();
        let mut start_angles = [0.0; ORBITS.len()];
        for angle in &mut start_angles {
            *angle = rng.gen::<f32>() * TAU;
        }

        Self {
            start_angles,
            time: 0.0,
            flash: None,
        }
    }

    /// Advance rotations and pulses, and age out the force flash.
    pub fn step(&mut self, dt: f32) {
        self.time += dt;

        if let Some(flash) = &mut self.flash {
            flash.age += dt;
            if flash.age >= FLASH_LIFETIME {
                self.flash = None;
            }
        }
    }

    /// Scene clock in seconds since startup
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Begin a force flash. A new calculation replaces any flash in flight.
    pub fn flash_force(&mut self, force: f32) {
        self.flash = Some(ForceFlash { force, age: 0.0 });
    }

    pub fn flash(&self) -> Option<&ForceFlash> {
        self.flash.as_ref()
    }

    /// Every electron of every orbit at its current position and pulse size.
    pub fn electrons(&self) -> Vec<Dot> {
        let mut dots = Vec::new();

        for (orbit_index, orbit) in ORBITS.iter().enumerate() {
            let rotation = self.start_angles[orbit_index] + TAU * self.time / orbit.period;

            for k in 0..orbit.electrons {
                let angle = rotation + TAU * k as f32 / orbit.electrons as f32;
                let phase = self.time - k as f32 * PULSE_OFFSET;
                let pulse = 1.0 + 0.2 * half_wave(phase / PULSE_PERIOD);

                dots.push(Dot {
                    position: Vec2::new(angle.cos(), angle.sin()) * orbit.radius,
                    radius: ELECTRON_RADIUS * pulse,
                    color: orbit.color,
                });
            }
        }

        dots
    }

    /// The pulsing nucleus
    pub fn nucleus(&self) -> Dot {
        let pulse = 1.0 + 0.05 * half_wave(self.time / NUCLEUS_PULSE_PERIOD);
        Dot {
            position: Vec2::ZERO,
            radius: NUCLEUS_RADIUS * pulse,
            color: theme::ORANGE,
        }
    }
}

impl Default for AtomScene {
    fn default() -> Self {
        Self::new()
    }
}

/// Smooth 0→1→0 cycle over one unit of `t`
fn half_wave(t: f32) -> f32 {
    0.5 - 0.5 * (TAU * t).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electron_counts_match_shell_config() {
        let scene = AtomScene::new();
        let expected: usize = ORBITS.iter().map(|o| o.electrons).sum();
        assert_eq!(scene.electrons().len(), expected);
    }

    #[test]
    fn electrons_stay_on_their_orbit() {
        let mut scene = AtomScene::new();
        scene.step(3.7);

        let electrons = scene.electrons();
        let mut i = 0;
        for orbit in &ORBITS {
            for _ in 0..orbit.electrons {
                assert!((electrons[i].position.length() - orbit.radius).abs() < 1e-3);
                i += 1;
            }
        }
    }

    #[test]
    fn pulse_stays_in_bounds() {
        let mut scene = AtomScene::new();
        for _ in 0..100 {
            scene.step(0.073);
            for dot in scene.electrons() {
                assert!(dot.radius >= ELECTRON_RADIUS - 1e-3);
                assert!(dot.radius <= ELECTRON_RADIUS * 1.2 + 1e-3);
            }
            let nucleus = scene.nucleus();
            assert!(nucleus.radius >= NUCLEUS_RADIUS - 1e-3);
            assert!(nucleus.radius <= NUCLEUS_RADIUS * 1.05 + 1e-3);
        }
    }

    #[test]
    fn flash_expands_then_despawns() {
        let mut scene = AtomScene::new();
        scene.flash_force(30.0);

        let flash = scene.flash().unwrap();
        assert_eq!(flash.full_width(), 60.0);
        assert_eq!(flash.width(), 0.0);

        scene.step(FLASH_LIFETIME * 0.5);
        let flash = scene.flash().unwrap();
        assert!((flash.width() - 60.0).abs() < 1e-3);
        assert!((flash.alpha() - 0.8).abs() < 1e-3);

        scene.step(FLASH_LIFETIME * 0.5);
        assert!(scene.flash().is_none());
    }

    #[test]
    fn flash_width_caps_at_100() {
        let mut scene = AtomScene::new();
        scene.flash_force(1000.0);
        assert_eq!(scene.flash().unwrap().full_width(), 100.0);
    }

    #[test]
    fn new_flash_replaces_old() {
        let mut scene = AtomScene::new();
        scene.flash_force(10.0);
        scene.step(0.4);
        scene.flash_force(40.0);
        assert_eq!(scene.flash().unwrap().full_width(), 80.0);
        assert_eq!(scene.flash().unwrap().width(), 0.0);
    }
}
