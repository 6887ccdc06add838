use rand::Rng;

use crate::cards::Rarity;

/// Radius lost by every particle each frame.
pub const SHRINK_PER_FRAME: f32 = 0.3;

/// Largest radius a particle can spawn with.
pub const MAX_RADIUS: u32 = 12;

/// Frames after which every particle from a burst is guaranteed gone. One
/// more than MAX_RADIUS / SHRINK_PER_FRAME to absorb float drift.
#[cfg(test)]
pub const MAX_LIFETIME_FRAMES: usize = 41;

const MIN_RADIUS: u32 = 5;
const MAX_SPEED: i32 = 5;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    dx: f32,
    dy: f32,
    pub radius: f32,
    pub colour: (u8, u8, u8),
}

impl Particle {
    fn step(&mut self) {
        self.x += self.dx;
        self.y += self.dy;
        self.radius -= SHRINK_PER_FRAME;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Particles {
    live: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn a burst at `origin` sized and coloured for `rarity`.
    pub fn burst<R: Rng + ?Sized>(&mut self, origin: (f32, f32), rarity: Rarity, rng: &mut R) {
        let colour = rarity.colour();
        self.live.extend((0..rarity.burst_size()).map(|_| Particle {
            x: origin.0,
            y: origin.1,
            dx: rng.gen_range(-MAX_SPEED..=MAX_SPEED) as f32,
            dy: rng.gen_range(-MAX_SPEED..=MAX_SPEED) as f32,
            radius: rng.gen_range(MIN_RADIUS..=MAX_RADIUS) as f32,
            colour,
        }));
    }

    /// Advance one frame, dropping particles that have shrunk away.
    pub fn step(&mut self) {
        for particle in &mut self.live {
            particle.step();
        }
        self.live.retain(|p| p.radius > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.live.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

#[cfg(test)]
mod test {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::cards::Rarity;

    use super::*;

    #[test]
    fn test_burst() {
        let mut particles = Particles::new();
        let rng = &mut StdRng::seed_from_u64(11);
        particles.burst((450.0, 300.0), Rarity::Epic, rng);

        assert_eq!(particles.len(), Rarity::Epic.burst_size());
        for p in particles.iter() {
            assert_eq!((p.x, p.y), (450.0, 300.0));
            assert!(p.dx.abs() <= MAX_SPEED as f32 && p.dy.abs() <= MAX_SPEED as f32);
            assert!(p.radius >= MIN_RADIUS as f32 && p.radius <= MAX_RADIUS as f32);
            assert_eq!(p.colour, Rarity::Epic.colour());
        }
    }

    #[test]
    fn test_step_moves_and_shrinks() {
        let mut particles = Particles {
            live: vec![Particle {
                x: 10.0,
                y: 10.0,
                dx: 3.0,
                dy: -2.0,
                radius: 5.0,
                colour: (0, 0, 0),
            }],
        };
        particles.step();
        particles.step();

        let p = particles.iter().next().unwrap();
        assert_eq!((p.x, p.y), (16.0, 6.0));
        assert!((p.radius - 4.4).abs() < 1e-4);
    }

    #[test]
    fn test_decays_to_nothing() {
        let mut particles = Particles::new();
        let rng = &mut StdRng::seed_from_u64(5);
        particles.burst((0.0, 0.0), Rarity::Legendary, rng);
        particles.burst((0.0, 0.0), Rarity::Common, rng);

        // Smallest particles need more than a dozen frames to vanish.
        for _ in 0..10 {
            particles.step();
        }
        assert_eq!(particles.len(), 110);

        for _ in 10..MAX_LIFETIME_FRAMES {
            particles.step();
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_removal_keeps_order() {
        let particle = |radius: f32, x: f32| Particle {
            x,
            y: 0.0,
            dx: 0.0,
            dy: 0.0,
            radius,
            colour: (1, 2, 3),
        };
        let mut particles = Particles {
            live: vec![
                particle(0.2, 1.0),
                particle(1.0, 2.0),
                particle(0.3, 3.0),
                particle(2.0, 4.0),
            ],
        };
        particles.step();

        let xs: Vec<f32> = particles.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 4.0]);
    }
}
