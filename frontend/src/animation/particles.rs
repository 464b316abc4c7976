#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

/// Drifting dots behind hero sections. Positions wrap at the edges.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleField {
    pub width: f64,
    pub height: f64,
    pub particles: Vec<Particle>,
}

const MAX_SPEED: f64 = 18.0; // px per second

impl ParticleField {
    /// `rng` must yield values in [0, 1).
    pub fn seeded(count: usize, width: f64, height: f64, mut rng: impl FnMut() -> f64) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                x: rng() * width,
                y: rng() * height,
                vx: (rng() - 0.5) * 2.0 * MAX_SPEED,
                vy: (rng() - 0.5) * 2.0 * MAX_SPEED,
                radius: 0.8 + rng() * 2.2,
                alpha: 0.15 + rng() * 0.45,
            })
            .collect();
        Self {
            width,
            height,
            particles,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        for p in &mut self.particles {
            p.x = wrap(p.x, width);
            p.y = wrap(p.y, height);
        }
    }

    /// Advance by `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, 0.1);
        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx * dt, self.width);
            p.y = wrap(p.y + p.vy * dt, self.height);
        }
    }
}

fn wrap(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        return 0.0;
    }
    value.rem_euclid(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> impl FnMut() -> f64 {
        let mut n = 0u32;
        move || {
            n = n.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            (n % 1000) as f64 / 1000.0
        }
    }

    #[test]
    fn particles_start_inside_bounds() {
        let field = ParticleField::seeded(50, 300.0, 200.0, counter());
        assert_eq!(field.particles.len(), 50);
        for p in &field.particles {
            assert!(p.x >= 0.0 && p.x < 300.0);
            assert!(p.y >= 0.0 && p.y < 200.0);
        }
    }

    #[test]
    fn step_wraps_at_edges() {
        let mut field = ParticleField {
            width: 100.0,
            height: 100.0,
            particles: vec![Particle { x: 99.0, y: 1.0, vx: 18.0, vy: -18.0, radius: 1.0, alpha: 0.5 }],
        };
        field.step(0.1);
        let p = field.particles[0];
        assert!((p.x - 0.8).abs() < 1e-9);
        assert!((p.y - 99.2).abs() < 1e-9);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut field = ParticleField {
            width: 1000.0,
            height: 1000.0,
            particles: vec![Particle { x: 10.0, y: 10.0, vx: 10.0, vy: 0.0, radius: 1.0, alpha: 0.5 }],
        };
        field.step(5.0);
        assert!((field.particles[0].x - 11.0).abs() < 1e-9);
    }

    #[test]
    fn zero_sized_canvas_collapses_to_origin() {
        let mut field = ParticleField::seeded(3, 100.0, 100.0, counter());
        field.resize(0.0, 0.0);
        field.step(0.016);
        assert!(field.particles.iter().all(|p| p.x == 0.0 && p.y == 0.0));
    }
}
