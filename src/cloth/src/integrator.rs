use rand::Rng;

use crate::topology::Topology;
use crate::V2;

// Verlet blows up on large steps, so a stalled frame is capped here.
pub const MAX_DT: f32 = 1. / 30.;
pub const GRAVITY: f32 = 0.8;
pub const GUST: f32 = 0.1;

// The force is sampled once per call and shared by every free particle:
// the horizontal gust is coherent across the whole cloth within a frame,
// not per-particle noise. Callers pass their own (seedable) rng.
pub fn step(topo: &mut Topology, dt: f32, rng: &mut impl Rng) {
	let dt = dt.min(MAX_DT);
	let force = V2::new(rng.gen_range(0f32..GUST), GRAVITY);
	for p in topo.particles_mut() {
		p.update(force, dt);
	}
}
