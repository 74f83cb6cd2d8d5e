use crate::particle::Particle;
use protocol::pr_model::PrConstraint;

// Endpoints are ids into the topology arena, never references. l0 is set at
// creation and stays put for the life of the constraint.
#[derive(Clone, Copy, Debug)]
pub struct DistanceConstraint {
	pub p1: usize,
	pub p2: usize,
	pub l0: f32,
}

impl DistanceConstraint {
	pub fn new(p1: &Particle, p2: &Particle) -> Self {
		let l0 = (p1.get_pos() - p2.get_pos()).magnitude();
		Self::new_with_l0(p1.get_id(), p2.get_id(), l0)
	}

	pub fn new_with_l0(p1: usize, p2: usize, l0: f32) -> Self {
		Self { p1, p2, l0 }
	}

	pub fn touches(&self, id: usize) -> bool {
		self.p1 == id || self.p2 == id
	}

	pub fn render(&self, id: usize) -> PrConstraint {
		PrConstraint {
			id,
			particles: vec![self.p1, self.p2],
		}
	}
}
