// pr_model: cloth snapshot for rendering

use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct PrParticle {
	pub pos: [f32; 2],
}

#[derive(Clone, Debug)]
pub struct PrConstraint {
	pub id: usize,
	pub particles: Vec<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct PrModel {
	pub particles: HashMap<usize, PrParticle>,
	pub constraints: Vec<PrConstraint>,
}

impl PrModel {
	pub fn endpoints(&self, constraint: &PrConstraint) -> Option<Vec<[f32; 2]>> {
		constraint
			.particles
			.iter()
			.map(|id| self.particles.get(id).map(|p| p.pos))
			.collect()
	}
}
