use crate::constraint::DistanceConstraint;
use crate::particle::Particle;
use crate::V2;
use protocol::pr_model::PrModel;

// One arena of particles plus one ordered list of constraints; a simulation
// instance owns exactly one of these. Particle ids are slot indices and stay
// stable for the life of the topology, removal retires the slot. Constraint
// order is insertion order and must survive removal (relaxation sweeps read
// it).
#[derive(Clone, Debug, Default)]
pub struct Topology {
	slots: Vec<Option<Particle>>,
	constraints: Vec<DistanceConstraint>,
}

impl Topology {
	pub fn add_particle(&mut self, pos: V2, fixed: bool) -> usize {
		let id = self.slots.len();
		self.slots.push(Some(Particle::new(id, pos, fixed)));
		id
	}

	pub fn link(&mut self, p1: usize, p2: usize) {
		let con = DistanceConstraint::new(self.particle(p1), self.particle(p2));
		self.constraints.push(con);
	}

	pub fn particle(&self, id: usize) -> &Particle {
		self.slots[id].as_ref().expect("retired particle id")
	}

	pub fn particle_mut(&mut self, id: usize) -> &mut Particle {
		self.slots[id].as_mut().expect("retired particle id")
	}

	pub fn get_particle(&self, id: usize) -> Option<&Particle> {
		self.slots.get(id).and_then(|slot| slot.as_ref())
	}

	pub fn particles(&self) -> impl Iterator<Item = &Particle> {
		self.slots.iter().flatten()
	}

	pub fn particles_mut(&mut self) -> impl Iterator<Item = &mut Particle> {
		self.slots.iter_mut().flatten()
	}

	pub fn constraints(&self) -> &[DistanceConstraint] {
		&self.constraints
	}

	pub fn constraint(&self, ci: usize) -> &DistanceConstraint {
		&self.constraints[ci]
	}

	pub fn endpoints(&self, con: &DistanceConstraint) -> (V2, V2) {
		(
			self.particle(con.p1).get_pos(),
			self.particle(con.p2).get_pos(),
		)
	}

	pub fn particle_len(&self) -> usize {
		self.slots.iter().flatten().count()
	}

	pub fn constraint_len(&self) -> usize {
		self.constraints.len()
	}

	pub fn retire(&mut self, id: usize) {
		if let Some(slot) = self.slots.get_mut(id) {
			*slot = None;
		}
	}

	pub fn retain_constraints<F>(&mut self, mut keep: F)
	where
		F: FnMut(usize, &DistanceConstraint) -> bool,
	{
		let mut ci = 0;
		self.constraints.retain(|con| {
			let result = keep(ci, con);
			ci += 1;
			result
		});
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.particles()
			.map(|p| (p.get_id(), p.render()))
			.collect();
		let constraints = self
			.constraints
			.iter()
			.enumerate()
			.map(|(ci, con)| con.render(ci))
			.collect();
		PrModel {
			particles,
			constraints,
		}
	}
}
