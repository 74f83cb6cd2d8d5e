use crate::V2;
use protocol::pr_model::PrParticle;

#[derive(Clone, Debug)]
pub struct Particle {
	id: usize,
	pos: V2,
	ppos: V2,
	fixed: bool,
}

impl Particle {
	pub fn new(id: usize, pos: V2, fixed: bool) -> Self {
		Self {
			id,
			pos,
			ppos: pos,
			fixed,
		}
	}

	pub fn get_id(&self) -> usize {
		self.id
	}

	pub fn get_pos(&self) -> V2 {
		self.pos
	}

	pub fn get_ppos(&self) -> V2 {
		self.ppos
	}

	pub fn is_fixed(&self) -> bool {
		self.fixed
	}

	pub fn add_pos(&mut self, dp: V2) {
		if self.fixed {
			return;
		}
		self.pos += dp;
	}

	pub fn reset_pos(&mut self, p: V2) {
		self.pos = p;
		self.ppos = p;
	}

	// Verlet step: implicit velocity is pos - ppos, force enters as
	// acceleration over one squared time step.
	pub fn update(&mut self, force: V2, t: f32) {
		if self.fixed {
			return;
		}
		let ppos = self.pos;
		self.pos = self.pos * 2. - self.ppos + force * t * t;
		self.ppos = ppos;
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
		}
	}
}
