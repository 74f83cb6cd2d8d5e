use crate::topology::Topology;

pub const DEFAULT_ITERATIONS: usize = 2;

// Gauss-Seidel sweep over the constraints in insertion order: a correction
// reads positions already moved by earlier constraints in the same pass, so
// the stored order is observable behavior. More iterations buy a stiffer
// cloth. Coincident endpoints divide by zero here and the non-finite result
// propagates into the positions.
pub fn relax(topo: &mut Topology, iterations: usize) {
	for _ in 0..iterations.max(1) {
		for ci in 0..topo.constraint_len() {
			let con = *topo.constraint(ci);
			let diff = topo.particle(con.p1).get_pos()
				- topo.particle(con.p2).get_pos();
			let len = diff.magnitude();
			let factor = (con.l0 - len) / len / 2.;
			let offset = diff * factor;
			topo.particle_mut(con.p1).add_pos(offset);
			topo.particle_mut(con.p2).add_pos(-offset);
		}
	}
}
