use fnv::FnvHashSet;
use log::info;

use crate::geom;
use crate::topology::Topology;
use crate::V2;

// Indices of every constraint whose segment crosses the cut segment, in
// constraint order.
pub fn find_intersecting(topo: &Topology, from: V2, to: V2) -> Vec<usize> {
	topo.constraints()
		.iter()
		.enumerate()
		.filter(|(_, con)| {
			let (pos1, pos2) = topo.endpoints(con);
			geom::segment_intersection(from, to, pos1, pos2)
		})
		.map(|(ci, _)| ci)
		.collect()
}

// Batched removal: every listed constraint goes first, then any particle
// left without a constraint. Orphan eligibility is checked against the
// fully updated constraint set, never a partial one, so a drag gesture
// should collect its crossed constraints into a single call.
pub fn remove_constraints(topo: &mut Topology, batch: &[usize]) {
	if batch.is_empty() {
		return;
	}
	let cut: FnvHashSet<usize> = batch.iter().copied().collect();
	topo.retain_constraints(|ci, _| !cut.contains(&ci));
	let mut tethered = FnvHashSet::default();
	for con in topo.constraints() {
		tethered.insert(con.p1);
		tethered.insert(con.p2);
	}
	let orphans: Vec<usize> = topo
		.particles()
		.map(|p| p.get_id())
		.filter(|id| !tethered.contains(id))
		.collect();
	for id in orphans.iter() {
		topo.retire(*id);
	}
	info!("tear: -{} constraints, -{} orphans", cut.len(), orphans.len());
}

// Direct removal of one particle, cascading to every constraint on it.
pub fn remove_point(topo: &mut Topology, id: usize) {
	topo.retire(id);
	topo.retain_constraints(|_, con| !con.touches(id));
}
