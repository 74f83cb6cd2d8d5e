use log::info;

use crate::error::ClothError;
use crate::topology::Topology;
use crate::V2;

impl Topology {
	// Grid of columns x rows particles filling the unit square, top row
	// fixed. Constraint insertion order is horizontal, then one shear
	// diagonal per cell, then vertical; the relaxation sweep depends on
	// this order, so it is part of the contract.
	pub fn new_grid(columns: usize, rows: usize) -> Result<Self, ClothError> {
		if columns < 2 || rows < 2 {
			return Err(ClothError::InvalidDimensions { columns, rows });
		}
		let mut topo = Self::default();
		let mut ps = vec![];
		for r in 0..rows {
			let mut pline = vec![];
			for c in 0..columns {
				let pos = V2::new(
					c as f32 / (columns - 1) as f32,
					r as f32 / (rows - 1) as f32,
				);
				pline.push(topo.add_particle(pos, r == 0));
			}
			ps.push(pline);
		}
		for r in 0..rows {
			for c in 1..columns {
				topo.link(ps[r][c - 1], ps[r][c]);
			}
		}
		// diagonal direction alternates by cell parity to avoid a
		// directional bias in shear resistance
		for r in 0..rows - 1 {
			for c in 0..columns - 1 {
				if (r + c) % 2 == 1 {
					topo.link(ps[r][c], ps[r + 1][c + 1]);
				} else {
					topo.link(ps[r][c + 1], ps[r + 1][c]);
				}
			}
		}
		for c in 0..columns {
			for r in 1..rows {
				topo.link(ps[r - 1][c], ps[r][c]);
			}
		}
		info!(
			"grid {}x{}: {} particles, {} constraints",
			columns,
			rows,
			topo.particle_len(),
			topo.constraint_len(),
		);
		Ok(topo)
	}
}
