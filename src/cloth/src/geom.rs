use crate::V2;

pub fn det2(a: f32, b: f32, c: f32, d: f32) -> f32 {
	a * d - b * c
}

// Determinant form of line-line intersection, then inclusive bounding box
// containment on both segments. Parallel or collinear segments leave a zero
// denominator; the resulting non-finite coordinates fail the containment
// test, so such pairs count as non-intersecting.
pub fn segment_intersection(a1: V2, a2: V2, b1: V2, b2: V2) -> bool {
	let da = det2(a1[0], a1[1], a2[0], a2[1]);
	let db = det2(b1[0], b1[1], b2[0], b2[1]);
	let denom = det2(a1[0] - a2[0], a1[1] - a2[1], b1[0] - b2[0], b1[1] - b2[1]);
	let px = det2(da, a1[0] - a2[0], db, b1[0] - b2[0]) / denom;
	let py = det2(da, a1[1] - a2[1], db, b1[1] - b2[1]) / denom;
	in_box(px, py, a1, a2) && in_box(px, py, b1, b2)
}

fn in_box(px: f32, py: f32, p1: V2, p2: V2) -> bool {
	px >= p1[0].min(p2[0])
		&& px <= p1[0].max(p2[0])
		&& py >= p1[1].min(p2[1])
		&& py <= p1[1].max(p2[1])
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_det2() {
		assert!((det2(1., 2., 3., 4.) - (-2.)).abs() < 1e-6);
		assert!(det2(1., 0., 0., 1.) > 0.);
	}

	#[test]
	fn test_crossing_segments() {
		let a1 = V2::new(0., 0.);
		let a2 = V2::new(1., 1.);
		let b1 = V2::new(0., 1.);
		let b2 = V2::new(1., 0.);
		assert!(segment_intersection(a1, a2, b1, b2));
	}

	#[test]
	fn test_symmetry_in_cut_endpoints() {
		let a1 = V2::new(-1., 0.5);
		let a2 = V2::new(2., 0.5);
		let b1 = V2::new(0.5, 0.);
		let b2 = V2::new(0.5, 1.);
		assert_eq!(
			segment_intersection(a1, a2, b1, b2),
			segment_intersection(a2, a1, b1, b2),
		);
		assert!(segment_intersection(a2, a1, b1, b2));
	}

	#[test]
	fn test_lines_cross_outside_segments() {
		let a1 = V2::new(0., 0.);
		let a2 = V2::new(1., 1.);
		let b1 = V2::new(3., 4.);
		let b2 = V2::new(4., 3.);
		assert!(!segment_intersection(a1, a2, b1, b2));
	}

	#[test]
	fn test_parallel_segments() {
		let a1 = V2::new(0., 0.);
		let a2 = V2::new(1., 0.);
		let b1 = V2::new(0., 1.);
		let b2 = V2::new(1., 1.);
		assert!(!segment_intersection(a1, a2, b1, b2));
	}

	#[test]
	fn test_collinear_overlapping_segments() {
		// zero denominator as well, so no intersection is reported
		let a1 = V2::new(0., 0.);
		let a2 = V2::new(2., 0.);
		let b1 = V2::new(1., 0.);
		let b2 = V2::new(3., 0.);
		assert!(!segment_intersection(a1, a2, b1, b2));
	}

	#[test]
	fn test_shared_endpoint() {
		let a1 = V2::new(0., 0.);
		let a2 = V2::new(1., 0.);
		let b1 = V2::new(1., 0.);
		let b2 = V2::new(1., 1.);
		assert!(segment_intersection(a1, a2, b1, b2));
	}
}
