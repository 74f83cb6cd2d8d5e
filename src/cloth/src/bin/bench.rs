use std::time::SystemTime;

use cloth::cworld::ClothWorld;

fn main() {
	let mut world = ClothWorld::default().with_seed(7);
	world.init_grid(64, 48).unwrap();
	let rframes = 1000;
	let start = SystemTime::now();
	for i in 0..=rframes {
		world.tick(i as f64 * world.frame_time as f64);
	}
	let time = rframes as f32 * world.frame_time;
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
