use std::sync::mpsc::{Receiver, Sender};
use std::time::{Duration, SystemTime};

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::controller_message::ControllerMessage;
use crate::error::ClothError;
use crate::integrator;
use crate::solver;
use crate::tear;
use crate::topology::Topology;
use crate::V2;
use protocol::pr_model::PrModel;
use protocol::user_event::{UpdateInfo, UserEvent};

// Owns the one topology of a simulation instance, the rng feeding the
// per-frame gust, and the tick clock. Ticks and cuts both mutate the
// topology and must come from one thread; run_thread is that thread, with
// mpsc queues on both sides.
pub struct ClothWorld {
	pub frame_time: f32,
	iterations: usize,
	rng: StdRng,
	last_tick: Option<f64>,

	// -1: always play
	// 0: pause
	// n: play n frames
	forward_frames: i32,

	topo: Topology,
}

impl Default for ClothWorld {
	fn default() -> Self {
		Self {
			frame_time: 1. / 60.,
			iterations: solver::DEFAULT_ITERATIONS,
			rng: StdRng::from_entropy(),
			last_tick: None,
			forward_frames: -1,
			topo: Topology::default(),
		}
	}
}

impl ClothWorld {
	pub fn with_seed(mut self, seed: u64) -> Self {
		self.rng = StdRng::seed_from_u64(seed);
		self
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_frame_time(mut self, frame_time: f32) -> Self {
		self.frame_time = frame_time;
		self
	}

	pub fn with_paused(mut self) -> Self {
		self.forward_frames = 1; // provide first frame
		self
	}

	pub fn init_grid(
		&mut self,
		columns: usize,
		rows: usize,
	) -> Result<(), ClothError> {
		self.topo = Topology::new_grid(columns, rows)?;
		self.last_tick = None;
		Ok(())
	}

	pub fn topology(&self) -> &Topology {
		&self.topo
	}

	pub fn topology_mut(&mut self) -> &mut Topology {
		&mut self.topo
	}

	// The host hands in a monotonically increasing timestamp; elapsed time
	// is computed here. The first call only arms the clock.
	pub fn tick(&mut self, now: f64) {
		let dt = match self.last_tick {
			Some(last) => (now - last) as f32,
			None => 0f32,
		};
		self.last_tick = Some(now);
		if dt == 0f32 {
			return;
		}
		integrator::step(&mut self.topo, dt, &mut self.rng);
		solver::relax(&mut self.topo, self.iterations);
	}

	pub fn cut(&mut self, from: V2, to: V2) {
		let batch = tear::find_intersecting(&self.topo, from, to);
		tear::remove_constraints(&mut self.topo, &batch);
	}

	pub fn pr_model(&self) -> PrModel {
		self.topo.pr_model()
	}

	pub fn run_thread(
		&mut self,
		tx: Sender<UserEvent>,
		rx: Receiver<ControllerMessage>,
	) {
		let epoch = SystemTime::now();
		let rtime = (self.frame_time * 1e6) as u64;
		loop {
			let frame_start = SystemTime::now();
			if self.forward_frames != 0 {
				if self.forward_frames > 0 {
					self.forward_frames -= 1;
				}
				let now = frame_start
					.duration_since(epoch)
					.unwrap()
					.as_secs_f64();
				self.tick(now);
				let spent = SystemTime::now()
					.duration_since(frame_start)
					.unwrap()
					.as_micros() as u64;
				let info = UpdateInfo {
					load: spent as f32 / rtime as f32,
					particle_len: self.topo.particle_len(),
					constraint_len: self.topo.constraint_len(),
				};
				if tx.send(UserEvent::Update(self.pr_model(), info)).is_err() {
					warn!("update receiver gone, stopping");
					return;
				}
			}
			while let Ok(msg) = rx.try_recv() {
				match msg {
					ControllerMessage::Cut(from, to) => self.cut(from, to),
					ControllerMessage::TogglePause => {
						if self.forward_frames == 0 {
							self.forward_frames = -1;
						} else {
							self.forward_frames = 0;
						}
					}
					ControllerMessage::FrameForward => {
						if self.forward_frames == 0 {
							self.forward_frames += 1;
						}
					}
				}
			}
			let spent = SystemTime::now()
				.duration_since(frame_start)
				.unwrap()
				.as_micros() as u64;
			if spent < rtime {
				std::thread::sleep(Duration::from_micros(rtime - spent));
			}
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_first_tick_arms_clock_only() {
		let mut world = ClothWorld::default().with_seed(1);
		world.init_grid(4, 4).unwrap();
		let before: Vec<_> =
			world.topology().particles().map(|p| p.get_pos()).collect();
		world.tick(100.0);
		let after: Vec<_> =
			world.topology().particles().map(|p| p.get_pos()).collect();
		assert_eq!(before, after);
		world.tick(100.016);
		let moved: Vec<_> =
			world.topology().particles().map(|p| p.get_pos()).collect();
		assert_ne!(before, moved);
	}

	#[test]
	fn test_same_seed_same_trajectory() {
		let run = || {
			let mut world = ClothWorld::default().with_seed(42);
			world.init_grid(6, 5).unwrap();
			for i in 0..30 {
				world.tick(i as f64 / 60.);
			}
			world
				.topology()
				.particles()
				.map(|p| p.get_pos())
				.collect::<Vec<_>>()
		};
		assert_eq!(run(), run());
	}

	#[test]
	fn test_cut_removes_constraints() {
		let mut world = ClothWorld::default().with_seed(9);
		world.init_grid(8, 8).unwrap();
		let before = world.topology().constraint_len();
		world.cut(V2::new(0.5, -0.1), V2::new(0.5, 1.1));
		assert!(world.topology().constraint_len() < before);
	}

	#[test]
	fn test_anchors_survive_ticks_and_cuts() {
		let mut world = ClothWorld::default().with_seed(5);
		world.init_grid(6, 6).unwrap();
		let anchors: Vec<_> = world
			.topology()
			.particles()
			.filter(|p| p.is_fixed())
			.map(|p| (p.get_id(), p.get_pos()))
			.collect();
		for i in 0..20 {
			world.tick(i as f64 / 60.);
			if i == 10 {
				world.cut(V2::new(-0.1, 0.4), V2::new(1.1, 0.6));
			}
		}
		for (id, pos) in anchors {
			if let Some(p) = world.topology().get_particle(id) {
				assert_eq!(p.get_pos(), pos);
			}
		}
	}
}
