use crate::V2;

// Sent by the input side. Cut endpoints are already in simulation
// coordinates; mapping from window coordinates is the sender's job
// (protocol::view::View::s2w).
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	Cut(V2, V2),
}
