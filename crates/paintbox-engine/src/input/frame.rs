use super::types::InputEvent;

/// Per-frame input deltas.
///
/// `InputState` holds what is currently down and where the pointer is.
/// `InputFrame` holds this frame's events, in arrival order.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }
}
