/// Input events the explorer understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Double-click / double-tap at client-space pixel coordinates.
    DoubleClick { x: f32, y: f32 },
    /// The viewport changed size, in pixels.
    Resize { width: f32, height: f32 },
    /// Throw away the current galaxy and generate a new one.
    Regenerate,
    /// Switch to the view of one star system.
    OpenSystem { index: usize },
    /// Switch back to the galaxy view.
    OpenGalaxy,
}

/// A queue of input events.
/// The UI shell pushes events; the explorer drains them once per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
