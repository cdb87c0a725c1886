use kiss3d::event::{Action, Key, WindowEvent};

/// Input the frame loop reacts to. Everything else coming from the window is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    Quit,
    ZoomIn,
    ZoomOut,
}

impl Message {
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match *event {
            WindowEvent::Close => Some(Message::Quit),
            WindowEvent::Key(key, Action::Press, _) => Self::from_key(key),
            _ => None,
        }
    }

    fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Escape => Some(Message::Quit),
            Key::E => Some(Message::ZoomIn),
            Key::Q => Some(Message::ZoomOut),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Message::Quit => "quit",
            Message::ZoomIn => "zoom-in",
            Message::ZoomOut => "zoom-out",
        }
    }
}
