use egui::Vec2;

use crate::background::LoadedImage;
use crate::command::Command;
use crate::host::HostError;
use crate::input::InputEvent;

/// Everything the editor reacts to.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    Input(InputEvent),
    Command(Command),
    /// The image loader finished decoding a user-selected file
    ImageLoaded(LoadedImage),
    /// The image loader could not decode the file
    ImageLoadFailed(String),
    CanvasResized(Vec2),
    /// The host refused an insert request
    HostRejected(HostError),
}

impl From<InputEvent> for EditorEvent {
    fn from(event: InputEvent) -> Self {
        EditorEvent::Input(event)
    }
}

impl From<Command> for EditorEvent {
    fn from(command: Command) -> Self {
        EditorEvent::Command(command)
    }
}

impl EditorEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EditorEvent::Input(InputEvent::PointerDown { .. }) => "PointerDown",
            EditorEvent::Input(InputEvent::PointerMove { .. }) => "PointerMove",
            EditorEvent::Input(InputEvent::PointerUp { .. }) => "PointerUp",
            EditorEvent::Command(command) => command.name(),
            EditorEvent::ImageLoaded(_) => "ImageLoaded",
            EditorEvent::ImageLoadFailed(_) => "ImageLoadFailed",
            EditorEvent::CanvasResized(_) => "CanvasResized",
            EditorEvent::HostRejected(_) => "HostRejected",
        }
    }
}
