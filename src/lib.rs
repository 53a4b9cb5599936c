#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod file_handler;
pub mod geometry;
pub mod host;
pub mod input;
pub mod panels;
pub mod path;
pub mod renderer;
pub mod state;

pub use app::PathEditorApp;
pub use background::{BackgroundImage, DragConstraint, LoadedImage};
pub use command::{Command, PathHistory};
pub use config::EditorConfig;
pub use error::EditorError;
pub use event::EditorEvent;
pub use host::{HostBridge, HostError, ShapeDescriptor};
pub use input::{InputEvent, PointerTarget};
pub use path::{Anchor, AnchorId, Path, PathGeometry, PathRef, PointRole};
pub use renderer::Renderer;
pub use state::{EditorContext, EditorState, ToolMode};
