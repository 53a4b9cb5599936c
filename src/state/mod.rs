use std::sync::Arc;

use egui::Vec2;

use crate::background::BackgroundImage;
use crate::config::EditorConfig;
use crate::path::{Path, PathGeometry, PathRef, build};

mod context;
mod editor_state;
mod transition;

pub use context::EditorContext;
pub use editor_state::{DragTarget, InteractionState, ToolMode};
pub use transition::{Effect, Transition, transition};

/// Everything the editor shows, as one explicit record.
///
/// History is not part of it: [`EditorContext`] owns the history and applies
/// the [`Effect`]s a transition asks for.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub path: PathRef,
    pub interaction: InteractionState,
    pub background: Option<BackgroundImage>,
    pub canvas_size: Vec2,
    pub show_grid: bool,
    /// Last user-visible error, cleared by the next accepted action.
    pub message: Option<String>,
}

impl EditorState {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            path: Arc::new(Path::new()),
            interaction: InteractionState::new(),
            background: None,
            canvas_size: config.canvas_size,
            show_grid: false,
            message: None,
        }
    }

    /// Path data and bounding box for the current path.
    pub fn geometry(&self) -> PathGeometry {
        build(&self.path)
    }

    /// While the background is being moved, every path action is locked out.
    pub fn is_move_mode_active(&self) -> bool {
        self.background
            .as_ref()
            .is_some_and(BackgroundImage::is_move_mode_active)
    }

    pub fn can_change_mode(&self) -> bool {
        !self.is_move_mode_active()
    }

    pub fn can_delete(&self) -> bool {
        !self.is_move_mode_active()
            && self.interaction.tool_mode == ToolMode::Select
            && self.interaction.selected_anchor(&self.path).is_some()
    }

    pub fn can_toggle_closed(&self) -> bool {
        !self.is_move_mode_active() && self.path.can_close()
    }

    pub fn can_toggle_background_move(&self) -> bool {
        self.background.as_ref().is_some_and(BackgroundImage::can_move)
    }

    pub fn can_add_to_host(&self) -> bool {
        self.path.is_closed() && !self.path.is_empty()
    }
}
