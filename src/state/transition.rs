//! The interaction state machine.
//!
//! [`transition`] maps the current [`EditorState`] and one [`EditorEvent`] to the
//! next state plus the side effects the owner must carry out. It never touches
//! history itself.
//!
//! ```text
//!   add mode ── canvas down ──► add anchor + commit
//!   select mode ── canvas down ──► deselect
//!   select mode ── glyph down ──► dragging ── move ──► update point
//!                                    └──── up ──► commit
//!   move mode: every path action is locked, pointer drags the image
//! ```

use std::sync::Arc;

use egui::Pos2;

use super::{DragTarget, EditorState, InteractionState, ToolMode};
use crate::background::BackgroundImage;
use crate::command::Command;
use crate::config::EditorConfig;
use crate::error::EditorError;
use crate::event::EditorEvent;
use crate::geometry::clamp_to_canvas;
use crate::host::ShapeDescriptor;
use crate::input::{InputEvent, PointerTarget};
use crate::path::{Path, PointRole};

/// Work a transition hands back to the owner of the history and the host link.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Record the current path as a new history entry
    CommitHistory,
    /// Drop all history back to the single empty snapshot
    ResetHistory,
    Undo,
    Redo,
    AddToHost(ShapeDescriptor),
}

#[derive(Debug, Clone)]
pub struct Transition {
    pub state: EditorState,
    pub effects: Vec<Effect>,
}

pub fn transition(state: EditorState, event: &EditorEvent, config: &EditorConfig) -> Transition {
    let mut machine = Machine {
        state,
        effects: Vec::new(),
    };

    match event {
        EditorEvent::Input(input) => machine.on_input(input),
        EditorEvent::Command(command) => machine.on_command(*command, config),
        EditorEvent::ImageLoaded(image) => {
            machine.state.background = Some(BackgroundImage::new(
                image.clone(),
                machine.state.canvas_size,
                config.default_background_opacity,
            ));
            machine.accept();
        }
        EditorEvent::ImageLoadFailed(reason) => {
            machine.state.background = None;
            machine.reject(EditorError::ImageDecodeFailure(reason.clone()));
        }
        EditorEvent::CanvasResized(size) => {
            machine.state.canvas_size = *size;
            if let Some(background) = machine.state.background.as_mut() {
                background.refit(*size);
            }
        }
        EditorEvent::HostRejected(err) => {
            machine.reject(EditorError::HostRejection(err.message().to_owned()));
        }
    }

    Transition {
        state: machine.state,
        effects: machine.effects,
    }
}

struct Machine {
    state: EditorState,
    effects: Vec<Effect>,
}

impl Machine {
    fn accept(&mut self) {
        self.state.message = None;
    }

    fn reject(&mut self, err: EditorError) {
        log::warn!("rejected: {err}");
        self.state.message = Some(err.to_string());
    }

    fn set_path(&mut self, path: Path) {
        self.state.path = Arc::new(path);
    }

    fn commit(&mut self) {
        self.effects.push(Effect::CommitHistory);
    }

    fn move_mode_locked(&mut self) -> bool {
        if self.state.is_move_mode_active() {
            self.reject(EditorError::invalid("Finish moving the image first"));
            true
        } else {
            false
        }
    }

    /// A drag whose pointer-up never arrived. Its edits are already in the
    /// path, so record them before moving on.
    fn finish_dangling_drag(&mut self) {
        if let Some(target) = self.state.interaction.end_drag() {
            log::warn!("dropping unfinished drag of {:?} on {}", target.role, target.anchor_id);
            self.commit();
        }
    }

    fn on_input(&mut self, input: &InputEvent) {
        if self.state.is_move_mode_active() {
            self.on_background_input(input);
            return;
        }

        let canvas_size = self.state.canvas_size;
        match *input {
            InputEvent::PointerDown { position, target } => {
                self.finish_dangling_drag();
                self.on_pointer_down(clamp_to_canvas(position, canvas_size), target);
            }
            InputEvent::PointerMove { position } => {
                let Some(target) = self.state.interaction.dragged() else {
                    return;
                };
                if !self.state.path.contains(target.anchor_id) {
                    self.state.interaction.end_drag();
                    return;
                }
                let position = clamp_to_canvas(position, canvas_size);
                let next = self
                    .state
                    .path
                    .update_anchor_point(target.anchor_id, target.role, position);
                self.set_path(next);
            }
            InputEvent::PointerUp { .. } => {
                if let Some(target) = self.state.interaction.end_drag() {
                    log::debug!("drag of {:?} on {} finished", target.role, target.anchor_id);
                    self.commit();
                }
            }
        }
    }

    fn on_pointer_down(&mut self, position: Pos2, target: PointerTarget) {
        let mode = self.state.interaction.tool_mode;
        match (mode, target) {
            (ToolMode::Add, PointerTarget::Canvas) => {
                if self.state.path.is_closed() {
                    log::debug!("pointer down ignored: path is closed");
                    return;
                }
                let next = self.state.path.add_anchor_at_end(position);
                self.set_path(next);
                self.state.interaction.clear_selection();
                self.commit();
                self.accept();
            }
            (ToolMode::Add, PointerTarget::Point(_)) => {
                log::debug!("pointer down on a glyph ignored in add mode");
            }
            (ToolMode::Select, PointerTarget::Canvas) => {
                self.state.interaction.clear_selection();
            }
            (ToolMode::Select, PointerTarget::Point(target)) => self.begin_point_drag(target),
        }
    }

    fn begin_point_drag(&mut self, target: DragTarget) {
        let interaction = &mut self.state.interaction;
        if !self.state.path.contains(target.anchor_id) {
            interaction.clear_selection();
            return;
        }
        if !interaction.can_drag(target) {
            log::debug!("{:?} of {} is not draggable right now", target.role, target.anchor_id);
            return;
        }
        if target.role == PointRole::Anchor {
            interaction.select(target.anchor_id);
        }
        interaction.begin_drag(target);
        self.accept();
    }

    fn on_background_input(&mut self, input: &InputEvent) {
        let canvas_size = self.state.canvas_size;
        let Some(background) = self.state.background.as_mut() else {
            return;
        };
        match *input {
            InputEvent::PointerDown { position, .. } => background.begin_drag(position),
            InputEvent::PointerMove { position } => background.drag_to(position, canvas_size),
            InputEvent::PointerUp { .. } => background.end_drag(),
        }
    }

    fn on_command(&mut self, command: Command, config: &EditorConfig) {
        log::debug!("command: {}", command.name());
        match command {
            Command::AddPointMode | Command::SelectMode => {
                if self.move_mode_locked() {
                    return;
                }
                self.finish_dangling_drag();
                let mode = if command == Command::AddPointMode {
                    ToolMode::Add
                } else {
                    ToolMode::Select
                };
                self.state.interaction.set_tool_mode(mode);
                self.accept();
            }
            Command::DeleteSelected => {
                if self.move_mode_locked() {
                    return;
                }
                if self.state.interaction.tool_mode != ToolMode::Select {
                    self.reject(EditorError::invalid("Switch to select mode to delete points"));
                    return;
                }
                let Some(id) = self
                    .state
                    .interaction
                    .selected_anchor(&self.state.path)
                    .map(|anchor| anchor.id())
                else {
                    self.state.interaction.clear_selection();
                    self.reject(EditorError::invalid("Select a point to delete"));
                    return;
                };
                self.finish_dangling_drag();
                let next = self.state.path.delete_anchor(id);
                self.set_path(next);
                self.state.interaction.clear_selection();
                self.commit();
                self.accept();
            }
            Command::Undo | Command::Redo => {
                if self.move_mode_locked() {
                    return;
                }
                self.finish_dangling_drag();
                self.effects.push(if command == Command::Undo {
                    Effect::Undo
                } else {
                    Effect::Redo
                });
                self.accept();
            }
            Command::ToggleGrid => {
                self.state.show_grid = !self.state.show_grid;
            }
            Command::ToggleClosed => {
                if self.move_mode_locked() {
                    return;
                }
                if !self.state.path.can_close() {
                    self.reject(EditorError::invalid("A path needs at least two points to close"));
                    return;
                }
                self.finish_dangling_drag();
                let next = self.state.path.set_closed(!self.state.path.is_closed());
                self.set_path(next);
                self.commit();
                self.accept();
            }
            Command::Clear => {
                self.set_path(Path::new());
                self.state.interaction = InteractionState::new();
                self.state.background = None;
                self.effects.push(Effect::ResetHistory);
                self.accept();
            }
            Command::ToggleBackgroundMove => {
                let Some(background) = self.state.background.as_mut() else {
                    self.reject(EditorError::invalid("Load an image first"));
                    return;
                };
                if !background.toggle_move_mode() {
                    self.reject(EditorError::invalid("The image already fits the canvas"));
                    return;
                }
                let active = background.is_move_mode_active();
                log::info!("background move mode {}", if active { "on" } else { "off" });
                self.finish_dangling_drag();
                self.accept();
            }
            Command::SetBackgroundOpacity(opacity) => match self.state.background.as_mut() {
                Some(background) => background.set_opacity(opacity),
                None => self.reject(EditorError::invalid("Load an image first")),
            },
            Command::RemoveBackground => {
                self.state.background = None;
                self.accept();
            }
            Command::AddToHost => match ShapeDescriptor::from_path(&self.state.path, config) {
                Ok(shape) => {
                    self.effects.push(Effect::AddToHost(shape));
                    self.accept();
                }
                Err(err) => self.reject(err),
            },
        }
    }
}
