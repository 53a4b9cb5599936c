use std::sync::Arc;

use super::{EditorState, Effect, Transition, transition};
use crate::command::PathHistory;
use crate::config::EditorConfig;
use crate::event::EditorEvent;
use crate::host::{HostBridge, ShapeDescriptor};
use crate::path::{PathGeometry, PathRef};

/// Owns the editor state and its history and runs events through the state
/// machine.
///
/// Events are handled one at a time, to completion. The context applies the
/// history effects itself and returns host insert requests to the caller.
#[derive(Debug)]
pub struct EditorContext {
    state: EditorState,
    history: PathHistory,
    config: EditorConfig,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: EditorState::new(&config),
            history: PathHistory::new(),
            config,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn history(&self) -> &PathHistory {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn path(&self) -> &PathRef {
        &self.state.path
    }

    pub fn geometry(&self) -> PathGeometry {
        self.state.geometry()
    }

    pub fn can_undo(&self) -> bool {
        !self.state.is_move_mode_active() && self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        !self.state.is_move_mode_active() && self.history.can_redo()
    }

    /// Run one event. Returns the shapes that should be sent to the host.
    pub fn dispatch(&mut self, event: impl Into<EditorEvent>) -> Vec<ShapeDescriptor> {
        let event = event.into();
        log::debug!("event: {}", event.name());

        let Transition { state, effects } = transition(self.state.clone(), &event, &self.config);
        self.state = state;

        let mut requests = Vec::new();
        for effect in effects {
            match effect {
                Effect::CommitHistory => {
                    self.history.commit(Arc::clone(&self.state.path));
                }
                Effect::ResetHistory => {
                    self.history.reset();
                    self.state.path = Arc::clone(self.history.current());
                    log::info!("editor cleared");
                }
                Effect::Undo => {
                    if let Some(path) = self.history.undo() {
                        self.restore(path);
                    }
                }
                Effect::Redo => {
                    if let Some(path) = self.history.redo() {
                        self.restore(path);
                    }
                }
                Effect::AddToHost(shape) => requests.push(shape),
            }
        }
        self.state.interaction.resolve_against(&self.state.path);
        requests
    }

    /// Run one event and deliver any resulting insert requests to `host`.
    ///
    /// A rejected request is fed back as [`EditorEvent::HostRejected`]; path
    /// and history are left alone so the user can retry.
    pub fn dispatch_with_host(&mut self, event: impl Into<EditorEvent>, host: &mut dyn HostBridge) {
        for shape in self.dispatch(event) {
            match host.add_element(&shape) {
                Ok(()) => log::info!("shape added to host ({} x {})", shape.width, shape.height),
                Err(err) => {
                    self.dispatch(EditorEvent::HostRejected(err));
                }
            }
        }
    }

    // History does not version the selection, so it may dangle after a jump.
    fn restore(&mut self, path: PathRef) {
        self.state.path = path;
        self.state.interaction.clear_selection();
        self.state.interaction.end_drag();
    }
}
