//! Interaction state: which tool is active, what is selected and what is being
//! dragged.
//!
//! Selection and drag target only store an [`AnchorId`]. They are weak
//! references: always resolve them against the current path, and treat a
//! missing anchor as "nothing selected".

use crate::path::{Anchor, AnchorId, Path, PointRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Add,
    Select,
}

impl ToolMode {
    pub fn name(&self) -> &'static str {
        match self {
            ToolMode::Add => "Add",
            ToolMode::Select => "Select",
        }
    }
}

/// One draggable point: an anchor's own position or one of its handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragTarget {
    pub anchor_id: AnchorId,
    pub role: PointRole,
}

impl DragTarget {
    pub fn new(anchor_id: AnchorId, role: PointRole) -> Self {
        Self { anchor_id, role }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub tool_mode: ToolMode,
    selected: Option<AnchorId>,
    dragged: Option<DragTarget>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch tools. Selection and any dangling drag are dropped.
    pub fn set_tool_mode(&mut self, mode: ToolMode) {
        self.tool_mode = mode;
        self.selected = None;
        self.dragged = None;
    }

    pub fn selected_id(&self) -> Option<AnchorId> {
        self.selected
    }

    /// The selected anchor, if it still exists in `path`.
    pub fn selected_anchor<'a>(&self, path: &'a Path) -> Option<&'a Anchor> {
        self.selected.and_then(|id| path.find(id))
    }

    pub fn is_selected(&self, id: AnchorId) -> bool {
        self.selected == Some(id)
    }

    pub fn select(&mut self, id: AnchorId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn dragged(&self) -> Option<DragTarget> {
        self.dragged
    }

    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    pub fn begin_drag(&mut self, target: DragTarget) {
        self.dragged = Some(target);
    }

    pub fn end_drag(&mut self) -> Option<DragTarget> {
        self.dragged.take()
    }

    /// Drop selection and drag target if they no longer point into `path`.
    pub fn resolve_against(&mut self, path: &Path) {
        if self.selected.is_some_and(|id| !path.contains(id)) {
            self.selected = None;
        }
        if self.dragged.is_some_and(|target| !path.contains(target.anchor_id)) {
            self.dragged = None;
        }
    }

    /// Whether `target` may start a drag in the current mode.
    ///
    /// Only select mode drags anything. An anchor's own point is always
    /// draggable there; its handles only while that anchor is selected.
    pub fn can_drag(&self, target: DragTarget) -> bool {
        if self.tool_mode != ToolMode::Select {
            return false;
        }
        match target.role {
            PointRole::Anchor => true,
            PointRole::CpIn | PointRole::CpOut => self.is_selected(target.anchor_id),
        }
    }
}
