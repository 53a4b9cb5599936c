mod history;

pub use history::PathHistory;

/// Discrete actions a user can trigger from the toolbar or keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Switch to adding anchors on canvas clicks
    AddPointMode,
    /// Switch to selecting and dragging anchors
    SelectMode,
    /// Remove the selected anchor
    DeleteSelected,
    Undo,
    Redo,
    ToggleGrid,
    /// Open a closed path or close an open one
    ToggleClosed,
    /// Start fresh: empty path, empty history, no background
    Clear,
    /// Enter or leave background move mode
    ToggleBackgroundMove,
    SetBackgroundOpacity(f32),
    RemoveBackground,
    /// Hand the closed outline to the host application
    AddToHost,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddPointMode => "Add points",
            Command::SelectMode => "Select",
            Command::DeleteSelected => "Delete point",
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::ToggleGrid => "Grid",
            Command::ToggleClosed => "Close path",
            Command::Clear => "Clear all",
            Command::ToggleBackgroundMove => "Move image",
            Command::SetBackgroundOpacity(_) => "Image opacity",
            Command::RemoveBackground => "Remove image",
            Command::AddToHost => "Add to design",
        }
    }
}
