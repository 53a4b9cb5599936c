use egui::Pos2;

use crate::input::PointerTarget;
use crate::path::PointRole;
use crate::state::{DragTarget, EditorState, ToolMode};

pub const DEFAULT_HIT_RADIUS: f32 = 8.0;

/// Find the glyph under `position`, or the empty canvas.
///
/// Handle glyphs exist only for the selected anchor in select mode. A handle
/// wins over the anchors unless the press also lands on its own anchor: then
/// the anchor wins, and `pull_handle` picks the handle instead (outgoing
/// first). That is the only way to grab a zero-length handle. Later anchors
/// win over earlier ones.
pub fn hit_test(state: &EditorState, position: Pos2, radius: f32, pull_handle: bool) -> PointerTarget {
    let path = &state.path;
    let interaction = &state.interaction;

    if interaction.tool_mode == ToolMode::Select {
        if let Some(anchor) = interaction.selected_anchor(path) {
            let on_anchor = position.distance(anchor.anchor) <= radius;
            for role in [PointRole::CpOut, PointRole::CpIn] {
                let on_handle = position.distance(anchor.point(role)) <= radius;
                if on_handle && (!on_anchor || pull_handle) {
                    return PointerTarget::Point(DragTarget::new(anchor.id(), role));
                }
            }
        }
    }

    path.anchors()
        .iter()
        .rev()
        .find(|anchor| position.distance(anchor.anchor) <= radius)
        .map_or(PointerTarget::Canvas, |anchor| {
            PointerTarget::Point(DragTarget::new(anchor.id(), PointRole::Anchor))
        })
}
