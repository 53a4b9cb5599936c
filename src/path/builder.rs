use egui::{Pos2, Vec2};

use super::Path;
use crate::geometry::{bounding_rect, relative_to};

/// Smallest width/height reported for a non-empty path.
pub const MIN_EXTENT: f32 = 1.0;

/// Drawable form of a [`Path`], normalized so its bounding box starts at (0,0).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathGeometry {
    /// SVG path data (`M`, `C` and, as a fallback only, `Z`). Empty for an empty path.
    pub path_data: String,
    /// Size of the box around every anchor and handle, each side at least [`MIN_EXTENT`].
    pub bounding_box: Option<Vec2>,
    /// Top-left corner of that box in canvas coordinates.
    pub origin_offset: Pos2,
}

impl PathGeometry {
    pub fn is_empty(&self) -> bool {
        self.path_data.is_empty()
    }
}

/// Rebuild the path data and bounding box from scratch.
///
/// Handles take part in the bounding box so a curve bulging past its anchors is
/// never clipped. A closed path is closed with a real curve through
/// `last.cp_out` / `first.cp_in`.
pub fn build(path: &Path) -> PathGeometry {
    let anchors = path.anchors();
    let (Some(first), Some(bounds)) = (anchors.first(), bounding_rect(path.all_points())) else {
        return PathGeometry::default();
    };

    let origin = bounds.min;
    let local = |point: Pos2| relative_to(point, origin);

    let mut path_data = format!("M {}", coords(local(first.anchor)));
    for pair in anchors.windows(2) {
        path_data.push_str(&curve_to(
            local(pair[0].cp_out),
            local(pair[1].cp_in),
            local(pair[1].anchor),
        ));
    }

    if path.is_closed() {
        match anchors.last().filter(|_| anchors.len() >= 2) {
            Some(last) => path_data.push_str(&curve_to(
                local(last.cp_out),
                local(first.cp_in),
                local(first.anchor),
            )),
            None => {
                log::warn!(
                    "closed path with {} anchor(s): closing with a straight segment",
                    anchors.len()
                );
                path_data.push_str(" Z");
            }
        }
    }

    PathGeometry {
        path_data,
        bounding_box: Some(Vec2::new(
            bounds.width().max(MIN_EXTENT),
            bounds.height().max(MIN_EXTENT),
        )),
        origin_offset: origin,
    }
}

fn curve_to(c1: Pos2, c2: Pos2, end: Pos2) -> String {
    format!(" C {}, {}, {}", coords(c1), coords(c2), coords(end))
}

fn coords(point: Pos2) -> String {
    format!("{} {}", number(point.x), number(point.y))
}

// -0 prints as "-0"
fn number(value: f32) -> f32 {
    if value == 0.0 { 0.0 } else { value }
}
