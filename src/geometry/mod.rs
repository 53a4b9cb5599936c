use egui::{Pos2, Rect, Vec2};

pub mod hit_testing;

/// Positions are canvas-local pixels.
pub type Point = Pos2;

/// Calculate the bounding box for a set of points.
///
/// Returns `None` for an empty set, so callers never see `Rect::NOTHING`.
pub fn bounding_rect(points: impl IntoIterator<Item = Pos2>) -> Option<Rect> {
    let points: Vec<Pos2> = points.into_iter().collect();
    if points.is_empty() {
        return None;
    }
    Some(Rect::from_points(&points))
}

/// Clamp a position into `[0, size.x] x [0, size.y]`.
pub fn clamp_to_canvas(point: Pos2, canvas_size: Vec2) -> Pos2 {
    Pos2::new(
        point.x.clamp(0.0, canvas_size.x.max(0.0)),
        point.y.clamp(0.0, canvas_size.y.max(0.0)),
    )
}

/// Translate a point by `-origin`, expressing it relative to `origin`.
pub fn relative_to(point: Pos2, origin: Pos2) -> Pos2 {
    Pos2::new(point.x - origin.x, point.y - origin.y)
}
