//! Optional reference image traced under the path.
//!
//! The image is fitted to the canvas keeping its aspect ratio. When it overflows
//! the canvas along one axis it can be slid along that axis in move mode, and
//! only within bounds that keep the canvas covered on that side.

use std::sync::Arc;

use egui::{Pos2, Rect, Vec2};

/// A decoded bitmap, as delivered by the image loader.
#[derive(Clone)]
pub struct LoadedImage {
    pub bitmap: Arc<image::RgbaImage>,
    pub natural_size: Vec2,
}

// RgbaImage's Debug dumps every pixel
impl std::fmt::Debug for LoadedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedImage")
            .field("natural_size", &self.natural_size)
            .finish_non_exhaustive()
    }
}

impl LoadedImage {
    pub fn new(bitmap: image::RgbaImage) -> Self {
        let natural_size = Vec2::new(bitmap.width() as f32, bitmap.height() as f32);
        Self {
            bitmap: Arc::new(bitmap),
            natural_size,
        }
    }
}

/// The axis along which a fitted image has room to slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragConstraint {
    #[default]
    None,
    Horizontal,
    Vertical,
}

/// Size the image to the canvas, keeping its aspect ratio.
///
/// Wide images take the canvas height and overflow horizontally when they can,
/// tall images take the canvas width and overflow vertically. If there is no
/// overflow the other axis is matched instead and the image cannot move.
pub fn fit_to_canvas(natural_size: Vec2, canvas_size: Vec2) -> (Vec2, DragConstraint) {
    let (width, height) = (canvas_size.x, canvas_size.y);
    if !(natural_size.x > 0.0 && natural_size.y > 0.0) {
        log::warn!("cannot fit image with natural size {natural_size:?}");
        return (Vec2::ZERO, DragConstraint::None);
    }

    let ratio = natural_size.x / natural_size.y;
    if ratio > 1.0 {
        let fitted_width = height * ratio;
        if fitted_width > width {
            (Vec2::new(fitted_width, height), DragConstraint::Horizontal)
        } else {
            (Vec2::new(width, width / ratio), DragConstraint::None)
        }
    } else if ratio < 1.0 {
        let fitted_height = width / ratio;
        if fitted_height > height {
            (Vec2::new(width, fitted_height), DragConstraint::Vertical)
        } else {
            (Vec2::new(height * ratio, height), DragConstraint::None)
        }
    } else {
        let side = width.max(height);
        (Vec2::splat(side), DragConstraint::None)
    }
}

/// Bound a proposed top-left position for a dragged image.
///
/// Along the constrained axis the image may slide between `canvas - fitted`
/// and 0. The other axis keeps `current`. Without a constraint nothing moves.
pub fn clamp_drag(
    constraint: DragConstraint,
    proposed: Pos2,
    current: Pos2,
    fitted_size: Vec2,
    canvas_size: Vec2,
) -> Pos2 {
    match constraint {
        DragConstraint::Horizontal => {
            let min_x = (canvas_size.x - fitted_size.x).min(0.0);
            Pos2::new(proposed.x.clamp(min_x, 0.0), current.y)
        }
        DragConstraint::Vertical => {
            let min_y = (canvas_size.y - fitted_size.y).min(0.0);
            Pos2::new(current.x, proposed.y.clamp(min_y, 0.0))
        }
        DragConstraint::None => current,
    }
}

/// A loaded reference image and how it sits on the canvas.
#[derive(Debug, Clone)]
pub struct BackgroundImage {
    image: LoadedImage,
    fitted_size: Vec2,
    position: Pos2,
    opacity: f32,
    drag_constraint: DragConstraint,
    move_mode_active: bool,
    // pointer offset from the image's top-left while dragging
    grab_offset: Option<Vec2>,
}

impl BackgroundImage {
    pub fn new(image: LoadedImage, canvas_size: Vec2, opacity: f32) -> Self {
        let (fitted_size, drag_constraint) = fit_to_canvas(image.natural_size, canvas_size);
        log::info!(
            "background {:?} fitted to {:?} ({:?})",
            image.natural_size,
            fitted_size,
            drag_constraint
        );
        Self {
            image,
            fitted_size,
            position: Pos2::ZERO,
            opacity: opacity.clamp(0.0, 1.0),
            drag_constraint,
            move_mode_active: false,
            grab_offset: None,
        }
    }

    /// Fit again after a canvas resize. Position and move mode are reset.
    pub fn refit(&mut self, canvas_size: Vec2) {
        let (fitted_size, drag_constraint) = fit_to_canvas(self.image.natural_size, canvas_size);
        self.fitted_size = fitted_size;
        self.drag_constraint = drag_constraint;
        self.position = Pos2::ZERO;
        self.move_mode_active = false;
        self.grab_offset = None;
    }

    pub fn image(&self) -> &LoadedImage {
        &self.image
    }

    pub fn natural_size(&self) -> Vec2 {
        self.image.natural_size
    }

    pub fn fitted_size(&self) -> Vec2 {
        self.fitted_size
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.fitted_size)
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn drag_constraint(&self) -> DragConstraint {
        self.drag_constraint
    }

    /// Move mode is only offered when the image overflows the canvas.
    pub fn can_move(&self) -> bool {
        self.drag_constraint != DragConstraint::None
    }

    pub fn is_move_mode_active(&self) -> bool {
        self.move_mode_active
    }

    /// Flip move mode. Returns `false` if the image cannot move at all.
    pub fn toggle_move_mode(&mut self) -> bool {
        if !self.can_move() {
            return false;
        }
        self.move_mode_active = !self.move_mode_active;
        self.grab_offset = None;
        true
    }

    pub fn is_dragging(&self) -> bool {
        self.grab_offset.is_some()
    }

    pub fn begin_drag(&mut self, pointer: Pos2) {
        if self.move_mode_active {
            self.grab_offset = Some(pointer - self.position);
        }
    }

    pub fn drag_to(&mut self, pointer: Pos2, canvas_size: Vec2) {
        if let Some(offset) = self.grab_offset {
            self.position = clamp_drag(
                self.drag_constraint,
                pointer - offset,
                self.position,
                self.fitted_size,
                canvas_size,
            );
        }
    }

    pub fn end_drag(&mut self) {
        self.grab_offset = None;
    }
}
