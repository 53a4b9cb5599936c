use std::sync::Arc;

use egui::{Color32, Pos2, Rect, Stroke, Vec2};
use egui::epaint::CubicBezierShape;

use crate::background::BackgroundImage;
use crate::path::{Anchor, PointRole};
use crate::state::{DragTarget, EditorState, ToolMode};

const PATH_COLOR: Color32 = Color32::from_rgb(30, 30, 30);
const ANCHOR_COLOR: Color32 = Color32::from_rgb(30, 120, 255);
const SELECTED_COLOR: Color32 = Color32::from_rgb(255, 120, 30);
const HANDLE_COLOR: Color32 = Color32::from_rgb(120, 120, 120);
const GRID_COLOR: Color32 = Color32::from_gray(225);
const ANCHOR_RADIUS: f32 = 5.0;
const HANDLE_SIZE: f32 = 7.0;

/// One glyph to draw on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderPoint {
    pub target: DragTarget,
    pub position: Pos2,
    pub selected: bool,
}

impl RenderPoint {
    pub fn is_handle(&self) -> bool {
        self.target.role.is_handle()
    }
}

/// The glyphs the canvas shows for the current state.
///
/// Every anchor is shown. Handles appear only for the selected anchor in
/// select mode, after the anchors so they sit on top. A zero-length handle is
/// hidden under its anchor.
pub fn render_points(state: &EditorState) -> Vec<RenderPoint> {
    let interaction = &state.interaction;
    let mut points: Vec<RenderPoint> = state
        .path
        .anchors()
        .iter()
        .map(|anchor| RenderPoint {
            target: DragTarget::new(anchor.id(), PointRole::Anchor),
            position: anchor.anchor,
            selected: interaction.is_selected(anchor.id()),
        })
        .collect();

    if interaction.tool_mode == ToolMode::Select {
        if let Some(anchor) = interaction.selected_anchor(&state.path) {
            let handles = [PointRole::CpIn, PointRole::CpOut]
                .into_iter()
                .filter(|&role| anchor.point(role) != anchor.anchor)
                .map(|role| RenderPoint {
                    target: DragTarget::new(anchor.id(), role),
                    position: anchor.point(role),
                    selected: false,
                });
            points.extend(handles);
        }
    }
    points
}

/// Paints the canvas: grid, background image, path and glyphs.
#[derive(Default)]
pub struct Renderer {
    // keyed by the bitmap's allocation so a new image gets a new texture
    background_texture: Option<(usize, egui::TextureHandle)>,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        state: &EditorState,
        grid_spacing: f32,
    ) {
        let painter = painter.with_clip_rect(rect);
        let to_screen = |point: Pos2| rect.min + point.to_vec2();

        painter.rect_filled(rect, 0.0, Color32::WHITE);

        match &state.background {
            Some(background) => self.draw_background(ctx, &painter, rect, background),
            None => self.background_texture = None,
        }

        if state.show_grid && grid_spacing > 0.0 {
            draw_grid(&painter, rect, grid_spacing);
        }

        let anchors = state.path.anchors();
        for pair in anchors.windows(2) {
            draw_segment(&painter, &pair[0], &pair[1], to_screen);
        }
        if state.path.is_closed() {
            if let (Some(first), Some(last)) = (anchors.first(), anchors.last()) {
                draw_segment(&painter, last, first, to_screen);
            }
        }

        let glyphs = render_points(state);
        for glyph in glyphs.iter().filter(|glyph| glyph.is_handle()) {
            if let Some(anchor) = state.path.find(glyph.target.anchor_id) {
                painter.line_segment(
                    [to_screen(anchor.anchor), to_screen(glyph.position)],
                    Stroke::new(1.0, HANDLE_COLOR),
                );
            }
        }
        for glyph in &glyphs {
            let center = to_screen(glyph.position);
            if glyph.is_handle() {
                let handle = Rect::from_center_size(center, Vec2::splat(HANDLE_SIZE));
                painter.rect_filled(handle, 1.0, HANDLE_COLOR);
            } else {
                let fill = if glyph.selected { SELECTED_COLOR } else { ANCHOR_COLOR };
                painter.circle_filled(center, ANCHOR_RADIUS, fill);
                painter.circle_stroke(center, ANCHOR_RADIUS, Stroke::new(1.0, Color32::WHITE));
            }
        }

        if state.is_move_mode_active() {
            painter.rect_stroke(rect.shrink(1.0), 0.0, Stroke::new(2.0, SELECTED_COLOR));
        }
    }

    fn draw_background(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        rect: Rect,
        background: &BackgroundImage,
    ) {
        let bitmap = &background.image().bitmap;
        let key = Arc::as_ptr(bitmap) as usize;
        let texture = match &self.background_texture {
            Some((cached, texture)) if *cached == key => texture.clone(),
            _ => {
                let size = [bitmap.width() as usize, bitmap.height() as usize];
                let image = egui::ColorImage::from_rgba_unmultiplied(size, bitmap.as_raw());
                let texture = ctx.load_texture("background", image, egui::TextureOptions::LINEAR);
                self.background_texture = Some((key, texture.clone()));
                texture
            }
        };

        let target = background.rect().translate(rect.min.to_vec2());
        painter.image(
            texture.id(),
            target,
            Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
            Color32::WHITE.gamma_multiply(background.opacity()),
        );
    }
}

fn draw_segment(painter: &egui::Painter, from: &Anchor, to: &Anchor, to_screen: impl Fn(Pos2) -> Pos2) {
    let points = [from.anchor, from.cp_out, to.cp_in, to.anchor].map(to_screen);
    painter.add(CubicBezierShape::from_points_stroke(
        points,
        false,
        Color32::TRANSPARENT,
        Stroke::new(2.0, PATH_COLOR),
    ));
}

fn draw_grid(painter: &egui::Painter, rect: Rect, spacing: f32) {
    let stroke = Stroke::new(1.0, GRID_COLOR);
    let mut x = rect.min.x + spacing;
    while x < rect.max.x {
        painter.line_segment([Pos2::new(x, rect.min.y), Pos2::new(x, rect.max.y)], stroke);
        x += spacing;
    }
    let mut y = rect.min.y + spacing;
    while y < rect.max.y {
        painter.line_segment([Pos2::new(rect.min.x, y), Pos2::new(rect.max.x, y)], stroke);
        y += spacing;
    }
}
