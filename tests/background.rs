use std::io::Cursor;

use eframe_pen::background::{BackgroundImage, DragConstraint, LoadedImage, clamp_drag, fit_to_canvas};
use eframe_pen::error::EditorError;
use eframe_pen::file_handler::decode_image;
use egui::{Pos2, Vec2};

fn encoded_png(width: u32, height: u32) -> Vec<u8> {
    let image = image::DynamicImage::ImageRgba8(image::RgbaImage::new(width, height));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

#[test]
fn test_wide_image_overflows_horizontally() {
    let (size, constraint) = fit_to_canvas(Vec2::new(400.0, 200.0), Vec2::new(300.0, 300.0));
    assert_eq!(size, Vec2::new(600.0, 300.0));
    assert_eq!(constraint, DragConstraint::Horizontal);
}

#[test]
fn test_tall_image_overflows_vertically() {
    let (size, constraint) = fit_to_canvas(Vec2::new(100.0, 400.0), Vec2::new(600.0, 400.0));
    assert_eq!(size, Vec2::new(600.0, 2400.0));
    assert_eq!(constraint, DragConstraint::Vertical);
}

#[test]
fn test_wide_image_without_overflow_matches_width() {
    let (size, constraint) = fit_to_canvas(Vec2::new(500.0, 400.0), Vec2::new(600.0, 400.0));
    assert_eq!(size, Vec2::new(600.0, 480.0));
    assert_eq!(constraint, DragConstraint::None);
}

#[test]
fn test_square_image_takes_larger_canvas_side() {
    let (size, constraint) = fit_to_canvas(Vec2::new(50.0, 50.0), Vec2::new(600.0, 400.0));
    assert_eq!(size, Vec2::splat(600.0));
    assert_eq!(constraint, DragConstraint::None);
}

#[test]
fn test_degenerate_image_does_not_fit() {
    let (size, constraint) = fit_to_canvas(Vec2::new(0.0, 50.0), Vec2::new(600.0, 400.0));
    assert_eq!(size, Vec2::ZERO);
    assert_eq!(constraint, DragConstraint::None);
}

#[test]
fn test_horizontal_clamp_bounds() {
    let fitted = Vec2::new(600.0, 300.0);
    let canvas = Vec2::new(300.0, 300.0);
    let current = Pos2::ZERO;

    let far_left = clamp_drag(DragConstraint::Horizontal, Pos2::new(-1000.0, 50.0), current, fitted, canvas);
    assert_eq!(far_left, Pos2::new(-300.0, 0.0));

    let right = clamp_drag(DragConstraint::Horizontal, Pos2::new(40.0, -20.0), current, fitted, canvas);
    assert_eq!(right, Pos2::new(0.0, 0.0));

    let inside = clamp_drag(DragConstraint::Horizontal, Pos2::new(-120.0, 9.0), current, fitted, canvas);
    assert_eq!(inside, Pos2::new(-120.0, 0.0));
}

#[test]
fn test_vertical_clamp_bounds() {
    let fitted = Vec2::new(600.0, 2400.0);
    let canvas = Vec2::new(600.0, 400.0);
    let current = Pos2::new(0.0, -100.0);

    let up = clamp_drag(DragConstraint::Vertical, Pos2::new(80.0, -5000.0), current, fitted, canvas);
    assert_eq!(up, Pos2::new(0.0, -2000.0));

    let down = clamp_drag(DragConstraint::Vertical, Pos2::new(0.0, 30.0), current, fitted, canvas);
    assert_eq!(down, Pos2::new(0.0, 0.0));
}

#[test]
fn test_unconstrained_image_stays_put() {
    let current = Pos2::new(0.0, 0.0);
    let proposed = Pos2::new(-40.0, -40.0);
    let clamped = clamp_drag(
        DragConstraint::None,
        proposed,
        current,
        Vec2::new(600.0, 480.0),
        Vec2::new(600.0, 400.0),
    );
    assert_eq!(clamped, current);
}

#[test]
fn test_background_drag_needs_move_mode() {
    let image = LoadedImage::new(image::RgbaImage::new(400, 200));
    let canvas = Vec2::new(300.0, 300.0);
    let mut background = BackgroundImage::new(image, canvas, 0.5);

    background.begin_drag(Pos2::new(100.0, 100.0));
    background.drag_to(Pos2::new(0.0, 100.0), canvas);
    assert!(!background.is_dragging());
    assert_eq!(background.position(), Pos2::ZERO);

    assert!(background.toggle_move_mode());
    background.begin_drag(Pos2::new(100.0, 100.0));
    background.drag_to(Pos2::new(0.0, 150.0), canvas);
    background.end_drag();
    assert_eq!(background.position(), Pos2::new(-100.0, 0.0));
    assert_eq!(background.rect().max, Pos2::new(500.0, 300.0));
}

#[test]
fn test_refit_resets_position_and_move_mode() {
    let image = LoadedImage::new(image::RgbaImage::new(400, 200));
    let mut background = BackgroundImage::new(image, Vec2::new(300.0, 300.0), 0.5);
    background.toggle_move_mode();
    background.begin_drag(Pos2::new(100.0, 0.0));
    background.drag_to(Pos2::new(50.0, 0.0), Vec2::new(300.0, 300.0));

    background.refit(Vec2::new(800.0, 300.0));
    assert_eq!(background.position(), Pos2::ZERO);
    assert!(!background.is_move_mode_active());
    assert_eq!(background.fitted_size(), Vec2::new(800.0, 400.0));
    assert!(!background.can_move());
}

#[test]
fn test_decode_png() {
    let loaded = decode_image(&encoded_png(4, 2)).unwrap();
    assert_eq!(loaded.natural_size, Vec2::new(4.0, 2.0));
    assert_eq!(loaded.bitmap.dimensions(), (4, 2));
}

#[test]
fn test_decode_garbage_fails() {
    let result = decode_image(b"definitely not an image");
    assert!(matches!(result, Err(EditorError::ImageDecodeFailure(_))));
}
