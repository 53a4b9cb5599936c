use crate::event::EditorEvent;
use crate::input::InputHandler;
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// The drawing canvas. Returns the events produced this frame.
///
/// The canvas is the configured size, shrunk to the space the panel has.
pub fn central_panel(
    ctx: &egui::Context,
    editor: &EditorContext,
    input: &mut InputHandler,
    renderer: &mut Renderer,
) -> Vec<EditorEvent> {
    let mut events = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        let canvas_size = editor.config().canvas_size.min(ui.available_size()).floor();
        if canvas_size.x > 0.0 && canvas_size.y > 0.0 && canvas_size != editor.state().canvas_size {
            log::debug!("canvas resized to {canvas_size:?}");
            events.push(EditorEvent::CanvasResized(canvas_size));
        }

        let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
        input.set_canvas_rect(response.rect);

        renderer.render(
            ctx,
            &painter,
            response.rect,
            editor.state(),
            editor.config().grid_spacing,
        );

        events.extend(input.process_pointer(ctx, editor.state(), editor.config().hit_radius));
    });

    events
}
