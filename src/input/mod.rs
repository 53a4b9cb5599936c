use egui::{Context, Key, Pos2, Rect};

use crate::command::Command;
use crate::event::EditorEvent;
use crate::geometry::clamp_to_canvas;
use crate::geometry::hit_testing::hit_test;
use crate::state::{DragTarget, EditorState};

/// What lies under the pointer when it goes down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerTarget {
    /// Empty canvas area
    Canvas,
    /// An anchor glyph or one of its handle glyphs
    Point(DragTarget),
}

/// Pointer events in canvas-local pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        position: Pos2,
        target: PointerTarget,
    },
    PointerMove {
        position: Pos2,
    },
    PointerUp {
        position: Pos2,
    },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            InputEvent::PointerDown { position, .. }
            | InputEvent::PointerMove { position }
            | InputEvent::PointerUp { position } => *position,
        }
    }
}

/// Handles converting raw egui input into editor events
pub struct InputHandler {
    canvas_rect: Rect,
    pointer_held: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pointer_held: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    /// Screen position to clamped canvas-local position.
    fn to_canvas(&self, screen: Pos2) -> Pos2 {
        clamp_to_canvas(
            Pos2::new(screen.x - self.canvas_rect.min.x, screen.y - self.canvas_rect.min.y),
            self.canvas_rect.size(),
        )
    }

    /// Process this frame's pointer state over the canvas.
    ///
    /// A press only counts when it starts inside the canvas. Moves and the
    /// release are reported for the whole gesture, clamped to the canvas.
    pub fn process_pointer(
        &mut self,
        ctx: &Context,
        state: &EditorState,
        hit_radius: f32,
    ) -> Vec<EditorEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.interact_pos().or(input.pointer.hover_pos());

            if input.pointer.primary_pressed() {
                if let Some(pos) = hover.filter(|pos| self.canvas_rect.contains(*pos)) {
                    let position = self.to_canvas(pos);
                    // Alt pulls a handle out of its anchor
                    let target = hit_test(state, position, hit_radius, input.modifiers.alt);
                    events.push(EditorEvent::Input(InputEvent::PointerDown { position, target }));
                    self.pointer_held = true;
                    self.last_pointer_pos = Some(pos);
                }
            } else if self.pointer_held && input.pointer.primary_down() {
                if let Some(pos) = hover.filter(|pos| Some(*pos) != self.last_pointer_pos) {
                    events.push(EditorEvent::Input(InputEvent::PointerMove {
                        position: self.to_canvas(pos),
                    }));
                    self.last_pointer_pos = Some(pos);
                }
            }

            if self.pointer_held && !input.pointer.primary_down() {
                let pos = hover.or(self.last_pointer_pos).unwrap_or(self.canvas_rect.min);
                events.push(EditorEvent::Input(InputEvent::PointerUp {
                    position: self.to_canvas(pos),
                }));
                self.pointer_held = false;
                self.last_pointer_pos = None;
            }
        });

        events
    }

    /// Keyboard shortcuts. Skipped while a text field has focus.
    pub fn process_shortcuts(&self, ctx: &Context) -> Vec<Command> {
        if ctx.wants_keyboard_input() {
            return Vec::new();
        }

        ctx.input(|input| {
            let mut commands = Vec::new();
            let command = input.modifiers.command;

            if input.key_pressed(Key::Delete) || input.key_pressed(Key::Backspace) {
                commands.push(Command::DeleteSelected);
            }
            if command && input.key_pressed(Key::Z) {
                commands.push(if input.modifiers.shift { Command::Redo } else { Command::Undo });
            }
            if command && input.key_pressed(Key::Y) {
                commands.push(Command::Redo);
            }
            if !command && input.key_pressed(Key::A) {
                commands.push(Command::AddPointMode);
            }
            if !command && input.key_pressed(Key::V) {
                commands.push(Command::SelectMode);
            }
            commands
        })
    }
}
