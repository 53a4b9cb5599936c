use crate::command::Command;
use crate::state::{EditorContext, ToolMode};

/// Toolbar on the left. Returns the commands clicked this frame.
pub fn tools_panel(ctx: &egui::Context, editor: &EditorContext, last_payload: Option<&str>) -> Vec<Command> {
    let mut commands = Vec::new();
    let state = editor.state();

    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.add_enabled_ui(state.can_change_mode(), |ui| {
                ui.horizontal(|ui| {
                    let mode = state.interaction.tool_mode;
                    if ui.selectable_label(mode == ToolMode::Add, "Add points").clicked() {
                        commands.push(Command::AddPointMode);
                    }
                    if ui.selectable_label(mode == ToolMode::Select, "Select").clicked() {
                        commands.push(Command::SelectMode);
                    }
                });
            });
            ui.separator();

            ui.horizontal(|ui| {
                if ui.add_enabled(editor.can_undo(), egui::Button::new("Undo")).clicked() {
                    commands.push(Command::Undo);
                }
                if ui.add_enabled(editor.can_redo(), egui::Button::new("Redo")).clicked() {
                    commands.push(Command::Redo);
                }
            });
            if ui
                .add_enabled(state.can_delete(), egui::Button::new("Delete point"))
                .clicked()
            {
                commands.push(Command::DeleteSelected);
            }
            let close_label = if state.path.is_closed() { "Open path" } else { "Close path" };
            if ui
                .add_enabled(state.can_toggle_closed(), egui::Button::new(close_label))
                .clicked()
            {
                commands.push(Command::ToggleClosed);
            }
            if ui.selectable_label(state.show_grid, "Grid").clicked() {
                commands.push(Command::ToggleGrid);
            }
            if ui.button("Clear all").clicked() {
                commands.push(Command::Clear);
            }
            ui.separator();

            ui.label("Background");
            match &state.background {
                Some(background) => {
                    let moving = background.is_move_mode_active();
                    let label = if moving { "Done moving" } else { "Move image" };
                    if ui
                        .add_enabled(state.can_toggle_background_move(), egui::SelectableLabel::new(moving, label))
                        .clicked()
                    {
                        commands.push(Command::ToggleBackgroundMove);
                    }
                    let mut opacity = background.opacity();
                    if ui
                        .add(egui::Slider::new(&mut opacity, 0.0..=1.0).text("Opacity"))
                        .changed()
                    {
                        commands.push(Command::SetBackgroundOpacity(opacity));
                    }
                    if ui.button("Remove image").clicked() {
                        commands.push(Command::RemoveBackground);
                    }
                }
                None => {
                    ui.label("Drop an image on the window to trace over it.");
                }
            }
            ui.separator();

            if ui
                .add_enabled(!state.path.is_empty(), egui::Button::new("Add to design"))
                .clicked()
            {
                commands.push(Command::AddToHost);
            }

            if let Some(message) = &state.message {
                ui.colored_label(egui::Color32::from_rgb(200, 40, 40), message);
            }

            let geometry = editor.geometry();
            ui.separator();
            ui.label(format!("Points: {}", state.path.len()));
            if let Some(size) = geometry.bounding_box {
                ui.label(format!("Size: {:.0} x {:.0}", size.x, size.y));
            }
            ui.label(format!(
                "History: {}/{}",
                editor.history().index() + 1,
                editor.history().len()
            ));

            if let Some(json) = last_payload {
                ui.collapsing("Last payload", |ui| {
                    ui.monospace(json);
                });
            }
        });

    commands
}
