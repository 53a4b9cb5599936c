use crate::config::EditorConfig;
use crate::file_handler::FileHandler;
use crate::host::LoggingHost;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorContext;

pub struct PathEditorApp {
    config: EditorConfig,
    editor: EditorContext,
    renderer: Renderer,
    input: InputHandler,
    files: FileHandler,
    host: LoggingHost,
}

impl Default for PathEditorApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PathEditorApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // The config is the only thing that survives a restart; the path does not.
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, eframe::APP_KEY))
            .filter(|config| match config.validate() {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("ignoring stored config: {err}");
                    false
                }
            })
            .unwrap_or_default();

        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            editor: EditorContext::new(config.clone()),
            config,
            renderer: Renderer::new(),
            input: InputHandler::new(egui::Rect::NOTHING),
            files: FileHandler::new(),
            host: LoggingHost::new(),
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }
}

impl eframe::App for PathEditorApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.files.check_for_dropped_files(ctx) {
            for event in self.files.process_dropped_files() {
                self.editor.dispatch(event);
            }
        }

        let last_payload = self.host.last_json();
        let commands = tools_panel(ctx, &self.editor, last_payload.as_deref());
        let pointer_events = central_panel(ctx, &self.editor, &mut self.input, &mut self.renderer);
        let shortcuts = self.input.process_shortcuts(ctx);

        for command in commands.into_iter().chain(shortcuts) {
            self.editor.dispatch_with_host(command, &mut self.host);
        }
        for event in pointer_events {
            self.editor.dispatch_with_host(event, &mut self.host);
        }
    }
}
