use std::path::{Path, PathBuf};

use tracing::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::{ElementState, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::error::{Error, Result};
use crate::export::{Export, ExportPaths};
use crate::groups::{DivisionMode, Group};
use crate::objects::Object;
use crate::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    FileNotSelected,
    CanNotOpen,
    BadFile,
    /// Polygons are loaded but `groups` does not match the current mode yet.
    FileRead,
    Divided,
}

/// Everything the interactive tool knows. Operations consume the state and hand back the next one.
#[derive(Debug, Default)]
pub struct AppState {
    pub path: Option<PathBuf>,
    pub object: Object,
    pub groups: Vec<Group>,
    pub mode: DivisionMode,
    pub status: Status,
    /// Last failure, for display.
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(mode: DivisionMode) -> Self {
        return AppState {
            mode,
            ..AppState::default()
        };
    }

    /// Replaces the loaded file. On failure nothing stays loaded; the mode is kept.
    pub fn load(self, path: &Path) -> Self {
        match Object::parse(path) {
            Ok(object) => {
                info!(
                    "Loaded {} polygons from {}",
                    object.polygon_count(),
                    path.display()
                );

                AppState {
                    path: Some(path.to_path_buf()),
                    object,
                    groups: Vec::new(),
                    mode: self.mode,
                    status: Status::FileRead,
                    notice: None,
                }
            }

            Err(e) => {
                error!("{}", e);

                let status = match e {
                    Error::EmptyOrUnparsable { .. } => Status::BadFile,
                    _ => Status::CanNotOpen,
                };

                AppState {
                    status,
                    notice: Some(e.to_string()),
                    ..AppState::new(self.mode)
                }
            }
        }
    }

    pub fn set_mode(mut self, mode: DivisionMode) -> Self {
        if mode != self.mode {
            self.mode = mode;
            if self.status == Status::Divided {
                self.status = Status::FileRead;
            }
        }
        return self;
    }

    /// Divides the loaded polygons if the groups are stale.
    pub fn partition(mut self) -> Self {
        if self.status == Status::FileRead {
            self.groups = self.mode.divide(&self.object.polygons);
            self.status = Status::Divided;
            info!("{} groups ({})", self.groups.len(), self.mode);
        }
        return self;
    }

    /// Writes `<base>.obj` and `<base>.mtl`. Does nothing until the polygons are divided.
    pub fn export<P: AsRef<Path>>(&self, base: P) -> Result<Option<ExportPaths>> {
        if self.status != Status::Divided {
            return Ok(None);
        }

        let paths = Export::new(&self.object, &self.groups).write(base)?;
        return Ok(Some(paths));
    }

    pub fn summary(&self) -> String {
        match self.status {
            Status::FileNotSelected => "No file...".to_string(),
            Status::CanNotOpen | Status::BadFile => self
                .notice
                .clone()
                .unwrap_or_else(|| "Can't load file.".to_string()),
            Status::FileRead | Status::Divided => {
                let name = self
                    .path
                    .as_deref()
                    .and_then(Path::file_name)
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();

                format!(
                    "{}: loaded {} polygons, {} groups ({})",
                    name,
                    self.object.polygon_count(),
                    self.groups.len(),
                    self.mode
                )
            }
        }
    }
}

/// Base path of the exported files: `<dir>/<stem>_materials`.
pub fn export_base(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    let dir = out_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();

    return dir.join(format!("{}_materials", stem));
}

pub struct App {
    state: AppState,
    out_dir: Option<PathBuf>,
    window: Option<Window>,
    failure: Option<Error>,
}

impl App {
    pub fn new(state: AppState, out_dir: Option<PathBuf>) -> Self {
        return App {
            state,
            out_dir,
            window: None,
            failure: None,
        };
    }

    /// The error that stopped the event loop, if any.
    pub fn finish(self) -> Result<()> {
        match self.failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, e: Error) {
        error!("{}", e);
        self.failure = Some(e);
        event_loop.exit();
    }

    fn refresh_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&format!("{} - {}", WINDOW_TITLE, self.state.summary()));
        }
    }

    fn update(&mut self, step: impl FnOnce(AppState) -> AppState) {
        self.state = step(std::mem::take(&mut self.state));
        self.refresh_title();
    }

    fn export(&mut self, event_loop: &ActiveEventLoop) {
        let Some(input) = self.state.path.clone() else {
            return;
        };

        let base = export_base(&input, self.out_dir.as_deref());
        match self.state.export(&base) {
            Ok(Some(paths)) => {
                info!("Files successfully exported: {}", paths.obj.display());
                if let Some(window) = &self.window {
                    window.set_title(&format!(
                        "{} - exported {}",
                        WINDOW_TITLE,
                        paths.obj.display()
                    ));
                }
            }
            Ok(None) => {}
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        match code {
            KeyCode::KeyU => self.update(|s| s.set_mode(DivisionMode::PerUvGroup)),
            KeyCode::KeyP => self.update(|s| s.set_mode(DivisionMode::PerPolygon)),
            KeyCode::KeyE => self.export(event_loop),
            KeyCode::Escape => event_loop.exit(),
            _ => (),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

            match event_loop.create_window(window_attributes) {
                Ok(window) => {
                    self.window = Some(window);
                    self.refresh_title();
                }
                Err(e) => {
                    self.fail(event_loop, e.into());
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::DroppedFile(path) => {
                self.update(|s| s.load(&path));
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }

                if let PhysicalKey::Code(code) = event.physical_key {
                    self.handle_key(event_loop, code);
                }
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.state.status == Status::FileRead {
            self.update(AppState::partition);
        }
    }
}
