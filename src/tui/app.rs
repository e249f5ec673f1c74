use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::{info, warn};

use crate::model::settings::Settings;
use crate::model::task::Priority;
use crate::ops::{DragState, RowExtent, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task into the input line
    Input,
    /// Choosing a priority for one task
    PriorityMenu,
    /// Editing a draft of the settings
    Settings,
}

/// The new-task input line
#[derive(Debug, Clone, Default)]
pub struct InputLine {
    pub buffer: String,
    /// Byte offset into `buffer`
    pub cursor: usize,
    /// Priority the next added task gets
    pub priority: Priority,
}

impl InputLine {
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }
}

/// Open priority menu for the task at `index`
#[derive(Debug, Clone, Copy)]
pub struct PriorityMenu {
    pub index: usize,
    pub selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    FontFamily,
    FontSize,
    DarkMode,
}

impl SettingsField {
    pub fn next(self) -> Self {
        match self {
            SettingsField::FontFamily => SettingsField::FontSize,
            SettingsField::FontSize => SettingsField::DarkMode,
            SettingsField::DarkMode => SettingsField::FontFamily,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SettingsField::FontFamily => SettingsField::DarkMode,
            SettingsField::FontSize => SettingsField::FontFamily,
            SettingsField::DarkMode => SettingsField::FontSize,
        }
    }
}

/// Settings being edited; only applied on confirm.
#[derive(Debug, Clone)]
pub struct SettingsDraft {
    pub settings: Settings,
    pub field: SettingsField,
    /// Highlighted entry in the font family list
    pub font_cursor: usize,
}

impl SettingsDraft {
    pub fn new(settings: &Settings) -> Self {
        SettingsDraft {
            settings: settings.clone(),
            field: SettingsField::FontFamily,
            font_cursor: settings.font_index(),
        }
    }
}

/// Screen position of one rendered task row, captured at draw time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Task index in the store
    pub index: usize,
    pub extent: RowExtent,
    pub x: u16,
}

/// Column offsets inside a row
pub const HANDLE_COLS: std::ops::Range<u16> = 0..2;
pub const SWATCH_COLS: std::ops::Range<u16> = 2..5;
pub const CHECKBOX_COLS: std::ops::Range<u16> = 5..9;

/// What part of a row a column falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPart {
    Handle,
    Swatch,
    Checkbox,
    Text,
}

impl RowLayout {
    pub fn part_at(&self, column: u16) -> RowPart {
        let offset = column.saturating_sub(self.x);
        if HANDLE_COLS.contains(&offset) {
            RowPart::Handle
        } else if SWATCH_COLS.contains(&offset) {
            RowPart::Swatch
        } else if CHECKBOX_COLS.contains(&offset) {
            RowPart::Checkbox
        } else {
            RowPart::Text
        }
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the task list
    pub cursor: usize,
    /// Scroll offset (first visible task)
    pub scroll_offset: usize,
    pub input: InputLine,
    pub priority_menu: Option<PriorityMenu>,
    pub settings_draft: Option<SettingsDraft>,
    pub drag: DragState,
    /// Pointer row while dragging, for the drop marker
    pub drag_hover: Option<u16>,
    /// Rows drawn in the last frame, top to bottom
    pub rows: Vec<RowLayout>,
    /// Where the priority menu was drawn in the last frame
    pub menu_area: Option<Rect>,
    /// Help overlay visible
    pub show_help: bool,
    /// First `q` pressed with unsaved changes
    pub quit_pending: bool,
    /// One-shot message for the status row
    pub status: Option<String>,
}

impl App {
    pub fn new(store: TaskStore) -> Self {
        let theme = Theme::from_settings(store.settings());
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            input: InputLine::default(),
            priority_menu: None,
            settings_draft: None,
            drag: DragState::Idle,
            drag_hover: None,
            rows: Vec::new(),
            menu_area: None,
            show_help: false,
            quit_pending: false,
            status: None,
        }
    }

    /// Keep the cursor on a valid row after the list changed shape
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    /// Rebuild the theme after the settings changed
    pub fn refresh_theme(&mut self) {
        self.theme = Theme::from_settings(self.store.settings());
    }

    /// Row extents of the last frame, in display order
    pub fn row_extents(&self) -> Vec<RowExtent> {
        self.rows.iter().map(|r| r.extent).collect()
    }

    /// The rendered row under screen line `y`
    pub fn row_at(&self, y: u16) -> Option<&RowLayout> {
        self.rows.iter().find(|r| r.extent.contains(y))
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    /// Write tasks to disk, reporting the outcome on the status row
    pub fn save(&mut self) {
        match self.store.save() {
            Ok(()) => self.set_status(format!("saved {} tasks", self.store.len())),
            Err(e) => {
                warn!("save failed: {}", e);
                self.set_status(format!("save failed: {}", e));
            }
        }
    }

    pub fn set_priority(&mut self, index: usize, priority: Priority) {
        if let Err(e) = self.store.set_priority(index, priority) {
            warn!("set priority failed: {}", e);
            self.set_status(e.to_string());
        }
    }

    /// Apply a finished drag: move the dragged task to the row it was
    /// dropped on.
    pub fn finish_drag(&mut self, release_y: u16) {
        self.drag_hover = None;
        let extents = self.row_extents();
        let Some((source, row)) = self.drag.release(release_y, &extents) else {
            return;
        };
        let Some(target) = self.rows.get(row).map(|r| r.index) else {
            return;
        };
        if self.store.reorder(source, target) {
            self.cursor = target;
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let store = TaskStore::open(data_dir);
    let mut app = App::new(store);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    if app.store.is_dirty() {
        info!("quit with unsaved changes");
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
