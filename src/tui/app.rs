use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::io::config_io::read_config;
use crate::io::log::log_store_failure;
use crate::io::store::Store;
use crate::io::watcher::StoreWatcher;
use crate::model::{AppConfig, Board, ChecklistItem};
use crate::ops;

use super::drag::DragSession;
use super::input;
use super::render;
use super::targets::TargetRegistry;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Edit,
    Move,
}

/// What the Edit mode input will create
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    NewItem,
    NewLocation,
}

/// Per-location list state (cursor, scroll)
#[derive(Debug, Clone, Default)]
pub struct LocationViewState {
    /// Cursor index into the visible (unchecked-first) item list
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
}

/// Main application state
pub struct App {
    pub board: Board,
    pub store: Store,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Minimum pointer travel (Chebyshev) before a press becomes a drag
    pub drag_threshold: u16,
    /// Selected location id; None only while the board has no locations
    pub selected: Option<String>,
    /// Per-location view state
    pub location_states: HashMap<String, LocationViewState>,
    /// Help overlay visible
    pub show_help: bool,
    /// What the Edit mode input will create
    pub edit_target: EditTarget,
    /// Edit mode: text being typed
    pub edit_buffer: String,
    /// Edit mode: cursor byte offset into edit_buffer
    pub edit_cursor: usize,
    /// Move mode: item being reassigned
    pub move_item: Option<String>,
    /// Move mode: candidate target location id
    pub move_target: Option<String>,
    /// Drop targets registered by the last render pass, in chip order
    pub targets: TargetRegistry,
    /// Row rectangles of the visible items, from the last render pass
    pub item_rows: Vec<(String, Rect)>,
    /// Rectangle of the "+" chip, when one was rendered
    pub add_chip_rect: Option<Rect>,
    pub drag: DragSession,
    /// Left press on an item row, armed as a potential drag
    pub pending_press: Option<(String, Position)>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub watcher: Option<StoreWatcher>,
}

impl App {
    pub fn new(board: Board, store: Store, config: &AppConfig) -> Self {
        let theme = Theme::from_config(&config.ui);
        let selected = board.locations.first().map(|loc| loc.id.clone());

        App {
            board,
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            drag_threshold: config.behavior.drag_threshold,
            selected,
            location_states: HashMap::new(),
            show_help: false,
            edit_target: EditTarget::NewItem,
            edit_buffer: String::new(),
            edit_cursor: 0,
            move_item: None,
            move_target: None,
            targets: TargetRegistry::new(),
            item_rows: Vec::new(),
            add_chip_rect: None,
            drag: DragSession::Idle,
            pending_press: None,
            status_message: None,
            status_is_error: false,
            watcher: None,
        }
    }

    /// Items shown for the selected location: unchecked first, then checked
    pub fn visible_items(&self) -> Vec<&ChecklistItem> {
        match &self.selected {
            Some(location_id) => ops::visible_items(&self.board, location_id),
            None => Vec::new(),
        }
    }

    /// Cursor position in the selected location's list
    pub fn cursor(&self) -> usize {
        self.selected
            .as_deref()
            .and_then(|id| self.location_states.get(id))
            .map_or(0, |state| state.cursor)
    }

    /// Id of the item under the list cursor
    pub fn current_item_id(&self) -> Option<String> {
        let cursor = self.cursor();
        self.visible_items().get(cursor).map(|item| item.id.clone())
    }

    /// Get or create the view state for a location
    pub fn location_state(&mut self, location_id: &str) -> &mut LocationViewState {
        self.location_states
            .entry(location_id.to_string())
            .or_default()
    }

    /// Display name for a location, falling back to its id
    pub fn location_name<'a>(&'a self, location_id: &'a str) -> &'a str {
        self.board
            .location(location_id)
            .map(|loc| loc.name.as_str())
            .unwrap_or(location_id)
    }

    /// Move selection to the next location chip (wraps)
    pub fn select_next_location(&mut self) {
        self.select_offset(1);
    }

    /// Move selection to the previous location chip (wraps)
    pub fn select_prev_location(&mut self) {
        self.select_offset(-1);
    }

    fn select_offset(&mut self, offset: isize) {
        if self.board.locations.is_empty() {
            self.selected = None;
            return;
        }
        let len = self.board.locations.len() as isize;
        let current = self
            .selected
            .as_deref()
            .and_then(|id| self.board.locations.iter().position(|loc| loc.id == id))
            .unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len) as usize;
        self.selected = Some(self.board.locations[next].id.clone());
    }

    /// Clamp the selected location's cursor to the visible list
    pub fn clamp_cursor(&mut self) {
        let Some(selected) = self.selected.clone() else {
            return;
        };
        let len = self.visible_items().len();
        let state = self.location_state(&selected);
        if len == 0 {
            state.cursor = 0;
            state.scroll_offset = 0;
        } else if state.cursor >= len {
            state.cursor = len - 1;
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    /// Persist the item list, absorbing failures into the status row
    pub fn save_items(&mut self) {
        if let Err(e) = self.store.save_items(&self.board.items) {
            log_store_failure(self.store.dir(), "save items", &e);
            self.set_error("could not save items (see .store.log)");
        }
    }

    /// Persist the location list, absorbing failures into the status row
    pub fn save_locations(&mut self) {
        if let Err(e) = self.store.save_locations(&self.board.locations) {
            log_store_failure(self.store.dir(), "save locations", &e);
            self.set_error("could not save locations (see .store.log)");
        }
    }

    /// Re-read both lists after the store files changed on disk.
    /// Echoes of our own saves arrive here too and are skipped by equality.
    pub fn reload_board(&mut self) {
        let board = self.store.load_board();
        if board == self.board {
            return;
        }
        self.board = board;

        if let Some(selected) = &self.selected
            && !self.board.location_exists(selected)
        {
            self.selected = None;
        }
        if self.selected.is_none() {
            self.selected = self.board.locations.first().map(|loc| loc.id.clone());
        }

        // Drop hit targets and in-flight gestures that reference removed rows
        let board = &self.board;
        self.targets.prune(|id| board.location_exists(id));
        if let Some(item_id) = self.drag.item_id()
            && self.board.item(item_id).is_none()
        {
            self.drag = DragSession::Idle;
        }
        if let Some((item_id, _)) = &self.pending_press
            && self.board.item(item_id).is_none()
        {
            self.pending_press = None;
        }

        self.clamp_cursor();
        self.set_status("store changed on disk, reloaded");
    }
}

/// Restore UI state from .state.json
pub fn restore_ui_state(app: &mut App) {
    use crate::io::state::read_ui_state;

    let ui_state = match read_ui_state(app.store.dir()) {
        Some(s) => s,
        None => return,
    };

    if let Some(selected) = ui_state.selected
        && app.board.location_exists(&selected)
    {
        app.selected = Some(selected);
    }

    for (location_id, location_ui) in &ui_state.locations {
        let state = app.location_state(location_id);
        state.cursor = location_ui.cursor;
        state.scroll_offset = location_ui.scroll_offset;
    }

    app.clamp_cursor();
}

/// Save UI state to .state.json
pub fn save_ui_state(app: &App) {
    use crate::io::state::{LocationUiState, UiState, write_ui_state};

    let mut locations = HashMap::new();
    for (location_id, state) in &app.location_states {
        locations.insert(
            location_id.clone(),
            LocationUiState {
                cursor: state.cursor,
                scroll_offset: state.scroll_offset,
            },
        );
    }

    let ui_state = UiState {
        selected: app.selected.clone(),
        locations,
    };

    let _ = write_ui_state(app.store.dir(), &ui_state);
}

/// Run the TUI application
pub fn run(store_dir: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(&store_dir)?;

    let config = match read_config(&store_dir) {
        Ok(config) => config,
        Err(e) => {
            log_store_failure(&store_dir, "read config", &e);
            AppConfig::default()
        }
    };

    let store = Store::new(&store_dir);
    let board = store.load_board();
    let mut app = App::new(board, store, &config);

    app.watcher = match StoreWatcher::start(&store_dir) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            log_store_failure(&store_dir, "watch store", &e);
            None
        }
    };

    // Restore saved UI state
    restore_ui_state(&mut app);

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

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save UI state before exit
    save_ui_state(&app);

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
    let mut save_counter = 0u32;
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    // Debounced state save: every ~5 key presses
                    save_counter += 1;
                    if save_counter >= 5 {
                        save_ui_state(app);
                        save_counter = 0;
                    }
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }

        let store_changed = match &app.watcher {
            Some(watcher) => !watcher.poll().is_empty(),
            None => false,
        };
        if store_changed {
            app.reload_board();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
