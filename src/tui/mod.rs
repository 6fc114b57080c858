//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Load
//!
//! On start the adapter sends `Action::Mount`; the resulting
//! `Effect::SpawnLoad` spawns one tokio task that calls the provider and
//! posts `TemplatesLoaded`/`LoadFailed` back through a channel. Before each
//! input event is applied the loop drains that channel, so a load that
//! completed before a key press is always applied before it.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms to animate the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::catalog::TemplateProvider;
use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, LoadState};
use crate::tui::components::StripHit;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core view logic)
pub struct TuiState {
    /// Slot under the mouse pointer, for hover highlighting.
    pub hovered_slot: Option<usize>,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            hovered_slot: None,
            spinner_frame: 0,
        }
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

struct MouseCaptureGuard;

impl MouseCaptureGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Mouse capture enabled");
        Ok(Self)
    }
}

impl Drop for MouseCaptureGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(provider: Arc<dyn TemplateProvider>) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = MouseCaptureGuard::new().and_then(|_guard| event_loop(&mut terminal, provider));
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    provider: Arc<dyn TemplateProvider>,
) -> std::io::Result<()> {
    let mut app = App::new(provider);
    let mut tui = TuiState::new();

    // Channel for actions from the load task
    let (tx, rx) = mpsc::channel();

    if update(&mut app, Action::Mount) == Effect::SpawnLoad {
        spawn_load(&app, tx.clone());
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let loading = app.load_state == LoadState::Pending;
        if loading {
            needs_redraw = true;
        }

        if needs_redraw {
            tui.spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &tui))?;
            needs_redraw = false;
        }

        let timeout = if loading {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Earlier load results first, so the event sees the data
            if apply_posted(&mut app, &rx) {
                needs_redraw = true;
            }

            let action = match event {
                TuiEvent::Resize => continue,
                TuiEvent::MouseMove(col, row) => {
                    let frame_area = terminal.get_frame().area();
                    tui.hovered_slot = match ui::hit_test_strip(col, row, frame_area) {
                        Some(StripHit::Thumbnail(slot)) if slot < app.visible_window().len() => {
                            Some(slot)
                        }
                        _ => None,
                    };
                    continue;
                }
                TuiEvent::MouseClick(col, row) => {
                    let frame_area = terminal.get_frame().area();
                    match ui::hit_test_strip(col, row, frame_area) {
                        Some(StripHit::Previous) => Action::Previous,
                        Some(StripHit::Next) => Action::Next,
                        Some(StripHit::Thumbnail(slot)) => Action::SelectThumbnail(slot),
                        None => continue,
                    }
                }
                TuiEvent::Next => Action::Next,
                TuiEvent::Previous => Action::Previous,
                TuiEvent::Select(slot) => Action::SelectThumbnail(slot),
                TuiEvent::Quit => Action::Quit,
            };

            debug!("User action: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Apply the load result, if it arrived with no input after it
        if apply_posted(&mut app, &rx) {
            needs_redraw = true;
        }
    }

    info!("Viewer exiting");
    Ok(())
}

/// Apply every action the load task has posted so far, in posting order.
/// Returns whether anything was applied.
fn apply_posted(app: &mut App, rx: &mpsc::Receiver<Action>) -> bool {
    let mut applied = false;
    while let Ok(action) = rx.try_recv() {
        debug!("Event loop received: {}", describe(&action));
        update(app, action);
        applied = true;
    }
    applied
}

/// Fetch the collection and turn the outcome into the action that applies it.
pub async fn load_templates(provider: &dyn TemplateProvider) -> Action {
    match provider.get_templates().await {
        Ok(templates) => Action::TemplatesLoaded(templates),
        Err(e) => Action::LoadFailed(e.to_string()),
    }
}

fn spawn_load(app: &App, tx: mpsc::Sender<Action>) {
    let provider = app.provider.clone();
    info!("Spawning template load ({})", provider.name());

    tokio::spawn(async move {
        let action = load_templates(provider.as_ref()).await;
        if tx.send(action).is_err() {
            warn!("Failed to deliver template load result: receiver dropped");
        }
    });
}

/// Short log form; avoids dumping the whole collection.
fn describe(action: &Action) -> String {
    match action {
        Action::TemplatesLoaded(templates) => format!("TemplatesLoaded({} records)", templates.len()),
        other => format!("{other:?}"),
    }
}
