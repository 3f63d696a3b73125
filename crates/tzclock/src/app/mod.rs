//! The interactive clock/picker view.
//!
//! Single-threaded and cooperative: a current-thread tokio runtime drives
//! one `select!` loop over the ticker channel and the crossterm event
//! stream. All state lives in the [`store::ClockStore`]; redraws happen
//! exactly when an action reports a change.

mod picker;
mod store;
mod ticker;
mod view;

use std::io;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::terminal;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use futures_util::StreamExt;
use tokio::sync::mpsc;
use tracing::debug;
use tracing::info;
use tracing::warn;

use tzclock_core::Clock;
use tzclock_core::IanaDatabase;
use tzclock_core::OffsetGroups;
use tzclock_core::SystemClock;
use tzclock_core::TzDatabase;
use tzclock_core::TzError;
use tzclock_core::ZoneId;

use crate::commands::PickerStyle;
use crate::error::AppError;

use picker::Picker;
use store::Action;
use store::ClockStore;
use ticker::Ticker;

const TICK_PERIOD: Duration = Duration::from_secs(1);
const PAGE: usize = 10;

/// Runs the interactive view against the real database and system clock.
pub fn run(initial_zone: Option<String>, style: PickerStyle) -> Result<(), AppError> {
    let db = IanaDatabase::new();
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    run_with(&db, clock, initial_zone, style)
}

fn run_with(
    db: &dyn TzDatabase,
    clock: Arc<dyn Clock>,
    initial_zone: Option<String>,
    style: PickerStyle,
) -> Result<(), AppError> {
    // The grouping is computed once at startup; the reference instant for
    // offsets is "now", not each tick.
    let groups = OffsetGroups::compute(db, clock.now());
    info!(
        zones = groups.zone_count(),
        offsets = groups.len(),
        "computed offset grouping"
    );
    if groups.is_empty() {
        warn!("timezone database is empty; the picker has nothing to offer");
    }

    let initial = resolve_initial(db, initial_zone, &groups)?;
    info!(zone = %initial, "starting clock");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let _guard = TerminalGuard::enter()?;
    runtime.block_on(event_loop(db, clock, &groups, initial, style))
}

/// Picks the starting timezone. An explicitly requested zone must exist in
/// the grouping; the host default is trusted by database contract.
fn resolve_initial(
    db: &dyn TzDatabase,
    requested: Option<String>,
    groups: &OffsetGroups,
) -> Result<ZoneId, TzError> {
    match requested {
        Some(id) => {
            let zone = ZoneId::new(id);
            if groups.contains(&zone) {
                Ok(zone)
            } else {
                Err(TzError::UnknownZone(zone))
            }
        }
        None => Ok(db.system_default()),
    }
}

/// RAII guard for raw mode and the alternate screen; restores both on every
/// exit path, error or not.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

async fn event_loop(
    db: &dyn TzDatabase,
    clock: Arc<dyn Clock>,
    groups: &OffsetGroups,
    initial: ZoneId,
    style: PickerStyle,
) -> Result<(), AppError> {
    let mut store = ClockStore::new(initial);
    let mut picker = Picker::new(groups, store.selected());

    let (tick_tx, mut tick_rx) = mpsc::channel(8);
    let _ticker = Ticker::spawn(TICK_PERIOD, clock, tick_tx);
    let mut events = EventStream::new();
    let mut stdout = io::stdout();

    // First frame goes out before the first tick: blank clock label.
    draw_frame(&mut stdout, db, &store, &picker, groups, style)?;

    loop {
        tokio::select! {
            tick = tick_rx.recv() => {
                let Some(now) = tick else { break };
                if store.apply(Action::Tick(now)) {
                    draw_frame(&mut stdout, db, &store, &picker, groups, style)?;
                }
            }
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if is_quit(&key) {
                            debug!("quit requested");
                            break;
                        }
                        if handle_key(&key, &mut store, &mut picker) {
                            draw_frame(&mut stdout, db, &store, &picker, groups, style)?;
                        }
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        draw_frame(&mut stdout, db, &store, &picker, groups, style)?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) => return Err(AppError::EventRead),
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}

/// Applies a key to the picker/store; returns whether a redraw is due.
fn handle_key(key: &KeyEvent, store: &mut ClockStore, picker: &mut Picker) -> bool {
    match key.code {
        KeyCode::Up => {
            picker.move_up();
            true
        }
        KeyCode::Down => {
            picker.move_down();
            true
        }
        KeyCode::PageUp => {
            picker.page_up(PAGE);
            true
        }
        KeyCode::PageDown => {
            picker.page_down(PAGE);
            true
        }
        KeyCode::Home => {
            picker.jump_first();
            true
        }
        KeyCode::End => {
            picker.jump_last();
            true
        }
        KeyCode::Enter => match picker.zone_under_cursor() {
            Some(zone) => {
                let zone = zone.clone();
                if store.apply(Action::Select(zone)) {
                    debug!(zone = %store.selected(), "timezone selected");
                }
                true
            }
            None => false,
        },
        _ => false,
    }
}

fn draw_frame(
    out: &mut impl Write,
    db: &dyn TzDatabase,
    store: &ClockStore,
    picker: &Picker,
    groups: &OffsetGroups,
    style: PickerStyle,
) -> Result<(), AppError> {
    // With an empty database there is nothing to format; the label stays
    // blank forever and the picker renders empty.
    let label = if groups.is_empty() {
        String::new()
    } else {
        store.clock_label(db)?
    };
    let (_cols, rows) = terminal::size()?;
    let lines = view::render(&label, picker, store.selected(), style, rows as usize);
    view::draw(out, &lines)?;
    Ok(())
}
