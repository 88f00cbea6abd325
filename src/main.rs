mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc::{self, TryRecvError};
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use display::TerminalCanvas;
use triangle_shooter::compute::{apply_input, init_state, tick};
use triangle_shooter::config::Config;
use triangle_shooter::input::{intent_for_event, InputIntent};
use triangle_shooter::render::render;

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS, one display refresh

const LOG_FILE: &str = "triangle_shooter.log";

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode for the whole run, so logs go to a file and
/// only when `RUST_LOG` asks for them.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("cannot open log file {}: {err}", path.display());
            return;
        }
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Esc, Q and Ctrl-C close the game; they are not gameplay input.
fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            modifiers,
            ..
        }) => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => true,
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        },
        _ => false,
    }
}

/// Take everything the reader thread has queued without blocking.
///
/// Events already queued are still handed back after the reader exits, so a
/// final quit key isn't lost; the next call then fails.
fn drain_events(rx: &mpsc::Receiver<Event>) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Empty) => return Ok(events),
            Err(TryRecvError::Disconnected) if events.is_empty() => {
                bail!("input reader disconnected")
            }
            Err(TryRecvError::Disconnected) => return Ok(events),
        }
    }
}

/// Runs until a quit key arrives, or fails once input is gone.
///
/// Each frame: drain pending events into intents and apply them in arrival
/// order, advance the simulation, render, then sleep out the rest of the
/// frame budget.
fn game_loop<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>, config: Config) -> Result<()> {
    let mut rng = thread_rng();
    let (cols, rows) = terminal::size()?;
    let mut canvas = TerminalCanvas::new(config.canvas_width, config.canvas_height, cols, rows);
    let mut state = init_state(config);

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        for event in drain_events(rx)? {
            if is_quit(&event) {
                tracing::info!(score = state.score, frame = state.frame, "quit requested");
                return Ok(());
            }
            if let Event::Resize(cols, rows) = event {
                tracing::debug!(cols, rows, "terminal resized");
                canvas.resize(cols, rows);
                continue;
            }
            let intent = intent_for_event(&event);
            if intent != InputIntent::None {
                state = apply_input(&state, intent);
            }
        }

        let next = tick(&state, &mut rng);
        if next.is_over() && !state.is_over() {
            tracing::info!(score = next.score, frame = next.frame, "game over");
        }
        state = next;

        render(&mut canvas, &state);
        canvas.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    // Bad config is reported before the terminal switches to raw mode
    let config = Config::from_env()?;
    tracing::info!(?config, "starting");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for key-release events so held keys are reported as press/repeat/release.
    // Terminals without the kitty protocol reject this and keep sending presses only.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                tracing::warn!(%err, "input reader stopped");
                break;
            }
        }
    });

    let result = game_loop(&mut out, &rx, config);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn drain_returns_queued_events_in_order() {
        let (tx, rx) = mpsc::channel();
        tx.send(key('a')).unwrap();
        tx.send(key('b')).unwrap();
        assert_eq!(drain_events(&rx).unwrap(), vec![key('a'), key('b')]);
        assert!(drain_events(&rx).unwrap().is_empty());
    }

    #[test]
    fn drain_fails_once_reader_is_gone() {
        let (tx, rx) = mpsc::channel::<Event>();
        drop(tx);
        let err = drain_events(&rx).unwrap_err();
        assert!(err.to_string().contains("disconnected"));
    }

    #[test]
    fn drain_hands_back_last_events_before_failing() {
        let (tx, rx) = mpsc::channel();
        tx.send(key('q')).unwrap();
        drop(tx);
        assert_eq!(drain_events(&rx).unwrap(), vec![key('q')]);
        assert!(drain_events(&rx).is_err());
    }
}
