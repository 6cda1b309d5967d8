use std::io;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use genwatch_core::{update, AppState, Msg};
use genwatch_engine::ClientSettings;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use watch_logging::{set_poll_tick, watch_info};

use crate::effects::EffectRunner;
use crate::ui;

/// UI refresh cadence; status polling has its own 2 s timer in the engine.
const TICK_RATE: Duration = Duration::from_millis(100);

pub fn run_app(base_url: String) -> anyhow::Result<()> {
    watch_info!("genwatch starting against {}", base_url);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(ClientSettings::new(base_url), msg_tx);

    let mut terminal = setup_terminal().context("terminal setup")?;
    let result = event_loop(&mut terminal, &runner, &msg_rx);
    teardown_terminal(&mut terminal).context("terminal teardown")?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runner: &EffectRunner,
    msg_rx: &mpsc::Receiver<Msg>,
) -> anyhow::Result<()> {
    let mut state = AppState::new();
    let mut tick: u64 = 0;

    // Baseline render before any input, same reset the browser did on load.
    terminal.draw(|frame| ui::render(frame, &state.view(), tick))?;

    loop {
        tick += 1;
        set_poll_tick(tick);

        let mut inbox: Vec<Msg> = msg_rx.try_iter().collect();
        let mut force_redraw = false;

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Esc
                        || (key.code == KeyCode::Char('c')
                            && key.modifiers.contains(KeyModifiers::CONTROL))
                    {
                        watch_info!("quit requested");
                        return Ok(());
                    }
                    match key.code {
                        KeyCode::Enter => {
                            // Mirrors the disabled submit button: Enter is
                            // ignored while a run is in flight.
                            if state.view().submit_enabled {
                                inbox.push(Msg::IdeaSubmitted);
                            }
                        }
                        KeyCode::Backspace => {
                            let mut text = state.view().idea_input;
                            text.pop();
                            inbox.push(Msg::IdeaEdited(text));
                        }
                        KeyCode::Char(c) => {
                            let mut text = state.view().idea_input;
                            text.push(c);
                            inbox.push(Msg::IdeaEdited(text));
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => force_redraw = true,
                _ => {}
            }
        }

        for msg in inbox {
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.enqueue(effects);
        }

        let spinner_active = state.view().spinner_visible;
        if state.consume_dirty() || force_redraw || spinner_active {
            terminal.draw(|frame| ui::render(frame, &state.view(), tick))?;
        }
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
