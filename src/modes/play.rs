use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stdout, stdout};
use tokio::time::{MissedTickBehavior, interval, sleep};

use crate::game::{Action, GameConfig, GameEngine, Phase};
use crate::input::InputHandler;
use crate::render::TerminalSurface;

type CrosstermSurface = TerminalSurface<CrosstermBackend<Stdout>>;

/// Interactive session in the terminal
pub struct PlayMode {
    engine: GameEngine,
    input_handler: InputHandler,
    /// Actions received since the last frame, in arrival order
    pending_actions: Vec<Action>,
}

impl PlayMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(config),
            input_handler: InputHandler::new(),
            pending_actions: Vec::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let config = self.engine.config();
        info!(
            "starting {}x{} board at {} ticks/s",
            config.bounds.width, config.bounds.height, config.ticks_per_second
        );
        self.check_terminal_size();

        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let mut surface = TerminalSurface::new(terminal, self.engine.config().bounds);

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut surface).await;

        // Cleanup terminal
        self.cleanup_terminal(surface.terminal_mut())?;

        result
    }

    async fn run_game_loop(&mut self, surface: &mut CrosstermSurface) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut input_open = true;

        let mut frame_timer = interval(self.engine.config().frame_period());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Queue terminal events for the next frame
                maybe_event = event_stream.next(), if input_open => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => {
                            warn!("terminal input closed, quitting");
                            input_open = false;
                            self.pending_actions.push(Action::Quit);
                        }
                    }
                }

                // One frame per tick
                _ = frame_timer.tick() => {
                    let actions = std::mem::take(&mut self.pending_actions);
                    match self.engine.frame(&actions, surface)? {
                        Phase::Running => {}
                        Phase::GameOver => {
                            sleep(self.engine.config().game_over_hold()).await;
                            break;
                        }
                        Phase::Quit => break,
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(action) = self.input_handler.handle_key_event(key) {
                self.pending_actions.push(action);
            }
        }
    }

    fn check_terminal_size(&self) {
        // Two grid rows per terminal row, plus the border
        let bounds = self.engine.config().bounds;
        let needed_columns = bounds.columns() as u16 + 2;
        let needed_rows = (bounds.rows() as u16).div_ceil(2) + 2;

        match terminal::size() {
            Ok((columns, rows)) if columns < needed_columns || rows < needed_rows => warn!(
                "terminal is {columns}x{rows}, board needs {needed_columns}x{needed_rows}; it will be clipped"
            ),
            Ok(_) => {}
            Err(err) => warn!("could not read terminal size: {err}"),
        }
    }

    fn cleanup_terminal(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
