use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Difficulty, GameConfig, GameEngine};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;
use crate::store::HighScoreStore;

/// Interactive play: a tokio select loop over the tick timer, the render
/// timer, and the keyboard. The engine is timer-free; this is the only place
/// that decides when a tick happens.
pub struct HumanMode {
    engine: GameEngine,
    difficulty: Difficulty,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    show_help: bool,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, difficulty: Difficulty, store: Box<dyn HighScoreStore>) -> Self {
        let renderer = Renderer::new(config.foods_per_big);
        let engine = GameEngine::new(config, store);

        Self {
            engine,
            difficulty,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
            show_help: false,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal; the loop is gone, nothing mutates the engine past here
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Tick cadence comes from the difficulty preset
        let mut tick_timer = interval(self.difficulty.tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick; the help overlay freezes the simulation
                _ = tick_timer.tick() => {
                    if !self.show_help {
                        self.engine.tick();
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics, self.show_help);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
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

            match self.input_handler.handle_key_event(key) {
                KeyAction::Turn(direction) => {
                    if !self.show_help {
                        self.engine.set_direction(direction);
                    }
                }
                KeyAction::TogglePause => {
                    if !self.show_help {
                        self.engine.toggle_pause();
                    }
                }
                KeyAction::ShowHelp => {
                    self.show_help = true;
                }
                KeyAction::DismissOverlay => {
                    self.show_help = false;
                }
                KeyAction::Restart => {
                    self.restart_game();
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn restart_game(&mut self) {
        self.engine.reset();
        self.metrics.on_game_start();
        self.show_help = false;
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mode() -> HumanMode {
        HumanMode::new(
            GameConfig::default(),
            Difficulty::Medium,
            Box::new(MemoryStore::default()),
        )
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert!(!mode.engine.state().is_game_over());
        assert_eq!(mode.engine.state().score, 0);
        assert!(!mode.show_help);
    }

    #[test]
    fn test_restart_resets_engine() {
        let mut mode = mode();
        mode.show_help = true;

        mode.handle_event(key(KeyCode::Char('r')));

        assert_eq!(mode.engine.state().score, 0);
        assert!(!mode.engine.state().is_game_over());
        assert!(!mode.show_help);
        assert_eq!(mode.metrics.games_played, 2);
    }

    #[test]
    fn test_escape_only_dismisses_overlay() {
        let mut mode = mode();
        mode.show_help = true;
        let state_before = mode.engine.state().clone();

        mode.handle_event(key(KeyCode::Esc));

        assert!(!mode.show_help);
        assert_eq!(*mode.engine.state(), state_before);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_help_blocks_direction_changes() {
        let mut mode = mode();
        mode.show_help = true;
        let heading = mode.engine.state().snake.direction;

        mode.handle_event(key(KeyCode::Up));
        assert_eq!(mode.engine.state().snake.direction, heading);

        mode.handle_event(key(KeyCode::Esc));
        mode.handle_event(key(KeyCode::Up));
        assert_ne!(mode.engine.state().snake.direction, heading);
    }

    #[test]
    fn test_space_toggles_pause() {
        let mut mode = mode();

        mode.handle_event(key(KeyCode::Char(' ')));
        assert!(mode.engine.state().is_paused());

        mode.handle_event(key(KeyCode::Char(' ')));
        assert!(!mode.engine.state().is_paused());
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
