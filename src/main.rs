use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{error, info};
use ratatui::prelude::*;
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::time::Instant;
use torus_snake::config::GameConfig;
use torus_snake::game::Game;
use torus_snake::input::{self, Command};
use torus_snake::ui;

fn main() -> Result<(), io::Error> {
    let config = GameConfig::default();

    // Log to a file, the terminal belongs to the game
    WriteLogger::init(
        config.log_level,
        Config::default(),
        File::create(&config.log_file)?,
    )
    .map_err(io::Error::other)?;

    info!("Starting snake with {:?}", config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);
    if let Err(e) = &result {
        error!("Game loop failed: {}", e);
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Runs ticks at the configured rate until the player quits. Input is read
/// while waiting for the next tick; only the last turn before a tick counts.
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &GameConfig) -> io::Result<()> {
    let mut game = Game::new(config);
    let board = *game.board();
    let tick_rate = config.tick_rate();
    let mut last_tick = Instant::now();

    terminal.draw(|f| ui::draw(f, &game.scene(), board, config.palette))?;

    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match input::command_for(key) {
                    Some(Command::Quit) => {
                        info!(
                            "Quit after {} ticks, snake length {}",
                            game.ticks(),
                            game.snake().len()
                        );
                        return Ok(());
                    }
                    Some(Command::Turn(direction)) => game.steer(direction),
                    None => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            game.tick();
            last_tick = Instant::now();
            terminal.draw(|f| ui::draw(f, &game.scene(), board, config.palette))?;
        }
    }
}
