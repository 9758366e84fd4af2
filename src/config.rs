use crate::board::Board;
use ratatui::style::Color;
use simplelog::LevelFilter;
use std::time::Duration;

pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;
pub const CELL_SIZE: u32 = 20;
pub const TICKS_PER_SECOND: u32 = 10;

pub const BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);
pub const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);
pub const FOOD_COLOR: Color = Color::Rgb(255, 0, 0);
pub const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

const LOG_FILE: &str = "snake.log";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    pub food: Color,
    pub snake: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: BACKGROUND_COLOR,
            border: BORDER_COLOR,
            food: FOOD_COLOR,
            snake: SNAKE_COLOR,
        }
    }
}

/// Everything the game loop and the front end need to know up front.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Grid width in cells
    pub grid_width: u16,
    /// Grid height in cells
    pub grid_height: u16,
    /// Edge length of one cell in pixels
    pub cell_size: u32,
    pub ticks_per_second: u32,
    pub log_file: String,
    pub log_level: LevelFilter,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            grid_width: (SCREEN_WIDTH / CELL_SIZE) as u16,
            grid_height: (SCREEN_HEIGHT / CELL_SIZE) as u16,
            cell_size: CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            log_file: LOG_FILE.to_string(),
            log_level: LevelFilter::Info,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    pub fn board(&self) -> Board {
        Board::new(self.grid_width, self.grid_height)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_secs(1) / self.ticks_per_second.max(1)
    }

    /// Playfield size in pixels.
    pub fn screen_size(&self) -> (u32, u32) {
        (
            self.grid_width as u32 * self.cell_size,
            self.grid_height as u32 * self.cell_size,
        )
    }
}
