use crate::board::{Board, Cell, Direction};
use crate::config::GameConfig;
use crate::food::Food;
use crate::snake::Snake;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// What changed during one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickOutcome {
    pub head: Cell,
    /// Cell the tail left, if the snake did not grow.
    pub vacated: Option<Cell>,
    /// The snake hit itself and was sent back home.
    pub reset: bool,
    pub ate: bool,
}

/// Snapshot handed to the renderer after each tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub head: Cell,
    pub vacated: Option<Cell>,
    pub body: Vec<Cell>,
    pub food: Cell,
    pub cell_size: u32,
    /// Set when the whole board has to be repainted.
    pub reset: bool,
}

/// One game session: the board, the snake, the food and the session's
/// random source.
pub struct Game {
    board: Board,
    snake: Snake,
    food: Food,
    cell_size: u32,
    rng: StdRng,
    ticks: u64,
    last_outcome: Option<TickOutcome>,
}

impl Game {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let board = config.board();
        let snake = Snake::new(board.center(), Direction::Right);
        let food = Food::spawn(&board, snake.body(), &mut rng);

        info!(
            "New game on a {}x{} board, snake at {:?}, food at {:?}",
            board.width(),
            board.height(),
            snake.head(),
            food.position()
        );

        Game {
            board,
            snake,
            food,
            cell_size: config.cell_size,
            rng,
            ticks: 0,
            last_outcome: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Buffers a turn for the next tick.
    pub fn steer(&mut self, direction: Direction) {
        self.snake.set_pending_direction(direction);
    }

    /// Puts the food on a chosen cell instead of a random one.
    pub fn place_food(&mut self, cell: Cell) {
        self.food = Food::at(self.board.wrap(cell));
    }

    /// Runs one step of the simulation. The order of the steps matters:
    /// the head is wrapped before anything is compared against it, and food
    /// is checked after a possible reset.
    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;

        self.snake.commit_direction();
        let vacated = self.snake.advance();
        self.snake.wrap_head(&self.board);

        let reset = self.snake.check_self_collision();
        if reset {
            info!(
                "Snake of length {} ran into itself at {:?}, starting over at {:?}",
                self.snake.len() - 1,
                self.snake.head(),
                self.snake.home()
            );
            self.snake.reset();
        }

        let ate = self.snake.consumes_food(&self.food);
        if ate {
            self.snake.grow();
            self.food.relocate(&self.board, self.snake.body(), &mut self.rng);
            info!(
                "Food eaten at {:?}, snake will grow to {}",
                self.snake.head(),
                self.snake.len() + 1
            );
        }

        let outcome = TickOutcome {
            head: self.snake.head(),
            vacated,
            reset,
            ate,
        };
        debug!("Tick {}: {:?}", self.ticks, outcome);
        self.last_outcome = Some(outcome);
        outcome
    }

    pub fn scene(&self) -> Scene {
        let (vacated, reset) = match self.last_outcome {
            Some(outcome) => (outcome.vacated, outcome.reset),
            // Nothing drawn yet, so paint everything
            None => (None, true),
        };

        Scene {
            head: self.snake.head(),
            vacated,
            body: self.snake.body().iter().copied().collect(),
            food: self.food.position(),
            cell_size: self.cell_size,
            reset,
        }
    }
}
