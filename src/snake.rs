use crate::board::{Board, Cell, Direction};
use crate::food::Food;
use std::collections::VecDeque;

/// The player's snake. `body[0]` is the head, the back of the deque is the tail.
#[derive(Clone, Debug)]
pub struct Snake {
    home: Cell,
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    growth_pending: bool,
}

impl Snake {
    pub fn new(home: Cell, direction: Direction) -> Self {
        Snake {
            home,
            body: VecDeque::from([home]),
            direction,
            pending_direction: None,
            growth_pending: false,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_body(
        home: Cell,
        direction: Direction,
        body: impl IntoIterator<Item = Cell>,
    ) -> Self {
        let body: VecDeque<Cell> = body.into_iter().collect();
        assert!(!body.is_empty(), "snake needs at least a head");
        Snake {
            body,
            ..Snake::new(home, direction)
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn home(&self) -> Cell {
        self.home
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn growth_pending(&self) -> bool {
        self.growth_pending
    }

    /// Buffers a turn for the next tick. Reversing into the neck is ignored,
    /// and a later turn in the same tick replaces an earlier one.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if direction != self.direction.opposite() {
            self.pending_direction = Some(direction);
        }
    }

    pub fn commit_direction(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }
    }

    /// Pushes a new head one step ahead and drops the tail unless growing.
    /// Returns the vacated tail cell, or `None` when the snake grew.
    ///
    /// The new head is not wrapped; call [`Snake::wrap_head`] next.
    pub fn advance(&mut self) -> Option<Cell> {
        let new_head = self.head().step(self.direction);
        self.body.push_front(new_head);

        if self.growth_pending {
            self.growth_pending = false;
            None
        } else {
            self.body.pop_back()
        }
    }

    pub fn wrap_head(&mut self, board: &Board) {
        self.body[0] = board.wrap(self.body[0]);
    }

    pub fn check_self_collision(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|cell| *cell == head)
    }

    /// Shrinks back to the single home cell. Direction, pending direction
    /// and growth are left as they were, so the snake carries on with its
    /// last heading.
    pub fn reset(&mut self) {
        self.body.clear();
        self.body.push_back(self.home);
    }

    pub fn consumes_food(&self, food: &Food) -> bool {
        self.head() == food.position()
    }

    pub fn grow(&mut self) {
        self.growth_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DIRECTIONS: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn snake_with_body(cells: &[(i32, i32)], direction: Direction) -> Snake {
        Snake::with_body(
            Cell::new(16, 12),
            direction,
            cells.iter().map(|&(x, y)| Cell::new(x, y)),
        )
    }

    #[test]
    fn test_new_snake() {
        let snake = Snake::new(Cell::new(16, 12), Direction::Right);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(16, 12));
        assert_eq!(snake.tail(), Cell::new(16, 12));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.pending_direction(), None);
        assert!(!snake.growth_pending());
    }

    #[test]
    fn test_opposite_direction_is_ignored() {
        for dir in ALL_DIRECTIONS {
            let mut snake = Snake::new(Cell::new(5, 5), dir);
            snake.set_pending_direction(dir.opposite());
            assert_eq!(snake.pending_direction(), None);

            snake.commit_direction();
            assert_eq!(snake.direction(), dir, "reversing {:?} must be a no-op", dir);
        }
    }

    #[test]
    fn test_opposite_does_not_clear_earlier_turn() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Left);
        assert_eq!(snake.pending_direction(), Some(Direction::Up));
    }

    #[test]
    fn test_last_turn_wins() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        snake.commit_direction();
        assert_eq!(snake.direction(), Direction::Down);
        assert_eq!(snake.pending_direction(), None);
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.set_pending_direction(Direction::Up);
        snake.commit_direction();
        snake.commit_direction();
        assert_eq!(snake.direction(), Direction::Up);
        assert_eq!(snake.pending_direction(), None);
    }

    #[test]
    fn test_opposite_checked_against_committed_direction() {
        // Pending Up does not make Down illegal before it is committed
        let mut snake = Snake::new(Cell::new(5, 5), Direction::Right);
        snake.set_pending_direction(Direction::Up);
        snake.set_pending_direction(Direction::Down);
        assert_eq!(snake.pending_direction(), Some(Direction::Down));
    }

    #[test]
    fn test_advance_without_growth() {
        let mut snake = snake_with_body(&[(5, 5), (4, 5), (3, 5)], Direction::Right);

        let vacated = snake.advance();

        assert_eq!(vacated, Some(Cell::new(3, 5)));
        assert_eq!(snake.len(), 3, "length unchanged");
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Cell::new(6, 5), Cell::new(5, 5), Cell::new(4, 5)]
        );
    }

    #[test]
    fn test_advance_with_growth() {
        let mut snake = snake_with_body(&[(5, 5), (4, 5)], Direction::Down);
        snake.grow();

        let vacated = snake.advance();

        assert_eq!(vacated, None);
        assert_eq!(snake.len(), 3, "grew by exactly one");
        assert!(!snake.growth_pending(), "growth flag cleared");
        assert_eq!(snake.head(), Cell::new(5, 6));
        assert_eq!(snake.tail(), Cell::new(4, 5));

        // Only one segment per grow
        snake.advance();
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_advance_is_unwrapped_until_wrap_head() {
        let board = Board::new(32, 24);
        let mut snake = Snake::new(Cell::new(31, 4), Direction::Right);

        snake.advance();
        assert_eq!(snake.head(), Cell::new(32, 4));

        snake.wrap_head(&board);
        assert_eq!(snake.head(), Cell::new(0, 4));
    }

    #[test]
    fn test_wrap_head_touches_only_head() {
        let board = Board::new(10, 10);
        let mut snake = snake_with_body(&[(5, -1), (5, 0), (5, 1)], Direction::Up);
        snake.wrap_head(&board);
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Cell::new(5, 9), Cell::new(5, 0), Cell::new(5, 1)]
        );
    }

    #[test]
    fn test_self_collision() {
        let snake = snake_with_body(&[(5, 5), (6, 5), (5, 5)], Direction::Left);
        assert!(snake.check_self_collision());

        let snake = snake_with_body(&[(5, 5), (6, 5), (6, 6), (5, 6)], Direction::Up);
        assert!(!snake.check_self_collision());

        let snake = Snake::new(Cell::new(1, 1), Direction::Up);
        assert!(!snake.check_self_collision());
    }

    #[test]
    fn test_reset_keeps_heading() {
        let mut snake = snake_with_body(&[(5, 5), (6, 5), (5, 5)], Direction::Left);
        snake.set_pending_direction(Direction::Up);
        snake.grow();

        snake.reset();

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(16, 12));
        assert_eq!(snake.direction(), Direction::Left);
        assert_eq!(snake.pending_direction(), Some(Direction::Up));
        assert!(snake.growth_pending());
    }

    #[test]
    fn test_consumes_food() {
        let snake = snake_with_body(&[(3, 3), (2, 3)], Direction::Right);
        assert!(snake.consumes_food(&Food::at(Cell::new(3, 3))));
        // Only the head eats
        assert!(!snake.consumes_food(&Food::at(Cell::new(2, 3))));
        assert!(!snake.consumes_food(&Food::at(Cell::new(9, 9))));
    }

    #[test]
    fn test_moving_into_vacated_tail_is_not_a_collision() {
        // A 2x2 loop: the head steps onto the cell the tail leaves this tick
        let board = Board::new(10, 10);
        let mut snake = snake_with_body(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Right);

        snake.advance();
        snake.wrap_head(&board);

        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(!snake.check_self_collision());
    }

    #[test]
    fn test_growing_into_own_tail_collides() {
        let board = Board::new(10, 10);
        let mut snake = snake_with_body(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::Right);
        snake.grow();

        snake.advance();
        snake.wrap_head(&board);

        assert!(snake.check_self_collision());
    }
}
