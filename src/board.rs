use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step in grid coordinates; y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// One step in `direction`, without wrapping.
    pub fn step(&self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Top-left corner of this cell in pixels.
    pub fn pixel_origin(&self, cell_size: u32) -> (i32, i32) {
        let size = cell_size as i32;
        (self.x * size, self.y * size)
    }
}

/// Fixed-size toroidal grid. Holds no cells itself, only the geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
}

impl Board {
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "board must have at least one cell");
        Board { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width as i32 / 2, self.height as i32 / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width as i32).contains(&cell.x) && (0..self.height as i32).contains(&cell.y)
    }

    /// Brings a cell that stepped off one edge back in from the opposite edge.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell {
            x: cell.x.rem_euclid(self.width as i32),
            y: cell.y.rem_euclid(self.height as i32),
        }
    }

    pub fn random_cell(&self, rng: &mut impl Rng) -> Cell {
        Cell {
            x: rng.gen_range(0..self.width as i32),
            y: rng.gen_range(0..self.height as i32),
        }
    }
}
