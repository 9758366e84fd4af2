use crate::board::{Board, Cell};
use crate::config::Palette;
use crate::game::Scene;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Terminal columns per grid cell, so cells come out roughly square.
pub const COLUMNS_PER_CELL: u16 = 2;

/// Draws the playfield: every grid cell as a two-column square on the
/// background, snake and food as bordered coloured squares.
pub struct BoardView<'a> {
    scene: &'a Scene,
    board: Board,
    palette: Palette,
}

impl<'a> BoardView<'a> {
    pub fn new(scene: &'a Scene, board: Board, palette: Palette) -> Self {
        BoardView {
            scene,
            board,
            palette,
        }
    }

    /// Terminal area needed to show the whole board.
    pub fn size(board: &Board) -> (u16, u16) {
        (board.width() * COLUMNS_PER_CELL, board.height())
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = Self::size(&self.board);
        let field = area.intersection(Rect::new(area.x, area.y, width, height));

        for y in field.top()..field.bottom() {
            for x in field.left()..field.right() {
                buf[(x, y)].set_symbol(" ").set_bg(self.palette.background);
            }
        }

        for cell in &self.scene.body {
            paint_square(buf, field, *cell, self.palette.snake, self.palette.border);
        }
        paint_square(buf, field, self.scene.food, self.palette.food, self.palette.border);
    }
}

fn paint_square(buf: &mut Buffer, field: Rect, cell: Cell, fill: Color, border: Color) {
    if cell.x < 0 || cell.y < 0 {
        return;
    }
    let left = field.x + cell.x as u16 * COLUMNS_PER_CELL;
    let y = field.y + cell.y as u16;

    for (offset, symbol) in ["[", "]"].into_iter().enumerate() {
        let x = left + offset as u16;
        if field.contains(Position::new(x, y)) {
            buf[(x, y)].set_symbol(symbol).set_fg(border).set_bg(fill);
        }
    }
}

/// Lays out the title bar and the playfield for one frame.
pub fn draw(frame: &mut Frame, scene: &Scene, board: Board, palette: Palette) {
    let (width, height) = BoardView::size(&board);
    let layout = Layout::default()
        .direction(layout::Direction::Vertical)
        .constraints([
            Constraint::Length(3),          // Title + length
            Constraint::Length(height + 2), // Board plus frame
            Constraint::Min(0),
        ])
        .split(frame.area());

    let title = format!(
        "SNAKE    Length: {}    Arrows/WASD to steer, q to quit",
        scene.body.len()
    );
    frame.render_widget(
        Paragraph::new(title)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL)),
        layout[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let outer = Rect {
        width: (width + 2).min(layout[1].width),
        ..layout[1]
    };
    let inner = block.inner(outer);
    frame.render_widget(block, outer);
    frame.render_widget(BoardView::new(scene, board, palette), inner);
}
