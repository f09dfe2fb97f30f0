//! Board rendering for the Othello GUI

use crate::{Board, Pos, Tile, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::Bitboard;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if it is a legal move
    ///
    /// `legal_moves` is empty whenever input should be ignored (engine's
    /// turn, game over).
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Tile,
        legal_moves: Bitboard,
        last_move: Option<Pos>,
        suggested_move: Option<Pos>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(board_size, board_size),
            Sense::click(),
        );

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::same(0), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_discs(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos, board.get(pos));
        }

        for pos in legal_moves.iter_ones() {
            self.draw_legal_marker(&painter, pos);
        }

        if let Some(pos) = suggested_move {
            self.draw_suggestion(&painter, pos);
        }

        let mut clicked_pos = None;

        if !legal_moves.is_empty() {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    let is_legal = legal_moves.get(board_pos);
                    if board.is_empty(board_pos) {
                        self.draw_hover_preview(&painter, board_pos, current_turn, is_legal);
                    }

                    if response.clicked() && is_legal {
                        clicked_pos = Some(board_pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn play_area(&self) -> Rect {
        let side = self.cell_size * BOARD_SIZE as f32;
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(side),
        )
    }

    /// Draw the 8x8 cell grid
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            painter.line_segment(
                [
                    Pos2::new(area.min.x + offset, area.min.y),
                    Pos2::new(area.min.x + offset, area.max.y),
                ],
                stroke,
            );
            painter.line_segment(
                [
                    Pos2::new(area.min.x, area.min.y + offset),
                    Pos2::new(area.max.x, area.min.y + offset),
                ],
                stroke,
            );
        }
    }

    /// Dots on the grid intersections (row, col) at the top-left of each cell
    fn draw_star_points(&self, painter: &Painter) {
        let area = self.play_area();
        for (row, col) in STAR_POINTS {
            let center = Pos2::new(
                area.min.x + col as f32 * self.cell_size,
                area.min.y + row as f32 * self.cell_size,
            );
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-H, 1-8)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let letter = (b'A' + i as u8) as char;
            let center = self.board_to_screen(Pos::new(i as u8, i as u8));

            painter.text(
                Pos2::new(center.x, self.board_rect.min.y + half),
                egui::Align2::CENTER_CENTER,
                letter,
                font.clone(),
                COORD_LABEL,
            );
            painter.text(
                Pos2::new(self.board_rect.min.x + half, center.y),
                egui::Align2::CENTER_CENTER,
                format!("{}", i + 1),
                font.clone(),
                COORD_LABEL,
            );
        }
    }

    fn draw_discs(&self, painter: &Painter, board: &Board) {
        for pos in board.positions(Tile::Black) {
            self.draw_disc(painter, pos, Tile::Black);
        }
        for pos in board.positions(Tile::White) {
            self.draw_disc(painter, pos, Tile::White);
        }
    }

    /// Draw a single disc with shading
    fn draw_disc(&self, painter: &Painter, pos: Pos, tile: Tile) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        match tile {
            Tile::Black => {
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_DISC);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_DISC_HIGHLIGHT,
                );
            }
            Tile::White => {
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_DISC);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_DISC_SHADOW),
                );
            }
            Tile::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos, tile: Tile) {
        let center = self.board_to_screen(pos);
        let color = if tile == Tile::Empty { BOARD_BG } else { LAST_MOVE_MARKER };
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, color);
    }

    fn draw_legal_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(
            center,
            self.cell_size * LEGAL_MOVE_MARKER_RATIO,
            legal_move_marker(),
        );
    }

    /// Ring around the engine's suggested move
    fn draw_suggestion(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;
        painter.circle_stroke(center, radius, Stroke::new(3.0, SUGGESTION_RING));
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Tile, is_legal: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * DISC_RADIUS_RATIO;

        let color = if is_legal {
            match turn {
                Tile::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
                Tile::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
                Tile::Empty => return,
            }
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        Pos::is_valid(row, col).then(|| Pos::new(row as u8, col as u8))
    }

    /// Convert board position to the screen coordinates of the cell center
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> BoardView {
        BoardView {
            cell_size: 50.0,
            board_rect: Rect::from_min_size(Pos2::new(10.0, 10.0), Vec2::splat(2.0 * BOARD_MARGIN + 400.0)),
        }
    }

    #[test]
    fn test_screen_board_round_trip() {
        let v = view();
        for idx in 0..64 {
            let pos = Pos::from_index(idx);
            assert_eq!(v.screen_to_board(v.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_outside_play_area() {
        let v = view();
        assert_eq!(v.screen_to_board(Pos2::new(12.0, 12.0)), None);
        assert_eq!(v.screen_to_board(Pos2::new(10.0 + BOARD_MARGIN + 401.0, 200.0)), None);
    }
}
