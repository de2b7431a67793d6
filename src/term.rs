use crate::BoardInt;
use crate::engine::{Cell, Frame};
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

const SNAKE_BODY_CHAR: char = '█';
const DEAD_SNAKE_CHAR: char = 'X';
const FOOD_CHAR: char = 'O';

const HELP_LINES: &[&str] = &[
    "Tab to start",
    "R to restart",
    "CTRL+C to quit",
];

/// Draws the board centered in the terminal, one terminal cell per grid
/// cell, with a status line above it and score/help lines below.
pub struct TermManager {
    stdout: Stdout,
    board_width: u16,
    board_height: u16,
    // Top-left terminal cell of the board interior
    origin: (u16, u16),
}

impl TermManager {
    pub fn new(rows: BoardInt, columns: BoardInt) -> Self {
        let (term_width, term_height) = terminal::size().expect("Error reading size.");
        let board_width = columns as u16;
        let board_height = rows as u16;

        // Status line, bordered board, blank line, score, help block
        let needed_width = board_width + 2;
        let needed_height = board_height + 2 + 3 + HELP_LINES.len() as u16;
        assert!(
            term_width >= needed_width && term_height >= needed_height,
            "Terminal too small for a {}x{} board", rows, columns
        );

        let left = (term_width - needed_width) / 2 + 1;
        let top = (term_height - needed_height) / 2 + 2;
        TermManager { stdout: stdout(), board_width, board_height, origin: (left, top) }
    }

    pub fn setup(&mut self) {
        execute!(self.stdout, EnterAlternateScreen).expect("Error entering alt screen");
        terminal::enable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .expect("Error hiding cursor.");
    }

    pub fn restore(&mut self) {
        terminal::disable_raw_mode().expect("Error setting raw mode.");
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .expect("Error leaving alt screen");
    }

    pub fn read_key_events_queue(&self) -> Vec<KeyEvent> {
        let mut events = vec![];

        while poll(Duration::from_millis(1)).unwrap() {
            if let Event::Key(ev) = read().unwrap() {
                events.push(ev);
            }
        }

        events
    }

    /// Draws the parts that never change: the border and the help block.
    pub fn draw_static(&mut self) {
        execute!(self.stdout, terminal::Clear(ClearType::All)).expect("Error clearing.");

        let (left, top) = self.origin;
        let end_x = left + self.board_width;
        let end_y = top + self.board_height;

        for x in left - 1..=end_x {
            let ch = if x == left - 1 || x == end_x {'+'} else {'-'};
            self.print_at((x, top - 1), ch);
            self.print_at((x, end_y), ch);
        }

        for y in top..end_y {
            self.print_at((left - 1, y), '|');
            self.print_at((end_x, y), '|');
        }

        for (i, line) in HELP_LINES.iter().enumerate() {
            self.print_line(end_y + 3 + i as u16, line);
        }

        self.flush();
    }

    pub fn draw_frame(&mut self, frame: &Frame) {
        let (left, top) = self.origin;
        let lost = frame.status == "Game Over";

        for (i, cell) in frame.cells.iter().enumerate() {
            let x = left + (i % frame.columns as usize) as u16;
            let y = top + (i / frame.columns as usize) as u16;
            let ch = match cell {
                Cell::Snake if lost => DEAD_SNAKE_CHAR,
                Cell::Snake => SNAKE_BODY_CHAR,
                Cell::Food => FOOD_CHAR,
                Cell::Empty => ' ',
            };
            self.print_at((x, y), ch);
        }

        self.print_line(top - 2, frame.status);
        self.print_line(top + self.board_height + 2, &format!("Score: {}", frame.score));
        self.flush();
    }

    ///////////////////////////////////////////////////////////////////////////

    // Centers a line over the board width, padded so shorter text
    // overwrites whatever the previous frame left there
    fn print_line(&mut self, y: u16, text: &str) {
        let width = (self.board_width + 2) as usize;
        let padded = format!("{: ^width$}", text, width = width);
        let x = self.origin.0 - 1;

        queue!(self.stdout, cursor::MoveTo(x, y), style::Print(padded)).unwrap();
    }

    fn print_at(&mut self, pos: (u16, u16), ch: char) {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch)).unwrap();
    }

    fn flush(&mut self) {
        self.stdout.flush().expect("Error flushing.");
    }
}
