use std::collections::VecDeque;

use crate::{BoardInt, Coords};
use Direction::*;

use rand::seq::SliceRandom;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    fn delta(self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

/// Commands produced by the input side. Anything else the player
/// presses never reaches the engine.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Command {
    Start,
    Reset,
    SetDirection(Direction),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Cell {
    Empty,
    Snake,
    Food,
}

/// Render-ready snapshot: everything the display layer needs,
/// with no game logic left to apply.
pub struct Frame {
    pub rows: BoardInt,
    pub columns: BoardInt,
    pub cells: Vec<Cell>,
    pub score: usize,
    pub status: &'static str,
}

pub struct GameEngine {
    rows: BoardInt,
    columns: BoardInt,
    snake: VecDeque<Coords>,
    food: Coords,
    direction: Direction,
    started: bool,
    over: bool,
}

impl GameEngine {
    /// Board dimensions are a startup precondition: the initial food
    /// cell sits at column `columns - 4`.
    pub fn new(rows: BoardInt, columns: BoardInt) -> Self {
        assert!(rows >= 1 && columns >= 4, "board must be at least 1x4");

        let mut engine = GameEngine {
            rows,
            columns,
            snake: VecDeque::new(),
            food: (0, 0),
            direction: Right,
            started: false,
            over: false,
        };
        engine.reset();
        engine
    }

    /// Advances the game by one step. Does nothing until `Start` has been
    /// received, and nothing again once the game is over.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }

        let (hx, hy) = self.snake[0];
        let (dx, dy) = self.direction.delta();
        let head = (hx + dx, hy + dy);

        let mut candidate = self.snake.clone();
        candidate.push_front(head);

        if head == self.food {
            if candidate.len() == self.cell_count() {
                // Board is full, nowhere left to put food
                self.snake = candidate;
                self.over = true;
                return;
            }
            self.relocate_food(&candidate);
        } else {
            candidate.pop_back();
        }

        let out_of_bounds = head.0 < 0 || head.0 >= self.columns
                         || head.1 < 0 || head.1 >= self.rows;

        if out_of_bounds || candidate.iter().skip(1).any(|&pos| pos == head) {
            self.over = true;
        } else {
            self.snake = candidate;
        }
    }

    pub fn handle_input(&mut self, command: Command) {
        match command {
            Command::Start => self.started = true,
            Command::Reset => self.reset(),
            // No reversal guard: turning straight back into the neck is
            // allowed and loses on the next tick
            Command::SetDirection(dir) => self.direction = dir,
        }
    }

    pub fn is_running(&self) -> bool {
        self.started && !self.over
    }

    pub fn frame(&self) -> Frame {
        let mut cells = Vec::with_capacity(self.cell_count());

        for y in 0..self.rows {
            for x in 0..self.columns {
                let cell = if self.snake.contains(&(x, y)) {
                    Cell::Snake
                } else if self.food == (x, y) {
                    Cell::Food
                } else {
                    Cell::Empty
                };
                cells.push(cell);
            }
        }

        Frame {
            rows: self.rows,
            columns: self.columns,
            cells,
            score: self.snake.len() - 1,
            status: self.status(),
        }
    }

    pub fn status(&self) -> &'static str {
        if !self.over {
            ""
        } else if self.snake.len() == self.cell_count() {
            "Game Won!"
        } else {
            "Game Over"
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    // Leaves `started` alone: a reset mid-game resumes immediately
    fn reset(&mut self) {
        let mid = self.rows / 2;
        self.snake = VecDeque::from(vec![(1, mid)]);
        self.food = (self.columns - 4, mid);
        self.direction = Right;
        self.over = false;
    }

    fn relocate_food(&mut self, occupied: &VecDeque<Coords>) {
        let free: Vec<Coords> = (0..self.rows)
            .flat_map(|y| (0..self.columns).map(move |x| (x, y)))
            .filter(|pos| !occupied.contains(pos))
            .collect();

        // Full-board growth is handled as a win before we get here, so
        // there is always at least one free cell
        if let Some(&pos) = free.choose(&mut rand::thread_rng()) {
            self.food = pos;
        }
    }

    fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }
}
