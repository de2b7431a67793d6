use std::{process::exit, thread::sleep, time::Duration};

use crate::BoardInt;
use crate::engine::{Command, Direction, GameEngine};
use crate::term::TermManager;

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};

const TICK_INTERVAL_MS: u64 = 10;
const TICKS_UNTIL_STEP: u64 = 20; // One game step per 200ms

pub struct SnakeGame {
    engine: GameEngine,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(rows: BoardInt, columns: BoardInt) -> Self {
        SnakeGame {
            engine: GameEngine::new(rows, columns),
            term: TermManager::new(rows, columns),
        }
    }

    pub fn run(&mut self) {
        self.term.setup();
        self.term.draw_static();
        self.term.draw_frame(&self.engine.frame());

        let mut ticks_until_step = TICKS_UNTIL_STEP;

        loop {
            sleep(Duration::from_millis(TICK_INTERVAL_MS));

            // Commands apply between game steps, so each step sees the
            // most recently pressed direction
            let mut dirty = false;
            for key_ev in self.term.read_key_events_queue() {
                if is_ctrl_c(&key_ev) {
                    self.clean_exit();
                }
                if let Some(cmd) = map_key(&key_ev) {
                    self.engine.handle_input(cmd);
                    dirty = true;
                }
            }

            ticks_until_step -= 1;
            if ticks_until_step == 0 {
                ticks_until_step = TICKS_UNTIL_STEP;

                if self.engine.is_running() {
                    self.engine.tick();
                    dirty = true;
                }
            }

            if dirty {
                self.term.draw_frame(&self.engine.frame());
            }
        }
    }

    fn clean_exit(&mut self) {
        self.term.restore();
        exit(0);
    }
}

fn map_key(ev: &KeyEvent) -> Option<Command> {
    match ev.code {
        KeyCode::Tab => Some(Command::Start),
        KeyCode::Char('r') => Some(Command::Reset),
        KeyCode::Up => Some(Command::SetDirection(Direction::Up)),
        KeyCode::Down => Some(Command::SetDirection(Direction::Down)),
        KeyCode::Left => Some(Command::SetDirection(Direction::Left)),
        KeyCode::Right => Some(Command::SetDirection(Direction::Right)),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrow_keys_map_to_direction_commands() {
        assert_eq!(map_key(&key(KeyCode::Up)), Some(Command::SetDirection(Direction::Up)));
        assert_eq!(map_key(&key(KeyCode::Down)), Some(Command::SetDirection(Direction::Down)));
        assert_eq!(map_key(&key(KeyCode::Left)), Some(Command::SetDirection(Direction::Left)));
        assert_eq!(map_key(&key(KeyCode::Right)), Some(Command::SetDirection(Direction::Right)));
    }

    #[test]
    fn tab_starts_and_r_resets() {
        assert_eq!(map_key(&key(KeyCode::Tab)), Some(Command::Start));
        assert_eq!(map_key(&key(KeyCode::Char('r'))), Some(Command::Reset));
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('w'))), None);
        assert_eq!(map_key(&key(KeyCode::Esc)), None);
        assert_eq!(map_key(&key(KeyCode::Enter)), None);
    }
}
