use make10_core::{Board, History, LEVELS, Layout, SumRule, evaluate};

use crate::input::{Drag, DragSource, DualDrag};

/// Rolling in-game log length, newest first.
const LOG_CAP: usize = 30;

/// Owns the undo history, the level cursor and the input devices, and turns
/// finished drag gestures into history entries.
pub struct Game {
    pub level: usize,
    pub history: History,
    pub rule: SumRule,
    pub input: DualDrag,
    pub debug: bool,
    log: Vec<String>,
}

impl Game {
    pub fn new(rule: SumRule) -> Self {
        Self {
            level: 0,
            history: History::new(LEVELS[0].board()),
            rule,
            input: DualDrag::default(),
            debug: false,
            log: Vec::new(),
        }
    }

    /// The board being played right now.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Runs once per loop iteration: consumes at most one finished gesture,
    /// then rearms the input sources for the next tick.
    pub fn tick(&mut self, layout: &Layout) {
        if let Some(drag) = self.input.just_finished_dragging() {
            self.try_select(layout, drag);
        }
        self.input.update();
    }

    fn try_select(&mut self, layout: &Layout, drag: Drag) {
        self.log(format!(
            "select ({}, {}) .. ({}, {})",
            drag.start.x, drag.start.y, drag.end.x, drag.end.y
        ));
        match evaluate(self.board(), layout, self.rule, drag.start, drag.end) {
            Some(next) => {
                self.history.push(next);
                self.log(format!("cleared, {} left", self.board().remaining()));
            }
            None => self.log("rejected".to_string()),
        }
    }

    pub fn undo(&mut self) {
        if !self.history.undo() {
            self.log("undo blocked at level start".to_string());
        }
    }

    pub fn next_level(&mut self) {
        self.level = (self.level + 1) % LEVELS.len();
        self.history.reset(LEVELS[self.level].board());
    }

    pub fn prev_level(&mut self) {
        self.level = (self.level + LEVELS.len() - 1) % LEVELS.len();
        self.history.reset(LEVELS[self.level].board());
    }

    fn log(&mut self, msg: String) {
        self.log.insert(0, msg);
        self.log.truncate(LOG_CAP);
    }

    pub fn log_lines(&self) -> &[String] {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use make10_core::Pos;

    fn layout() -> Layout {
        Layout::new(80, 24, 7, 3)
    }

    fn mouse_event(kind: MouseEventKind, p: Pos) -> MouseEvent {
        MouseEvent {
            kind,
            column: p.x as u16,
            row: p.y as u16,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drag(game: &mut Game, l: &Layout, from: Pos, to: Pos) {
        game.input
            .handle_mouse(&mouse_event(MouseEventKind::Down(MouseButton::Left), from));
        game.input
            .handle_mouse(&mouse_event(MouseEventKind::Drag(MouseButton::Left), to));
        game.input
            .handle_mouse(&mouse_event(MouseEventKind::Up(MouseButton::Left), to));
        game.tick(l);
    }

    #[test]
    fn accepted_drag_grows_history() {
        let l = layout();
        let mut game = Game::new(SumRule::Exact);

        // Level 1 opens with a 6 at (0,0) over a 4 at (0,1).
        let a = game.board().cell_center(&l, 0, 0);
        let b = game.board().cell_center(&l, 0, 1);
        drag(&mut game, &l, a, b);

        assert_eq!(game.history.len(), 2);
        assert!(game.board().at(0, 0).1);
        assert!(game.board().at(0, 1).1);
    }

    #[test]
    fn rejected_drag_changes_nothing() {
        let l = layout();
        let mut game = Game::new(SumRule::Exact);

        let a = game.board().cell_center(&l, 0, 0);
        drag(&mut game, &l, a, a);
        assert_eq!(game.history.len(), 1);
        assert_eq!(*game.board(), LEVELS[0].board());
    }

    #[test]
    fn each_gesture_is_consumed_once() {
        let l = layout();
        let mut game = Game::new(SumRule::Exact);

        let a = game.board().cell_center(&l, 0, 0);
        let b = game.board().cell_center(&l, 0, 1);
        drag(&mut game, &l, a, b);
        assert_eq!(game.history.len(), 2);

        // Extra ticks with no fresh gesture must not re-evaluate.
        game.tick(&l);
        game.tick(&l);
        assert_eq!(game.history.len(), 2);
    }

    #[test]
    fn undo_walks_back_and_stops_at_the_floor() {
        let l = layout();
        let mut game = Game::new(SumRule::Exact);

        let a = game.board().cell_center(&l, 0, 0);
        let b = game.board().cell_center(&l, 0, 1);
        drag(&mut game, &l, a, b);

        game.undo();
        assert_eq!(game.history.len(), 1);
        assert_eq!(*game.board(), LEVELS[0].board());

        game.undo();
        assert_eq!(game.history.len(), 1);
    }

    #[test]
    fn level_navigation_wraps_and_resets() {
        let l = layout();
        let mut game = Game::new(SumRule::Exact);

        let a = game.board().cell_center(&l, 0, 0);
        let b = game.board().cell_center(&l, 0, 1);
        drag(&mut game, &l, a, b);
        assert_eq!(game.history.len(), 2);

        game.next_level();
        assert_eq!(game.level, 1);
        assert_eq!(game.history.len(), 1);
        assert_eq!(*game.board(), LEVELS[1].board());

        game.prev_level();
        game.prev_level();
        assert_eq!(game.level, LEVELS.len() - 1);
        assert_eq!(*game.board(), LEVELS[LEVELS.len() - 1].board());
    }
}
