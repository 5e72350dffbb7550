use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use make10_core::{Layout, Pos};

/// A drag gesture in screen space: where the press started and where the
/// pointer is (or was released).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Drag {
    pub start: Pos,
    pub end: Pos,
}

/// One input device class producing drag gestures.
///
/// The two queries never mutate; `update` runs once per tick after the
/// gesture has been consumed and rearms the one-shot finished state, so a
/// finished drag is observed by exactly one tick.
pub trait DragSource {
    fn update(&mut self);
    fn is_dragging(&self) -> Option<Drag>;
    fn just_finished_dragging(&self) -> Option<Drag>;
}

// ── Mouse ────────────────────────────────────────────────────────────────────

/// Left-button drags from crossterm mouse capture.
#[derive(Debug, Default)]
pub struct MouseDrag {
    anchor: Option<Pos>,
    current: Pos,
    finished: Option<Drag>,
}

impl MouseDrag {
    pub fn handle(&mut self, ev: &MouseEvent) {
        let pos = Pos::new(ev.column as i32, ev.row as i32);
        match ev.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.anchor = Some(pos);
                self.current = pos;
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.anchor.is_some() {
                    self.current = pos;
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(start) = self.anchor.take() {
                    self.finished = Some(Drag { start, end: pos });
                }
            }
            _ => {}
        }
    }
}

impl DragSource for MouseDrag {
    fn update(&mut self) {
        self.finished = None;
    }

    fn is_dragging(&self) -> Option<Drag> {
        self.anchor.map(|start| Drag {
            start,
            end: self.current,
        })
    }

    fn just_finished_dragging(&self) -> Option<Drag> {
        self.finished
    }
}

// ── Keyboard pointer ─────────────────────────────────────────────────────────

/// Keyboard-driven virtual pointer, the terminal stand-in for a touch
/// device: arrows move it by one tile, Space anchors and releases a
/// selection. The pointer appears centered in the viewport on first use and
/// stays clamped to it.
#[derive(Debug, Default)]
pub struct PointerDrag {
    pointer: Option<Pos>,
    anchor: Option<Pos>,
    finished: Option<Drag>,
}

impl PointerDrag {
    pub fn handle(&mut self, key: &KeyEvent, layout: &Layout) {
        let p = self
            .pointer
            .get_or_insert_with(|| Pos::new(layout.view_w / 2, layout.view_h / 2));

        match key.code {
            KeyCode::Up => p.y -= layout.tile_h,
            KeyCode::Down => p.y += layout.tile_h,
            KeyCode::Left => p.x -= layout.tile_w,
            KeyCode::Right => p.x += layout.tile_w,
            KeyCode::Char(' ') => match self.anchor.take() {
                Some(start) => self.finished = Some(Drag { start, end: *p }),
                None => self.anchor = Some(*p),
            },
            _ => {}
        }

        p.x = p.x.clamp(0, layout.view_w - 1);
        p.y = p.y.clamp(0, layout.view_h - 1);
    }

    /// Where the pointer sits, once it has been touched at all.
    pub fn pointer(&self) -> Option<Pos> {
        self.pointer
    }
}

impl DragSource for PointerDrag {
    fn update(&mut self) {
        self.finished = None;
    }

    fn is_dragging(&self) -> Option<Drag> {
        match (self.anchor, self.pointer) {
            (Some(start), Some(end)) => Some(Drag { start, end }),
            _ => None,
        }
    }

    fn just_finished_dragging(&self) -> Option<Drag> {
        self.finished
    }
}

// ── Combinator ───────────────────────────────────────────────────────────────

/// Merges the two device classes by priority, mouse first. At most one
/// finished gesture comes out per tick.
#[derive(Debug, Default)]
pub struct DualDrag {
    pub mouse: MouseDrag,
    pub keys: PointerDrag,
}

impl DualDrag {
    pub fn handle_mouse(&mut self, ev: &MouseEvent) {
        self.mouse.handle(ev);
    }

    pub fn handle_key(&mut self, key: &KeyEvent, layout: &Layout) {
        self.keys.handle(key, layout);
    }
}

impl DragSource for DualDrag {
    fn update(&mut self) {
        self.mouse.update();
        self.keys.update();
    }

    fn is_dragging(&self) -> Option<Drag> {
        self.mouse.is_dragging().or_else(|| self.keys.is_dragging())
    }

    fn just_finished_dragging(&self) -> Option<Drag> {
        self.mouse
            .just_finished_dragging()
            .or_else(|| self.keys.just_finished_dragging())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn layout() -> Layout {
        Layout::new(80, 24, 7, 3)
    }

    fn mouse_event(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn mouse_press_move_release_is_one_gesture() {
        let mut m = MouseDrag::default();
        assert!(m.is_dragging().is_none());

        m.handle(&mouse_event(MouseEventKind::Down(MouseButton::Left), 10, 5));
        m.handle(&mouse_event(MouseEventKind::Drag(MouseButton::Left), 14, 8));
        assert_eq!(
            m.is_dragging(),
            Some(Drag {
                start: Pos::new(10, 5),
                end: Pos::new(14, 8),
            })
        );
        assert!(m.just_finished_dragging().is_none());

        m.handle(&mouse_event(MouseEventKind::Up(MouseButton::Left), 15, 9));
        assert!(m.is_dragging().is_none());
        assert_eq!(
            m.just_finished_dragging(),
            Some(Drag {
                start: Pos::new(10, 5),
                end: Pos::new(15, 9),
            })
        );

        // Consumed by one tick, gone the next.
        m.update();
        assert!(m.just_finished_dragging().is_none());
    }

    #[test]
    fn stray_release_without_press_is_ignored() {
        let mut m = MouseDrag::default();
        m.handle(&mouse_event(MouseEventKind::Up(MouseButton::Left), 3, 3));
        assert!(m.just_finished_dragging().is_none());
    }

    #[test]
    fn pointer_starts_centered_and_moves_by_tiles() {
        let l = layout();
        let mut k = PointerDrag::default();
        assert!(k.pointer().is_none());

        k.handle(&key(KeyCode::Right), &l);
        assert_eq!(k.pointer(), Some(Pos::new(40 + 7, 12)));
        k.handle(&key(KeyCode::Up), &l);
        assert_eq!(k.pointer(), Some(Pos::new(47, 9)));
    }

    #[test]
    fn pointer_is_clamped_to_the_viewport() {
        let l = layout();
        let mut k = PointerDrag::default();
        for _ in 0..20 {
            k.handle(&key(KeyCode::Left), &l);
        }
        assert_eq!(k.pointer(), Some(Pos::new(0, 12)));
    }

    #[test]
    fn space_anchors_then_releases() {
        let l = layout();
        let mut k = PointerDrag::default();

        k.handle(&key(KeyCode::Char(' ')), &l);
        let start = k.pointer().unwrap();
        k.handle(&key(KeyCode::Down), &l);
        k.handle(&key(KeyCode::Right), &l);
        assert_eq!(
            k.is_dragging(),
            Some(Drag {
                start,
                end: Pos::new(start.x + 7, start.y + 3),
            })
        );

        k.handle(&key(KeyCode::Char(' ')), &l);
        assert!(k.is_dragging().is_none());
        let fin = k.just_finished_dragging().unwrap();
        assert_eq!(fin.start, start);
        assert_eq!(fin.end, Pos::new(start.x + 7, start.y + 3));

        k.update();
        assert!(k.just_finished_dragging().is_none());
    }

    #[test]
    fn mouse_wins_over_keyboard() {
        let l = layout();
        let mut dual = DualDrag::default();

        dual.handle_key(&key(KeyCode::Char(' ')), &l);
        dual.handle_key(&key(KeyCode::Right), &l);
        dual.handle_key(&key(KeyCode::Char(' ')), &l);
        dual.handle_mouse(&mouse_event(MouseEventKind::Down(MouseButton::Left), 1, 1));
        dual.handle_mouse(&mouse_event(MouseEventKind::Up(MouseButton::Left), 2, 2));

        let fin = dual.just_finished_dragging().unwrap();
        assert_eq!(fin.start, Pos::new(1, 1));
        assert_eq!(fin.end, Pos::new(2, 2));

        dual.update();
        assert!(dual.just_finished_dragging().is_none());
    }

    #[test]
    fn keyboard_serves_as_fallback() {
        let l = layout();
        let mut dual = DualDrag::default();

        dual.handle_key(&key(KeyCode::Char(' ')), &l);
        dual.handle_key(&key(KeyCode::Down), &l);
        dual.handle_key(&key(KeyCode::Char(' ')), &l);

        assert!(dual.just_finished_dragging().is_some());
    }
}
