use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use whirl_core::{AppConfig, Scroller};

/// Duration of one eased card-to-card scroll.
const SCROLL_DURATION_MS: u32 = 450;

/// Initial fling velocity in columns/second.
const FLING_VELOCITY: i32 = 900;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollLeft,
    ScrollRight,
    FlingLeft,
    FlingRight,
    ToggleSpin,
    Stop,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('h') | KeyCode::Left => Action::ScrollLeft,
        KeyCode::Char('l') | KeyCode::Right => Action::ScrollRight,
        KeyCode::Char('H') => Action::FlingLeft,
        KeyCode::Char('L') => Action::FlingRight,
        KeyCode::Char('z') => Action::ToggleSpin,
        KeyCode::Char(' ') => Action::Stop,
        _ => Action::None,
    }
}

/// Which motion regime the gallery is in, for the status bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionLabel {
    Idle,
    Scroll,
    Fling,
}

/// Application state for the wrapping gallery
pub struct App {
    pub scroller: Scroller,
    /// Card labels; the strip wraps around after the last one.
    pub items: Vec<String>,
    pub card_width: u16,
    /// Friction restored when spin mode is toggled off.
    configured_friction: f32,
    pub spin_mode: bool,
    pub motion: MotionLabel,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        // The strip wraps modulo the item count, so it must not be empty.
        let items = (1..=config.ui.item_count.max(1))
            .map(|i| format!("Card {i}"))
            .collect();
        Self {
            scroller: Scroller::new(&config.scroller),
            items,
            card_width: config.ui.card_width.max(4),
            configured_friction: config.scroller.friction,
            spin_mode: false,
            motion: MotionLabel::Idle,
            should_quit: false,
        }
    }

    /// Apply an input action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollLeft => self.scroll_by_cards(-1),
            Action::ScrollRight => self.scroll_by_cards(1),
            Action::FlingLeft => self.fling(-1),
            Action::FlingRight => self.fling(1),
            Action::ToggleSpin => self.toggle_spin(),
            Action::Stop => {
                self.scroller.force_finished(true);
                self.motion = MotionLabel::Idle;
            }
            Action::None => {}
        }
    }

    /// Start an eased scroll of `n` cards from the current position.
    fn scroll_by_cards(&mut self, n: i32) {
        let start = self.scroller.current_x();
        let delta = n * self.card_width as i32;
        // Duration is fixed and nonzero, so this cannot fail.
        if self
            .scroller
            .start_scroll(start, 0, delta, 0, SCROLL_DURATION_MS)
            .is_ok()
        {
            self.motion = MotionLabel::Scroll;
        }
    }

    /// Fling the strip in `direction` (-1 left, +1 right).
    fn fling(&mut self, direction: i32) {
        let start = self.scroller.current_x();
        self.scroller
            .fling(start, 0, direction * FLING_VELOCITY, 0, 0, 0, 0, 0);
        self.motion = MotionLabel::Fling;
    }

    /// Toggle frictionless spin: with friction 0 a fling never decays.
    fn toggle_spin(&mut self) {
        self.spin_mode = !self.spin_mode;
        let friction = if self.spin_mode {
            0.0
        } else {
            self.configured_friction
        };
        self.scroller.set_friction(friction);
        debug!(friction, "spin mode toggled");
    }

    /// Advance the animation. Call once per tick, before drawing.
    pub fn update(&mut self) {
        if !self.scroller.compute_scroll_offset() && self.motion != MotionLabel::Idle {
            self.motion = MotionLabel::Idle;
        }
    }

    /// Label of the card covering world column `col`.
    pub fn item_at(&self, col: i32) -> &str {
        let card = col.div_euclid(self.card_width as i32);
        let index = card.rem_euclid(self.items.len() as i32) as usize;
        &self.items[index]
    }
}
