//! Flip and swipe handling for the card on screen.
//!
//! Input arrives as discrete pointer/keyboard events and animation deadlines
//! are polled with [`CardGesture::tick`]. Every deadline remembers the card
//! revision it was created for, so a late deadline can never act on a newer
//! card.

use std::time::{
    Duration,
    Instant,
};

use eframe::egui::{
    Pos2,
    Vec2,
};

use super::CardRevision;

/// Horizontal distance a release must exceed to count as a swipe.
pub const SWIPE_THRESHOLD: f32 = 75.0;
/// Releases closer than this to the press point are taps.
pub const TAP_SLOP: f32 = 6.0;
pub const FLIP_DURATION: Duration = Duration::from_millis(300);
pub const EXIT_DURATION: Duration = Duration::from_millis(300);
/// How far the card travels off screen while exiting.
pub const EXIT_TRAVEL: f32 = 420.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Swipe left, go to the next card.
    Forward,
    /// Swipe right, go back a card.
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragAxis {
    Undecided,
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Resting,
    Dragging { start: Pos2, offset: Vec2, axis: DragAxis },
    Flipping { card: CardRevision, started: Instant, until: Instant },
    Exiting { card: CardRevision, direction: Direction, from: Vec2, started: Instant, until: Instant },
}

#[derive(Debug, Clone)]
pub struct CardGesture {
    card: CardRevision,
    state: GestureState,
    face_up: bool,
}

impl CardGesture {
    pub fn new(card: CardRevision) -> Self {
        Self { card, state: GestureState::Resting, face_up: true }
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn card(&self) -> CardRevision {
        self.card
    }

    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn is_resting(&self) -> bool {
        matches!(self.state, GestureState::Resting)
    }

    /// Resets everything when a different card becomes current. Returns `true` on reset.
    pub fn sync_card(&mut self, card: CardRevision) -> bool {
        if self.card == card {
            return false;
        }
        *self = Self::new(card);
        true
    }

    pub fn press(&mut self, position: Pos2) -> bool {
        if !self.is_resting() {
            return false;
        }
        self.state = GestureState::Dragging { start: position, offset: Vec2::ZERO, axis: DragAxis::Undecided };
        true
    }

    pub fn drag_to(&mut self, position: Pos2) {
        if let GestureState::Dragging { start, offset, axis } = &mut self.state {
            *offset = position - *start;
            if *axis == DragAxis::Undecided && offset.length() > TAP_SLOP {
                *axis = if offset.x.abs() > offset.y.abs() {
                    DragAxis::Horizontal
                } else {
                    DragAxis::Vertical
                };
            }
        }
    }

    /// Ends a drag. Returns a direction only when the release navigates right away.
    pub fn release(&mut self, now: Instant) -> Option<Direction> {
        let GestureState::Dragging { offset, .. } = self.state else {
            return None;
        };

        if offset.x.abs() > SWIPE_THRESHOLD {
            let direction = if offset.x < 0.0 { Direction::Forward } else { Direction::Backward };
            self.state = GestureState::Exiting {
                card: self.card,
                direction,
                from: offset,
                started: now,
                until: now + EXIT_DURATION,
            };
            return None;
        }

        self.state = GestureState::Resting;
        if offset.length() <= TAP_SLOP {
            return self.tap(now);
        }
        None
    }

    /// Click, tap, Enter or Space on the card.
    pub fn tap(&mut self, now: Instant) -> Option<Direction> {
        if !self.is_resting() {
            return None;
        }

        if self.face_up {
            self.face_up = false;
            self.state = GestureState::Flipping { card: self.card, started: now, until: now + FLIP_DURATION };
            None
        } else {
            Some(Direction::Forward)
        }
    }

    /// Fires due deadlines. Returns the navigation owed by a finished exit.
    pub fn tick(&mut self, now: Instant, current: CardRevision) -> Option<Direction> {
        if self.sync_card(current) {
            return None;
        }

        match self.state {
            GestureState::Flipping { until, .. } if now >= until => {
                self.state = GestureState::Resting;
                None
            }
            GestureState::Exiting { card, direction, until, .. } if now >= until => {
                self.state = GestureState::Resting;
                (card == current).then_some(direction)
            }
            _ => None,
        }
    }

    /// Time until the next deadline, for scheduling a repaint.
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        match self.state {
            GestureState::Flipping { until, .. } | GestureState::Exiting { until, .. } => {
                Some(until.saturating_duration_since(now))
            }
            _ => None,
        }
    }

    /// Horizontal drags own the pointer; vertical ones are left to the scroll area.
    pub fn suppresses_scroll(&self) -> bool {
        matches!(self.state, GestureState::Dragging { axis: DragAxis::Horizontal, .. })
    }

    /// Where the card should be drawn relative to its resting place.
    pub fn visual_offset(&self, now: Instant) -> Vec2 {
        match self.state {
            GestureState::Dragging { offset, axis, .. } => match axis {
                DragAxis::Vertical => Vec2::ZERO,
                _ => Vec2::new(offset.x, 0.0),
            },
            GestureState::Exiting { direction, from, started, until, .. } => {
                let t = progress(now, started, until);
                let sign = match direction {
                    Direction::Forward => -1.0,
                    Direction::Backward => 1.0,
                };
                Vec2::new(from.x + sign * EXIT_TRAVEL * t, 0.0)
            }
            _ => Vec2::ZERO,
        }
    }

    /// 0.0 shows the front, 1.0 the back.
    pub fn flip_progress(&self, now: Instant) -> f32 {
        match self.state {
            GestureState::Flipping { started, until, .. } => progress(now, started, until),
            _ if self.face_up => 0.0,
            _ => 1.0,
        }
    }
}

fn progress(now: Instant, started: Instant, until: Instant) -> f32 {
    let total = until.saturating_duration_since(started).as_secs_f32();
    if total <= 0.0 {
        return 1.0;
    }
    (now.saturating_duration_since(started).as_secs_f32() / total).clamp(0.0, 1.0)
}
