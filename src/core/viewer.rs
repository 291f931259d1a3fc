use crate::constants::{FLIP_THRESHOLD_RATIO, SLIDE_THRESHOLD_RATIO};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Face {
    Front,
    Back,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipDirection {
    ToBack,
    ToFront,
}

/// How a slide presents its destination panel when it lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    /// The destination's back face snaps into view before the stack moves,
    /// and the panel is flip-locked until the settle delay passes.
    ForceBack,
    /// The destination always lands front-facing, even if its back was
    /// revealed before.
    ResetFront,
    /// The destination's face follows its recorded revealed-back state.
    FollowReveal,
}

/// Pixel distances a gesture must accumulate before a transition fires.
#[derive(Clone, Copy, Debug)]
pub struct Thresholds {
    pub flip: f64,
    pub slide: f64,
}

impl Thresholds {
    pub fn from_viewport_height(height: f64) -> Self {
        Self {
            flip: height * FLIP_THRESHOLD_RATIO,
            slide: height * SLIDE_THRESHOLD_RATIO,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct PanelState {
    revealed_back: bool,
    flip_locked: bool,
}

/// Ticket for an in-flight flip; hand it back to [`Viewer::finish_flip`].
#[derive(Clone, Copy, Debug)]
pub struct FlipTicket {
    pub index: usize,
    pub direction: FlipDirection,
}

/// Ticket for an in-flight slide; hand it back to [`Viewer::finish_slide`].
#[derive(Clone, Copy, Debug)]
pub struct SlideTicket {
    pub from: usize,
    pub to: usize,
    pub landing: Landing,
    /// Face the destination shows while the stack is moving.
    pub landing_face: Face,
}

#[derive(Clone, Copy, Debug)]
pub enum Transition {
    Flip(FlipTicket),
    Slide(SlideTicket),
}

#[derive(Clone, Copy)]
enum Intent {
    FlipToBack,
    FlipToFront,
    SlideForward,
    SlideBackward,
}

/// Gesture-driven viewer state shared with the web frontend.
///
/// Owns the accumulated scroll distance, the per-panel face bookkeeping, and
/// the single `busy` flag that serializes transitions. It never touches the
/// DOM: the frontend starts a transition through [`Viewer::feed`], animates
/// it, and reports completion with the ticket it got back. Tests drive the
/// same start/finish pair directly, with no timers involved.
pub struct Viewer {
    panels: Vec<PanelState>,
    current: usize,
    showing_back: bool,
    busy: bool,
    accumulator: f64,
    thresholds: Thresholds,
}

impl Viewer {
    /// `panel_count` is fixed for the page's lifetime and must be at least 1.
    pub fn new(panel_count: usize, thresholds: Thresholds) -> Self {
        debug_assert!(panel_count > 0);
        Self {
            panels: vec![PanelState::default(); panel_count],
            current: 0,
            showing_back: false,
            busy: false,
            accumulator: 0.0,
            thresholds,
        }
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn showing_back(&self) -> bool {
        self.showing_back
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn slide_threshold(&self) -> f64 {
        self.thresholds.slide
    }

    pub fn revealed_back(&self, index: usize) -> bool {
        self.panels.get(index).is_some_and(|p| p.revealed_back)
    }

    pub fn flip_locked(&self, index: usize) -> bool {
        self.panels.get(index).is_some_and(|p| p.flip_locked)
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    /// Face the given panel renders right now. Non-current panels are always
    /// front-facing.
    pub fn face_of(&self, index: usize) -> Face {
        if index == self.current && self.showing_back {
            Face::Back
        } else {
            Face::Front
        }
    }

    pub fn reset_accumulator(&mut self) {
        self.accumulator = 0.0;
    }

    /// Feed one normalized gesture delta (px, positive = forward/down).
    ///
    /// Deltas arriving while a transition is in flight are dropped, not
    /// queued. Below-threshold distance keeps accumulating; a dispatch whose
    /// guard rejects it consumes the gesture (accumulator back to zero) so the
    /// next qualifying gesture can retry.
    pub fn feed(&mut self, delta: f64) -> Option<Transition> {
        if self.busy {
            return None;
        }
        self.accumulator += delta;
        let intent = self.decide()?;
        let started = match intent {
            Intent::FlipToBack => self.start_flip(FlipDirection::ToBack).map(Transition::Flip),
            Intent::FlipToFront => self.start_flip(FlipDirection::ToFront).map(Transition::Flip),
            Intent::SlideForward => self
                .start_slide(self.current as isize + 1, Landing::ResetFront)
                .map(Transition::Slide),
            Intent::SlideBackward => self
                .start_slide(self.current as isize - 1, Landing::ForceBack)
                .map(Transition::Slide),
        };
        if started.is_none() {
            self.accumulator = 0.0;
        }
        started
    }

    fn decide(&self) -> Option<Intent> {
        if self.accumulator > 0.0 {
            if !self.showing_back {
                (self.accumulator >= self.thresholds.flip).then_some(Intent::FlipToBack)
            } else {
                (self.accumulator >= self.thresholds.slide).then_some(Intent::SlideForward)
            }
        } else if self.accumulator < 0.0 {
            let magnitude = -self.accumulator;
            if self.showing_back {
                (magnitude >= self.thresholds.flip).then_some(Intent::FlipToFront)
            } else {
                (magnitude >= self.thresholds.slide).then_some(Intent::SlideBackward)
            }
        } else {
            None
        }
    }

    /// Begin a flip on the current panel. Returns `None` when rejected: a
    /// transition is already in flight, or the panel is flip-locked (front to
    /// back only). Rejection changes no state.
    pub fn start_flip(&mut self, direction: FlipDirection) -> Option<FlipTicket> {
        if self.busy {
            return None;
        }
        if direction == FlipDirection::ToBack && self.flip_locked(self.current) {
            return None;
        }
        self.busy = true;
        Some(FlipTicket {
            index: self.current,
            direction,
        })
    }

    pub fn finish_flip(&mut self, ticket: FlipTicket) {
        match ticket.direction {
            FlipDirection::ToBack => {
                if let Some(p) = self.panels.get_mut(ticket.index) {
                    p.revealed_back = true;
                }
                self.showing_back = true;
            }
            FlipDirection::ToFront => {
                self.showing_back = false;
            }
        }
        self.busy = false;
        self.accumulator = 0.0;
    }

    /// Begin a slide to `target` (clamped to the panel range). Returns `None`
    /// when rejected: a transition is in flight, or the clamped target is the
    /// current panel. A forced-back landing marks the destination revealed and
    /// flip-locked before the stack moves.
    pub fn start_slide(&mut self, target: isize, landing: Landing) -> Option<SlideTicket> {
        if self.busy {
            return None;
        }
        let last = self.panels.len().saturating_sub(1) as isize;
        let to = target.clamp(0, last) as usize;
        if to == self.current {
            return None;
        }
        self.busy = true;
        let landing_face = match landing {
            Landing::ForceBack => {
                if let Some(p) = self.panels.get_mut(to) {
                    p.revealed_back = true;
                    p.flip_locked = true;
                }
                Face::Back
            }
            Landing::ResetFront => Face::Front,
            Landing::FollowReveal => {
                if self.revealed_back(to) {
                    Face::Back
                } else {
                    Face::Front
                }
            }
        };
        Some(SlideTicket {
            from: self.current,
            to,
            landing,
            landing_face,
        })
    }

    pub fn finish_slide(&mut self, ticket: &SlideTicket) {
        self.current = ticket.to;
        self.showing_back = match ticket.landing {
            Landing::ForceBack => true,
            Landing::ResetFront => false,
            Landing::FollowReveal => self.revealed_back(ticket.to),
        };
        self.busy = false;
        self.accumulator = 0.0;
    }

    /// Clear the transient flip suppression left by a forced-back landing.
    /// Called once the settle delay after the slide has passed.
    pub fn release_flip_lock(&mut self, index: usize) {
        if let Some(p) = self.panels.get_mut(index) {
            p.flip_locked = false;
        }
    }
}
