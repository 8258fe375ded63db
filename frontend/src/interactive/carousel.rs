//! Testimonial carousel with autoplay, hover pause and a progress bar.
//!
//! Autoplay is gated by two independent inputs: the explicit play/pause
//! toggle and pointer hover. The timer only advances while the toggle says
//! play and the pointer is outside, so leaving the carousel never overrides
//! a manual pause.

use std::fmt;

/// Interval between progress ticks.
pub const TICK_MS: u32 = 100;

/// Progress gained per tick; 100 / 2 ticks * 100 ms = 5 s per slide.
pub const PROGRESS_STEP: f64 = 2.0;

pub const PROGRESS_MAX: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub company: String,
    pub image: String,
    pub content: String,
    pub rating: u8,
}

impl Testimonial {
    /// Star count to render, never more than five.
    pub fn stars(&self) -> usize {
        usize::from(self.rating.min(5))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselError {
    SlideOutOfRange { index: usize, len: usize },
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::SlideOutOfRange { index, len } => {
                write!(f, "slide {} out of range for {} testimonials", index, len)
            }
        }
    }
}

impl std::error::Error for CarouselError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    progress: f64,
    user_autoplay: bool,
    hovered: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            progress: 0.0,
            user_autoplay: true,
            hovered: false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Navigation and autoplay only exist with two or more slides.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    /// Whether the tick timer should be running right now.
    pub fn is_autoplaying(&self) -> bool {
        self.has_controls() && self.user_autoplay && !self.hovered
    }

    /// The explicit toggle setting, independent of hover.
    pub fn autoplay_enabled(&self) -> bool {
        self.user_autoplay
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Advances progress by one step. Returns true when the slide changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_autoplaying() {
            return false;
        }
        self.progress += PROGRESS_STEP;
        if self.progress >= PROGRESS_MAX {
            self.current = (self.current + 1) % self.len;
            self.progress = 0.0;
            return true;
        }
        false
    }

    pub fn go_to_next(&mut self) {
        if !self.has_controls() {
            return;
        }
        self.current = (self.current + 1) % self.len;
        self.progress = 0.0;
    }

    pub fn go_to_previous(&mut self) {
        if !self.has_controls() {
            return;
        }
        self.current = (self.current + self.len - 1) % self.len;
        self.progress = 0.0;
    }

    pub fn go_to_slide(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        if !self.has_controls() {
            return Ok(());
        }
        self.current = index;
        self.progress = 0.0;
        Ok(())
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    pub fn toggle_autoplay(&mut self) {
        self.user_autoplay = !self.user_autoplay;
    }

    pub fn play(&mut self) {
        self.user_autoplay = true;
    }

    pub fn pause(&mut self) {
        self.user_autoplay = false;
    }
}
