// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection for touch input.

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Finger moved right: show the previous image.
    Previous,
    /// Finger moved left: show the next image.
    Next,
}

/// Classifies a horizontal swipe from its start and end positions.
///
/// The distance must strictly exceed `threshold`; anything at or below it is
/// treated as a tap.
#[must_use]
pub fn classify(start_x: f32, end_x: f32, threshold: f32) -> Option<Swipe> {
    let distance = end_x - start_x;
    if distance.abs() > threshold {
        if distance > 0.0 {
            Some(Swipe::Previous)
        } else {
            Some(Swipe::Next)
        }
    } else {
        None
    }
}

/// What a finished touch amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(Swipe),
    /// A touch that stayed within the threshold.
    Tap {
        /// The backdrop reported this touch while it was in progress.
        on_background: bool,
    },
}

/// Remembers where the current touch began and how the backdrop saw it.
///
/// The backdrop reports touches as presses and releases that arrive
/// interleaved with the raw touch events in either order. A touch only
/// dismisses the lightbox when it ends as a tap, never when it ends as a
/// swipe.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    on_background: bool,
    swallow_background: bool,
}

impl SwipeTracker {
    pub fn start(&mut self, x: f32) {
        self.start_x = Some(x);
        self.on_background = false;
        self.swallow_background = false;
    }

    /// Ends the touch and returns the gesture it formed.
    ///
    /// A touch end without a matching start is ignored.
    pub fn end(&mut self, x: f32, threshold: f32) -> Option<Gesture> {
        let start_x = self.start_x.take()?;
        let on_background = std::mem::take(&mut self.on_background);
        match classify(start_x, x, threshold) {
            Some(swipe) => {
                // The backdrop release for this touch may still be queued.
                self.swallow_background = !on_background;
                Some(Gesture::Swipe(swipe))
            }
            None => Some(Gesture::Tap { on_background }),
        }
    }

    /// Records a press or release on the backdrop.
    ///
    /// Returns `true` when it should dismiss right away. During a touch the
    /// decision waits for [`end`](Self::end), and the release that trails a
    /// swipe is swallowed.
    pub fn background_pressed(&mut self) -> bool {
        if self.is_tracking() {
            self.on_background = true;
            return false;
        }
        !std::mem::take(&mut self.swallow_background)
    }

    /// Records a press or release on the content, which never dismisses.
    pub fn content_pressed(&mut self) {
        self.swallow_background = false;
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }
}
