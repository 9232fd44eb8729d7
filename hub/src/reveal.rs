//! Scroll-triggered reveal of page content
//!
//! Each registered block starts hidden and flips to revealed once its top
//! edge scrolls within a threshold of the viewport bottom. The flip is
//! one-way: re-entering a page (re-registering) is the only way back.

/// Pixels above the viewport bottom at which a block counts as visible
pub const REVEAL_THRESHOLD: f32 = 150.0;

/// Cosmetic fade stagger per block, in seconds
pub const STAGGER_STEP: f32 = 0.1;

/// Seconds a revealed block takes to fade in
pub const FADE_SECONDS: f32 = 0.6;

/// Reveal flags for the current page's content blocks, in layout order.
#[derive(Debug, Default)]
pub struct Reveal {
    /// Scene time at which each block was revealed; `None` until then.
    revealed_at: Vec<Option<f32>>,
}

impl Reveal {
    /// Capture a fresh registry of `len` blocks, all hidden.
    pub fn register(len: usize) -> Self {
        Self {
            revealed_at: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.revealed_at.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed_at.is_empty()
    }

    /// Test every block against the viewport and latch newly visible ones.
    ///
    /// `tops[i]` is block i's top edge distance from the viewport top, and
    /// `now` is the scene clock used for fade timing. Ticking an already
    /// revealed block is a no-op, so flags are monotone. Extra or missing
    /// entries in `tops` are ignored.
    pub fn tick(&mut self, tops: &[f32], viewport_height: f32, now: f32) {
        for (flag, &top) in self.revealed_at.iter_mut().zip(tops) {
            if flag.is_none() && top < viewport_height - REVEAL_THRESHOLD {
                *flag = Some(now);
            }
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed_at.get(index).is_some_and(|f| f.is_some())
    }

    /// Fade-in opacity for block `index` at scene time `now`, staggered by
    /// the block's position in the registry. 0.0 while hidden, up to 1.0.
    pub fn alpha(&self, index: usize, now: f32) -> f32 {
        match self.revealed_at.get(index) {
            Some(Some(at)) => {
                let delay = index as f32 * STAGGER_STEP;
                ((now - at - delay) / FADE_SECONDS).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let reveal = Reveal::register(3);
        assert_eq!(reveal.len(), 3);
        assert!(!reveal.is_revealed(0));
        assert_eq!(reveal.alpha(0, 10.0), 0.0);
    }

    #[test]
    fn reveals_below_threshold() {
        let mut reveal = Reveal::register(2);
        // Viewport 600px: cutoff at 450. First block above it, second below.
        reveal.tick(&[200.0, 500.0], 600.0, 0.0);
        assert!(reveal.is_revealed(0));
        assert!(!reveal.is_revealed(1));
    }

    #[test]
    fn boundary_requires_strictly_less() {
        let mut reveal = Reveal::register(1);
        reveal.tick(&[450.0], 600.0, 0.0);
        assert!(!reveal.is_revealed(0));
        reveal.tick(&[449.9], 600.0, 0.0);
        assert!(reveal.is_revealed(0));
    }

    #[test]
    fn revealed_flag_is_monotone() {
        let mut reveal = Reveal::register(1);
        reveal.tick(&[0.0], 600.0, 1.0);
        assert!(reveal.is_revealed(0));
        // Scrolled far away again: the flag must hold.
        reveal.tick(&[5000.0], 600.0, 2.0);
        reveal.tick(&[-3000.0], 100.0, 3.0);
        assert!(reveal.is_revealed(0));
        // The first reveal time also holds, so the fade does not restart.
        assert_eq!(reveal.alpha(0, 1.0 + FADE_SECONDS), 1.0);
    }

    #[test]
    fn empty_registry_is_a_noop() {
        let mut reveal = Reveal::register(0);
        reveal.tick(&[], 600.0, 0.0);
        reveal.tick(&[100.0], 600.0, 0.0);
        assert!(reveal.is_empty());
    }

    #[test]
    fn fade_is_staggered_by_index() {
        let mut reveal = Reveal::register(3);
        reveal.tick(&[0.0, 0.0, 0.0], 600.0, 0.0);
        let t = FADE_SECONDS;
        // Block 0 has finished fading when block 1 still lags by one step.
        assert_eq!(reveal.alpha(0, t), 1.0);
        assert!(reveal.alpha(1, t) < 1.0);
        assert!(reveal.alpha(2, t) < reveal.alpha(1, t));
        // Everyone lands at full opacity eventually.
        let done = t + 3.0 * STAGGER_STEP;
        assert_eq!(reveal.alpha(2, done), 1.0);
    }

    #[test]
    fn mismatched_tops_are_ignored() {
        let mut reveal = Reveal::register(2);
        reveal.tick(&[0.0], 600.0, 0.0);
        assert!(reveal.is_revealed(0));
        assert!(!reveal.is_revealed(1));
        reveal.tick(&[0.0, 0.0, 0.0], 600.0, 0.0);
        assert!(reveal.is_revealed(1));
    }
}
