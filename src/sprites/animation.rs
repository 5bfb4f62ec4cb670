//! Visual states and frame-cycling playback.
//!
//! Frames are opaque handles supplied by whoever loads the art; playback only
//! tracks which index is current.

/// Animation states for the player, derived from physical state each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
    WallSlide,
    Roll,
    Climb,
}

impl VisualState {
    pub const ALL: [VisualState; 7] = [
        VisualState::Idle,
        VisualState::Run,
        VisualState::Jump,
        VisualState::Fall,
        VisualState::WallSlide,
        VisualState::Roll,
        VisualState::Climb,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Asset folder / manifest key for this state.
    pub fn name(self) -> &'static str {
        match self {
            VisualState::Idle => "idle",
            VisualState::Run => "run",
            VisualState::Jump => "jump",
            VisualState::Fall => "fall",
            VisualState::WallSlide => "wall_slide",
            VisualState::Roll => "roll",
            VisualState::Climb => "climb",
        }
    }

    /// Milliseconds per frame and whether the animation loops.
    pub fn timing(self) -> (f32, bool) {
        match self {
            VisualState::Idle => (250.0, true),
            VisualState::Run => (167.0, true),
            VisualState::Jump | VisualState::Roll => (250.0, false),
            VisualState::Fall => (200.0, true),
            VisualState::WallSlide | VisualState::Climb => (250.0, true),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Animation<F> {
    frames: Vec<F>,
    frame_duration_ms: f32,
    looping: bool,
    current_frame: usize,
    elapsed_ms: f32,
    finished: bool,
}

impl<F> Animation<F> {
    pub fn new(frames: Vec<F>, frame_duration_ms: f32, looping: bool) -> Self {
        Self {
            frames,
            frame_duration_ms,
            looping,
            current_frame: 0,
            elapsed_ms: 0.0,
            finished: false,
        }
    }

    /// Accumulates time and steps one frame once the duration is exceeded.
    ///
    /// The accumulator restarts from zero rather than carrying the remainder,
    /// so a frame can stay on screen up to one extra tick.
    pub fn advance(&mut self, elapsed_ms: f32) {
        if self.frames.is_empty() || self.finished {
            return;
        }

        self.elapsed_ms += elapsed_ms;
        if self.elapsed_ms <= self.frame_duration_ms {
            return;
        }

        self.elapsed_ms = 0.0;
        self.current_frame += 1;

        if self.current_frame >= self.frames.len() {
            if self.looping {
                self.current_frame = 0;
            } else {
                self.current_frame = self.frames.len() - 1;
                self.finished = true;
            }
        }
    }

    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.elapsed_ms = 0.0;
        self.finished = false;
    }

    pub fn current_frame(&self) -> Option<&F> {
        self.frames.get(self.current_frame)
    }

    pub fn frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// One animation per visual state, built once.
#[derive(Debug, Clone)]
pub struct AnimationSet<F> {
    animations: [Animation<F>; 7],
}

impl<F> AnimationSet<F> {
    /// Builds every state's animation from the frames `frames_for` returns,
    /// using the per-state timing.
    pub fn from_fn(mut frames_for: impl FnMut(VisualState) -> Vec<F>) -> Self {
        Self {
            animations: VisualState::ALL.map(|state| {
                let (duration, looping) = state.timing();
                Animation::new(frames_for(state), duration, looping)
            }),
        }
    }

    pub fn get(&self, state: VisualState) -> &Animation<F> {
        &self.animations[state.index()]
    }

    pub fn get_mut(&mut self, state: VisualState) -> &mut Animation<F> {
        &mut self.animations[state.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_advances_only_after_duration_exceeded() {
        let mut anim = Animation::new(vec!['a', 'b', 'c'], 100.0, true);

        anim.advance(100.0);
        assert_eq!(anim.frame_index(), 0);

        anim.advance(1.0);
        assert_eq!(anim.frame_index(), 1);
        assert_eq!(anim.current_frame(), Some(&'b'));
    }

    #[test]
    fn test_accumulator_drops_remainder() {
        let mut anim = Animation::new(vec![0, 1, 2], 100.0, true);

        anim.advance(150.0);
        assert_eq!(anim.frame_index(), 1);

        // 50 ms of the previous tick is not carried over.
        anim.advance(60.0);
        assert_eq!(anim.frame_index(), 1);
    }

    #[test]
    fn test_looping_wraps_to_start() {
        let mut anim = Animation::new(vec![0, 1], 10.0, true);
        anim.advance(11.0);
        anim.advance(11.0);
        assert_eq!(anim.frame_index(), 0);
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_non_looping_clamps_and_finishes() {
        let mut anim = Animation::new(vec![0, 1], 10.0, false);
        anim.advance(11.0);
        assert!(!anim.is_finished());
        anim.advance(11.0);
        assert_eq!(anim.frame_index(), 1);
        assert!(anim.is_finished());

        anim.advance(11.0);
        assert_eq!(anim.frame_index(), 1);

        anim.reset();
        assert_eq!(anim.frame_index(), 0);
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_empty_animation_is_inert() {
        let mut anim: Animation<u8> = Animation::new(Vec::new(), 10.0, false);
        anim.advance(100.0);
        assert_eq!(anim.current_frame(), None);
        assert!(!anim.is_finished());
    }

    #[test]
    fn test_set_uses_state_timing() {
        let set = AnimationSet::from_fn(|state| vec![state.name()]);
        assert_eq!(set.get(VisualState::Climb).current_frame(), Some(&"climb"));
        assert_eq!(set.get(VisualState::Run).len(), 1);

        let mut set = AnimationSet::from_fn(|_| vec![0, 1]);
        set.get_mut(VisualState::Jump).advance(251.0);
        set.get_mut(VisualState::Jump).advance(251.0);
        assert!(set.get(VisualState::Jump).is_finished());
        set.get_mut(VisualState::Idle).advance(251.0);
        set.get_mut(VisualState::Idle).advance(251.0);
        assert!(!set.get(VisualState::Idle).is_finished());
    }
}
