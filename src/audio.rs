//! Music pause state and the streaming collaborator.

use tracing::debug;

/// A looping music stream owned by the audio backend.
pub trait MusicStream {
    /// Start playback from the beginning.
    fn play(&mut self);
    /// Pause without losing position. Idempotent.
    fn pause(&mut self);
    /// Continue after a pause. Idempotent.
    fn resume(&mut self);
    /// Feed the stream; called once per tick.
    fn update(&mut self);
}

/// Stream that plays nothing, used when there is no audio device or file.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentMusic;

impl MusicStream for SilentMusic {
    fn play(&mut self) {}
    fn pause(&mut self) {}
    fn resume(&mut self) {}
    fn update(&mut self) {}
}

/// Whether the player wants the music paused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AudioToggleState {
    /// Desired pause state.
    pub paused: bool,
}

impl AudioToggleState {
    /// Flip on a press edge; plain holds never get here.
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "music toggled");
    }

    /// Push the desired state to the stream. Runs every tick.
    pub fn apply(&self, stream: &mut dyn MusicStream) {
        stream.update();
        if self.paused {
            stream.pause();
        } else {
            stream.resume();
        }
    }
}
