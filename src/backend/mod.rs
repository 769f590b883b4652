//! Platform collaborators: macroquad for window, input and drawing, rodio
//! for music.

pub mod macroquad_backend;
#[cfg(feature = "sound")]
pub mod rodio_music;

use crate::audio::{MusicStream, SilentMusic};
use std::path::Path;
use tracing::{info, warn};

/// Open and start the background music, falling back to silence when the
/// file, the decoder or the audio device is unavailable.
pub fn open_music(path: Option<&Path>) -> Box<dyn MusicStream> {
    let Some(path) = path else {
        info!("music disabled");
        return Box::new(SilentMusic);
    };

    #[cfg(feature = "sound")]
    {
        match rodio_music::RodioMusic::open(path) {
            Ok(mut music) => {
                music.play();
                info!(path = %path.display(), "music playing");
                return Box::new(music);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "music unavailable, continuing silently");
            }
        }
    }

    #[cfg(not(feature = "sound"))]
    {
        info!(path = %path.display(), "built without sound, music skipped");
    }

    Box::new(SilentMusic)
}
