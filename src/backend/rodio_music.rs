//! Looping background music on a rodio sink.

use crate::audio::MusicStream;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

/// Why the music stream could not be opened.
#[derive(Debug, Error)]
pub enum MusicError {
    /// No usable output device.
    #[error("no audio output device: {0}")]
    Device(#[from] rodio::StreamError),
    /// The sink could not be created on the device.
    #[error("cannot create audio sink: {0}")]
    Sink(#[from] rodio::PlayError),
    /// The file could not be opened.
    #[error("cannot open music file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not a supported audio format.
    #[error("cannot decode music file: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

/// Looping music streamed through a rodio [`Sink`].
///
/// Decoding happens on rodio's mixer thread; the game only flips the
/// sink between playing and paused.
pub struct RodioMusic {
    _stream: OutputStream,
    _handle: OutputStreamHandle,
    sink: Sink,
}

impl RodioMusic {
    /// Open `path` on the default device. Starts paused until
    /// [`MusicStream::play`].
    pub fn open(path: &Path) -> Result<Self, MusicError> {
        let (stream, handle) = OutputStream::try_default()?;
        let file = File::open(path)?;
        let source = Decoder::new_looped(BufReader::new(file))?;
        let sink = Sink::try_new(&handle)?;
        sink.pause();
        sink.append(source);

        Ok(Self {
            _stream: stream,
            _handle: handle,
            sink,
        })
    }
}

impl MusicStream for RodioMusic {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        if !self.sink.is_paused() {
            self.sink.pause();
        }
    }

    fn resume(&mut self) {
        if self.sink.is_paused() {
            self.sink.play();
        }
    }

    // the mixer thread keeps the sink fed
    fn update(&mut self) {}
}
