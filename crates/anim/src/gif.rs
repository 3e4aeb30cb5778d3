//! Animated GIF assembly of a whole sequence.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame as GifFrame};
use tracing::info;

use crate::core::State;
use crate::error::{Result, SequenceError};
use crate::sequencer::Sequencer;

/// Default delay between GIF frames
pub const DEFAULT_GIF_DELAY_MS: u32 = 250;

impl Sequencer {
    /// Encode every state, in order, as one looping GIF at `path`.
    ///
    /// Returns the number of frames encoded. Honors the cancel flag between
    /// frames; a cancelled run still leaves a valid, shorter GIF.
    pub fn write_gif(&self, states: &[State], path: &Path, delay_ms: u32) -> Result<usize> {
        let gif_error = |index, source| SequenceError::Gif {
            index,
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(|source| SequenceError::GifCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let mut encoded = 0;
        {
            let mut encoder = GifEncoder::new(&mut writer);
            encoder
                .set_repeat(Repeat::Infinite)
                .map_err(|source| gif_error(0, source))?;

            for (index, state) in states.iter().enumerate() {
                if self.is_cancelled() {
                    break;
                }
                let frame = self
                    .view()
                    .render(state)
                    .map_err(|source| SequenceError::Render { index, source })?;
                let rgba = DynamicImage::ImageRgb8(frame.into_image()).into_rgba8();
                let frame = GifFrame::from_parts(rgba, 0, 0, Delay::from_numer_denom_ms(delay_ms, 1));
                encoder
                    .encode_frame(frame)
                    .map_err(|source| gif_error(index, source))?;
                encoded += 1;
            }
        }

        writer.flush().map_err(|source| SequenceError::GifCreate {
            path: path.to_path_buf(),
            source,
        })?;

        info!(frames = encoded, path = %path.display(), "wrote gif");
        Ok(encoded)
    }
}
