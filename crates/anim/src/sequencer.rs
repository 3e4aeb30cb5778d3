//! Sequencer: renders an ordered list of states into numbered frame files.
//!
//! Frame `i` always lands in `frame_{i:08}.png`, whatever order frames are
//! produced in. Each file is written to a `.tmp` sibling first and renamed
//! into place, so readers never observe a half-written frame.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::core::{check_uniform_dimensions, State};
use crate::error::{Result, SequenceError};
use crate::render::FrameView;
use crate::types::frame_file_name;

/// Called with the index of every frame once its file is in place
pub type ProgressFn = dyn Fn(usize) + Send + Sync;

pub struct Sequencer {
    view: FrameView,
    output_dir: PathBuf,
    parallel: bool,
    strict_dimensions: bool,
    cancel: Option<Arc<AtomicBool>>,
    progress: Option<Arc<ProgressFn>>,
}

impl Sequencer {
    pub fn new(view: FrameView, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            view,
            output_dir: output_dir.into(),
            parallel: false,
            strict_dimensions: false,
            cancel: None,
            progress: None,
        }
    }

    /// Render and write frames on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Treat differing board dimensions across the sequence as fatal.
    pub fn with_strict_dimensions(mut self, strict: bool) -> Self {
        self.strict_dimensions = strict;
        self
    }

    /// Stop before the next frame once `flag` is set.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Report each written frame to `progress`.
    pub fn with_progress(mut self, progress: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.progress = Some(Arc::new(progress));
        self
    }

    pub fn view(&self) -> &FrameView {
        &self.view
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(frame_file_name(index))
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|flag| flag.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    /// Render every state and write it to the output directory.
    ///
    /// Returns the number of frames written. In serial mode a cancelled run
    /// leaves exactly frames `0..n`; in parallel mode the written frames may
    /// not be contiguous.
    pub fn render_sequence(&self, states: &[State]) -> Result<usize> {
        if let Err(mismatch) = check_uniform_dimensions(states) {
            if self.strict_dimensions {
                return Err(mismatch.into());
            }
            warn!(%mismatch, "frame sizes will differ across the sequence");
        }

        fs::create_dir_all(&self.output_dir).map_err(|source| SequenceError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        info!(
            frames = states.len(),
            dir = %self.output_dir.display(),
            edge = self.view.edge(),
            parallel = self.parallel,
            "rendering sequence"
        );

        let written = if self.parallel {
            states
                .par_iter()
                .enumerate()
                .map(|(index, state)| self.write_unless_cancelled(index, state))
                .collect::<Result<Vec<bool>>>()?
                .into_iter()
                .filter(|&w| w)
                .count()
        } else {
            let mut written = 0;
            for (index, state) in states.iter().enumerate() {
                if !self.write_unless_cancelled(index, state)? {
                    break;
                }
                written += 1;
            }
            written
        };

        if written < states.len() {
            info!(written, total = states.len(), "sequence cancelled");
        }
        Ok(written)
    }

    fn write_unless_cancelled(&self, index: usize, state: &State) -> Result<bool> {
        if self.is_cancelled() {
            return Ok(false);
        }
        self.write_frame(index, state)?;
        if let Some(progress) = &self.progress {
            progress(index);
        }
        Ok(true)
    }

    /// Render `state` and persist it as frame `index`.
    pub fn write_frame(&self, index: usize, state: &State) -> Result<PathBuf> {
        let bytes = self
            .view
            .render(state)
            .and_then(|frame| frame.encode_png())
            .map_err(|source| SequenceError::Render { index, source })?;

        let path = self.frame_path(index);
        let tmp = path.with_extension("png.tmp");
        if let Err(source) = fs::write(&tmp, &bytes) {
            discard_temp(&tmp);
            return Err(SequenceError::Write {
                index,
                path: tmp,
                source,
            });
        }
        if let Err(source) = fs::rename(&tmp, &path) {
            discard_temp(&tmp);
            return Err(SequenceError::Write {
                index,
                path,
                source,
            });
        }

        debug!(index, path = %path.display(), bytes = bytes.len(), "wrote frame");
        Ok(path)
    }
}

/// Remove a leftover temporary frame; a file that never appeared is fine.
fn discard_temp(tmp: &Path) {
    if let Err(e) = fs::remove_file(tmp) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %tmp.display(), error = %e, "could not remove temporary frame");
        }
    }
}

/// Render `states` with `view` into `output_dir`, one numbered PNG each.
pub fn render_sequence(states: &[State], view: &FrameView, output_dir: &Path) -> Result<usize> {
    Sequencer::new(view.clone(), output_dir).render_sequence(states)
}
