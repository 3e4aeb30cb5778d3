//! Frame sequencing: states in, numbered image files out.
//!
//! [`Sequencer`] renders each state with a [`FrameView`](hexplot_render::FrameView)
//! and writes it as `frame_00000000.png`, `frame_00000001.png`, ... so that
//! lexical and temporal order agree. It can optionally render on the rayon
//! pool, stop early through a shared cancel flag, and assemble the sequence
//! into a looping GIF.

pub mod error;
pub mod gif;
pub mod sequencer;

pub use hexplot_core as core;
pub use hexplot_render as render;
pub use hexplot_types as types;

pub use error::SequenceError;
pub use gif::DEFAULT_GIF_DELAY_MS;
pub use sequencer::{render_sequence, ProgressFn, Sequencer};
