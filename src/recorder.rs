//! Animated GIF screen recorder
//!
//! Frames are buffered in memory and written out in small numbered batch
//! files (`part_gif1.gif`, `part_gif2.gif`, ...) so a long recording never
//! holds more than one batch of raw frames. `finalize` stitches the batches
//! into a single `res.gif` and removes them.

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use image::codecs::gif::{GifDecoder, GifEncoder, Repeat};
use image::{AnimationDecoder, Delay, Frame, ImageError, RgbaImage};
use thiserror::Error;

use crate::consts::{FLUSH_THRESHOLD, GIF_FRAME_DELAY_MS};
use crate::renderer::frame_len;
use crate::settings::Settings;

const BATCH_PREFIX: &str = "part_gif";
const BATCH_EXT: &str = ".gif";
const RESULT_NAME: &str = "res.gif";
/// NeuQuant speed for GIF palette quantization (1 = best, 30 = fastest)
const QUANTIZE_SPEED: i32 = 10;

#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("recorder I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("GIF codec error: {0}")]
    Codec(#[from] ImageError),
    #[error("frame is {actual} bytes, expected {expected}")]
    FrameSize { expected: usize, actual: usize },
    #[error("cannot read batch number from {0}")]
    BatchName(PathBuf),
}

pub struct FrameRecorder {
    dir: PathBuf,
    width: u32,
    height: u32,
    /// Bytes expected per captured frame
    frame_len: usize,
    frames: Vec<RgbaImage>,
    /// Number used for the next batch file
    batch_number: u32,
    flush_threshold: usize,
    frame_delay_ms: u32,
}

impl FrameRecorder {
    pub fn new(dir: impl Into<PathBuf>, width: u32, height: u32) -> Self {
        Self {
            dir: dir.into(),
            width,
            height,
            frame_len: frame_len(width, height),
            frames: Vec::new(),
            batch_number: 1,
            flush_threshold: FLUSH_THRESHOLD,
            frame_delay_ms: GIF_FRAME_DELAY_MS,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(&settings.recording_dir, settings.width, settings.height)
            .with_flush_threshold(settings.flush_threshold)
            .with_frame_delay_ms(settings.frame_delay_ms)
    }

    pub fn with_flush_threshold(mut self, threshold: usize) -> Self {
        self.flush_threshold = threshold.max(1);
        self
    }

    pub fn with_frame_delay_ms(mut self, delay_ms: u32) -> Self {
        self.frame_delay_ms = delay_ms;
        self
    }

    pub fn pending(&self) -> usize {
        self.frames.len()
    }

    pub fn result_path(&self) -> PathBuf {
        self.dir.join(RESULT_NAME)
    }

    /// Buffer one raw RGBA frame, flushing a batch once enough have piled up
    pub fn capture(&mut self, rgba: &[u8]) -> Result<(), RecorderError> {
        let image = (rgba.len() == self.frame_len)
            .then(|| RgbaImage::from_raw(self.width, self.height, rgba.to_vec()))
            .flatten()
            .ok_or(RecorderError::FrameSize {
                expected: self.frame_len,
                actual: rgba.len(),
            })?;
        self.frames.push(image);

        if self.frames.len() >= self.flush_threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Write the pending frames as the next batch file
    pub fn flush(&mut self) -> Result<(), RecorderError> {
        if self.frames.is_empty() {
            return Ok(());
        }
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{BATCH_PREFIX}{}{BATCH_EXT}", self.batch_number));

        let delay = Delay::from_numer_denom_ms(self.frame_delay_ms, 1);
        let frames = self
            .frames
            .drain(..)
            .map(|image| Frame::from_parts(image, 0, 0, delay));
        write_gif(&path, frames, Repeat::Finite(1))?;

        log::debug!("Wrote batch {}", path.display());
        self.batch_number += 1;
        Ok(())
    }

    /// Merge every batch file into the result GIF and delete the batches.
    ///
    /// Pending frames are flushed first. Returns the result path, or `None`
    /// when there was nothing to merge (including a missing directory).
    pub fn finalize(&mut self) -> Result<Option<PathBuf>, RecorderError> {
        self.flush()?;

        let batches = match list_batches(&self.dir) {
            Ok(batches) => batches,
            Err(RecorderError::Io(e)) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };
        if batches.is_empty() {
            return Ok(None);
        }

        let mut frames = Vec::new();
        for path in &batches {
            let decoder = GifDecoder::new(BufReader::new(File::open(path)?))?;
            frames.extend(decoder.into_frames().collect_frames()?);
        }
        let total = frames.len();

        let result = self.result_path();
        write_gif(&result, frames, Repeat::Infinite)?;
        for path in &batches {
            fs::remove_file(path)?;
        }

        log::info!(
            "GIF saved to {} ({} frames from {} batches)",
            result.display(),
            total,
            batches.len()
        );
        Ok(Some(result))
    }

    /// Run `body` with this recorder, then finalize on every exit path.
    ///
    /// An error from `body` takes precedence; a finalize error in that case
    /// is only logged.
    pub fn session<T, E, F>(mut self, body: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
        E: From<RecorderError>,
    {
        let outcome = body(&mut self);
        let finalized = self.finalize();
        match (outcome, finalized) {
            (Ok(value), Ok(_)) => Ok(value),
            (Ok(_), Err(e)) => Err(e.into()),
            (Err(e), Ok(_)) => Err(e),
            (Err(e), Err(finalize_err)) => {
                log::error!("Recorder finalize failed: {finalize_err}");
                Err(e)
            }
        }
    }
}

fn write_gif<I>(path: &Path, frames: I, repeat: Repeat) -> Result<(), RecorderError>
where
    I: IntoIterator<Item = Frame>,
{
    let file = File::create(path)?;
    let mut encoder = GifEncoder::new_with_speed(file, QUANTIZE_SPEED);
    encoder.set_repeat(repeat)?;
    encoder.encode_frames(frames)?;
    Ok(())
}

/// Parse `N` out of `part_gifN.gif`. `None` for files that aren't batches.
fn batch_number(path: &Path) -> Option<Result<u32, RecorderError>> {
    let name = path.file_name()?.to_str()?;
    let rest = name.strip_prefix(BATCH_PREFIX)?;
    Some(
        rest.strip_suffix(BATCH_EXT)
            .and_then(|n| n.parse().ok())
            .ok_or_else(|| RecorderError::BatchName(path.to_path_buf())),
    )
}

/// Batch files in `dir`, ordered by batch number (numeric, not lexical)
fn list_batches(dir: &Path) -> Result<Vec<PathBuf>, RecorderError> {
    let mut batches = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(number) = batch_number(&path) {
            batches.push((number?, path));
        }
    }
    batches.sort_by_key(|(number, _)| *number);
    Ok(batches.into_iter().map(|(_, path)| path).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 8;
    const H: u32 = 6;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "bouncing-balls-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn frame(shade: u8) -> Vec<u8> {
        [shade, 255 - shade, 128, 255].repeat((W * H) as usize)
    }

    fn frame_count(path: &Path) -> usize {
        let decoder = GifDecoder::new(BufReader::new(File::open(path).unwrap())).unwrap();
        decoder.into_frames().collect_frames().unwrap().len()
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_batches_of_ten() {
        let dir = scratch_dir("batches");
        let mut recorder = FrameRecorder::new(&dir, W, H).with_flush_threshold(10);

        for i in 0..25u8 {
            recorder.capture(&frame(i * 10)).unwrap();
        }
        assert_eq!(names(&dir), ["part_gif1.gif", "part_gif2.gif"]);
        assert_eq!(recorder.pending(), 5);

        recorder.flush().unwrap();
        assert_eq!(recorder.pending(), 0);
        assert_eq!(frame_count(&dir.join("part_gif1.gif")), 10);
        assert_eq!(frame_count(&dir.join("part_gif2.gif")), 10);
        assert_eq!(frame_count(&dir.join("part_gif3.gif")), 5);

        let result = recorder.finalize().unwrap().unwrap();
        assert_eq!(result, dir.join("res.gif"));
        assert_eq!(names(&dir), ["res.gif"]);
        assert_eq!(frame_count(&result), 25);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_finalize_flushes_pending_frames() {
        let dir = scratch_dir("pending");
        let mut recorder = FrameRecorder::new(&dir, W, H).with_flush_threshold(10);
        for i in 0..3u8 {
            recorder.capture(&frame(i)).unwrap();
        }
        let result = recorder.finalize().unwrap().unwrap();
        assert_eq!(frame_count(&result), 3);
        assert_eq!(names(&dir), ["res.gif"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_finalize_without_frames_is_noop() {
        let dir = scratch_dir("empty");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), b"keep me").unwrap();

        let mut recorder = FrameRecorder::new(&dir, W, H);
        assert!(recorder.finalize().unwrap().is_none());
        assert_eq!(names(&dir), ["notes.txt"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_finalize_missing_dir_is_noop() {
        let dir = scratch_dir("missing");
        let mut recorder = FrameRecorder::new(&dir, W, H);
        assert!(recorder.finalize().unwrap().is_none());
        assert!(!dir.exists());
    }

    #[test]
    fn test_batch_order_is_numeric() {
        let dir = scratch_dir("order");
        fs::create_dir_all(&dir).unwrap();
        for n in [10, 2, 1] {
            fs::write(dir.join(format!("part_gif{n}.gif")), b"").unwrap();
        }
        fs::write(dir.join("res.gif"), b"").unwrap();

        let order: Vec<String> = list_batches(&dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(order, ["part_gif1.gif", "part_gif2.gif", "part_gif10.gif"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bad_batch_name_is_an_error() {
        let dir = scratch_dir("badname");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("part_gif_old.gif"), b"").unwrap();

        let mut recorder = FrameRecorder::new(&dir, W, H);
        assert!(matches!(
            recorder.finalize(),
            Err(RecorderError::BatchName(_))
        ));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_wrong_frame_size_rejected() {
        let dir = scratch_dir("size");
        let mut recorder = FrameRecorder::new(&dir, W, H);
        let err = recorder.capture(&[0u8; 7]).unwrap_err();
        assert!(matches!(
            err,
            RecorderError::FrameSize {
                expected: 192,
                actual: 7
            }
        ));
        assert_eq!(recorder.pending(), 0);

        let oversized = vec![0u8; frame_len(W, H) + 4];
        assert!(recorder.capture(&oversized).is_err());
        assert_eq!(recorder.pending(), 0);
    }

    #[test]
    fn test_frame_size_matches_canvas() {
        let dir = scratch_dir("canvas");
        let mut recorder = FrameRecorder::new(&dir, W, H).with_flush_threshold(100);
        let canvas = crate::renderer::Canvas::new(W, H);
        assert_eq!(canvas.as_bytes().len(), frame_len(W, H));
        recorder.capture(canvas.as_bytes()).unwrap();
        assert_eq!(recorder.pending(), 1);
    }

    #[test]
    fn test_session_finalizes_after_failure() {
        #[derive(Debug)]
        enum BodyError {
            Quit,
            Recorder(RecorderError),
        }
        impl From<RecorderError> for BodyError {
            fn from(e: RecorderError) -> Self {
                BodyError::Recorder(e)
            }
        }

        let dir = scratch_dir("session");
        let recorder = FrameRecorder::new(&dir, W, H);
        let outcome: Result<(), BodyError> = recorder.session(|rec| {
            rec.capture(&frame(1))?;
            rec.capture(&frame(2))?;
            Err(BodyError::Quit)
        });

        assert!(matches!(outcome, Err(BodyError::Quit)));
        assert_eq!(frame_count(&dir.join("res.gif")), 2);

        fs::remove_dir_all(&dir).unwrap();
    }
}
