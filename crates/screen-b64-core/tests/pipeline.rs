//! End-to-end tests for the capture pipeline.
//!
//! These drive every stage with synthetic displays and writers, then decode
//! the printed line the way a consumer would.

use std::io::{self, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use screen_b64_core::{
    DisplaySource, Error, PixelLayout, Pipeline, PngSettings, RasterBuffer, Result, Stage,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Fake display with a fixed gradient
struct GradientDisplay {
    width: u32,
    height: u32,
}

impl GradientDisplay {
    fn pixels(&self) -> Vec<u8> {
        let mut samples = Vec::with_capacity((self.width * self.height * 4) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                samples.extend_from_slice(&[
                    (x * 255 / self.width) as u8,
                    (y * 255 / self.height) as u8,
                    ((x + y) % 256) as u8,
                    0xFF,
                ]);
            }
        }
        samples
    }
}

impl DisplaySource for GradientDisplay {
    fn capture_primary(&self) -> Result<RasterBuffer> {
        RasterBuffer::new(self.width, self.height, PixelLayout::Rgba8, self.pixels())
    }

    fn name(&self) -> &str {
        "gradient"
    }
}

/// Fake display that is never reachable
struct HeadlessDisplay;

impl DisplaySource for HeadlessDisplay {
    fn capture_primary(&self) -> Result<RasterBuffer> {
        Err(Error::capture("cannot open display"))
    }
}

/// Fake display that hands back a truncated frame
struct TornFrameDisplay;

impl DisplaySource for TornFrameDisplay {
    fn capture_primary(&self) -> Result<RasterBuffer> {
        RasterBuffer::new(10, 10, PixelLayout::Rgba8, vec![0; 100])
    }
}

/// Writer whose reader has gone away
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

/// Writer that records each `write` call separately
#[derive(Default)]
struct ChunkRecorder {
    chunks: Vec<Vec<u8>>,
    flushed: bool,
}

impl Write for ChunkRecorder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.chunks.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed = true;
        Ok(())
    }
}

fn run_to_string<D: DisplaySource>(source: D) -> String {
    let mut out = Vec::new();
    Pipeline::new(source).run(&mut out).expect("pipeline failed");
    String::from_utf8(out).expect("output is not UTF-8")
}

#[test]
fn test_output_decodes_to_png_of_display_size() {
    init_logging();
    let display = GradientDisplay {
        width: 64,
        height: 48,
    };
    let expected = display.pixels();

    let output = run_to_string(&display);
    let line = output.strip_suffix('\n').expect("missing newline");

    let png = STANDARD.decode(line).expect("not valid Base64");
    let image = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .expect("not a valid PNG");
    assert_eq!(image.width(), 64);
    assert_eq!(image.height(), 48);
    assert_eq!(image.into_rgba8().into_raw(), expected);
}

#[test]
fn test_output_is_single_clean_line() {
    let output = run_to_string(GradientDisplay {
        width: 31,
        height: 17,
    });

    assert!(output.ends_with('\n'));
    let line = &output[..output.len() - 1];
    assert!(!line.is_empty());
    assert!(!line.contains('\n'));
    assert_eq!(line, line.trim());
    assert_eq!(line.len() % 4, 0);

    let body = line.trim_end_matches('=');
    assert!(line.len() - body.len() <= 2);
    assert!(body
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/'));
}

#[test]
fn test_round_trip_matches_png_bytes() {
    let pipeline = Pipeline::new(GradientDisplay {
        width: 20,
        height: 20,
    });
    let (text, summary) = pipeline.capture().unwrap();

    let png = text.decode().unwrap();
    assert_eq!(png.len(), summary.png_len);
    assert_eq!(STANDARD.encode(&png), text.as_str());
}

#[test]
fn test_repeated_runs_decode_to_identical_pixels() {
    let display = GradientDisplay {
        width: 40,
        height: 30,
    };

    let decode = |output: String| {
        let png = STANDARD.decode(output.trim_end()).unwrap();
        image::load_from_memory(&png).unwrap().into_rgba8().into_raw()
    };

    let first = decode(run_to_string(&display));
    let second = decode(run_to_string(&display));
    assert_eq!(first, second);
}

#[test]
fn test_encoder_settings_do_not_change_pixels() {
    let display = GradientDisplay {
        width: 25,
        height: 25,
    };

    let (fast, _) = Pipeline::new(&display)
        .with_settings(PngSettings::fast())
        .capture()
        .unwrap();
    let (default, _) = Pipeline::new(&display).capture().unwrap();

    let pixels = |png: Vec<u8>| image::load_from_memory(&png).unwrap().into_rgba8().into_raw();
    assert_eq!(
        pixels(fast.decode().unwrap()),
        pixels(default.decode().unwrap())
    );
}

#[test]
fn test_display_failure_writes_nothing() {
    let mut out = Vec::new();
    let err = Pipeline::new(HeadlessDisplay).run(&mut out).unwrap_err();

    assert_eq!(err.stage(), Stage::Capture);
    assert_ne!(err.exit_code(), 0);
    assert!(out.is_empty());
}

#[test]
fn test_torn_frame_is_capture_failure() {
    let mut out = Vec::new();
    let err = Pipeline::new(TornFrameDisplay).run(&mut out).unwrap_err();

    assert!(matches!(err, Error::CaptureUnavailable { .. }));
    assert!(out.is_empty());
}

#[test]
fn test_closed_pipe_is_output_failure() {
    let err = Pipeline::new(GradientDisplay {
        width: 8,
        height: 8,
    })
    .run(ClosedPipe)
    .unwrap_err();

    assert_eq!(err.stage(), Stage::Output);
    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_line_is_handed_over_in_one_write() {
    let mut recorder = ChunkRecorder::default();
    let summary = Pipeline::new(GradientDisplay {
        width: 12,
        height: 9,
    })
    .run(&mut recorder)
    .unwrap();

    assert!(recorder.flushed);
    assert_eq!(recorder.chunks.len(), 1);
    let chunk = &recorder.chunks[0];
    assert_eq!(chunk.len(), summary.base64_len + 1);
    assert_eq!(chunk.last(), Some(&b'\n'));
}
