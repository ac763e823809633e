//! JSON-lines frame input and event output.
//!
//! One camera frame per line, as emitted by a MediaPipe-style detector:
//!
//! ```text
//! {"hands":[{"handedness":"Right","score":0.93,"landmarks":[{"x":0.5,"y":0.4,"z":0.0}, ...]}]}
//! ```

use std::io::{BufRead, Write};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::engine::{CandidateHand, Classifier, SignEvent};
use crate::hand::{Handedness, Landmark};

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("line {line}: invalid frame: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("stream i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
struct LandmarkJson {
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
}

#[derive(Debug, Deserialize)]
struct HandJson {
    #[serde(default)]
    handedness: Option<String>,
    landmarks: Vec<LandmarkJson>,
}

#[derive(Debug, Deserialize)]
struct FrameJson {
    #[serde(default)]
    hands: Vec<HandJson>,
}

impl From<HandJson> for CandidateHand {
    fn from(hand: HandJson) -> Self {
        let handedness = hand.handedness.as_deref().and_then(|h| {
            let parsed = Handedness::parse(h);
            if parsed.is_none() {
                debug!("ignoring unknown handedness {:?}", h);
            }
            parsed
        });
        Self {
            handedness,
            landmarks: hand
                .landmarks
                .into_iter()
                .map(|lm| Landmark::new(lm.x, lm.y, lm.z))
                .collect(),
        }
    }
}

/// Parse one raw input line. Blank lines yield `Ok(None)`.
///
/// Bytes that are not valid UTF-8 surface as a JSON error for that line.
pub fn parse_line(line: usize, raw: &[u8]) -> Result<Option<Vec<CandidateHand>>, FrameError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    let frame: FrameJson =
        serde_json::from_slice(raw).map_err(|source| FrameError::Json { line, source })?;
    Ok(Some(frame.hands.into_iter().map(CandidateHand::from).collect()))
}

/// How events are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `(:type :event :event :sign-detected ...)` plists.
    #[default]
    Sexp,
    /// Bare labels.
    Text,
}

impl OutputFormat {
    pub fn render(&self, event: &SignEvent) -> String {
        match self {
            Self::Sexp => event.to_sexp(),
            Self::Text => event.label.to_string(),
        }
    }
}

/// Counters for one processed stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub frames: usize,
    pub skipped: usize,
    pub events: usize,
}

/// Classify every frame read from `reader`, writing one line per event.
///
/// Lines that fail to parse are logged and skipped. Only I/O failures
/// end the stream early.
pub fn run_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    classifier: &Classifier,
    format: OutputFormat,
) -> Result<StreamStats, FrameError> {
    let mut stats = StreamStats::default();
    let mut buf = Vec::new();
    let mut line = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line += 1;
        let hands = match parse_line(line, &buf) {
            Ok(Some(hands)) => hands,
            Ok(None) => continue,
            Err(e) => {
                warn!("{}", e);
                stats.skipped += 1;
                continue;
            }
        };
        stats.frames += 1;

        for event in classifier.process_frame(&hands) {
            writeln!(writer, "{}", format.render(&event))?;
            stats.events += 1;
        }
    }

    writer.flush()?;
    info!(
        frames = stats.frames,
        skipped = stats.skipped,
        events = stats.events,
        "input stream finished"
    );
    Ok(stats)
}
