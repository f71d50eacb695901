//! Orientation host fed by JSON lines
//!
//! Each line is one orientation event in the browser's field names, e.g.
//! `{"alpha": 42.0}` or `{"webkitCompassHeading": 318.5}`. Used by the CLI
//! to replay sensor captures or pipe in live readings.

use std::io;

use futures::StreamExt;
use log::warn;
use tokio::io::AsyncRead;
use tokio_util::{
    bytes::BytesMut,
    codec::{Decoder, FramedRead, LinesCodec, LinesCodecError},
};

use super::{
    Capability, OrientationListener, OrientationPlatform, PermissionState, PlatformError, Result,
};
use crate::orientation::OrientationEvent;

/// Longest accepted line in bytes; longer lines are dropped whole.
pub const MAX_LINE_LENGTH: usize = 4096;

type Line = core::result::Result<String, LinesCodecError>;

/// `LinesCodec` that hands bad lines (invalid UTF-8, over-long) back as
/// `Err` items, so the stream keeps going past them.
struct TolerantLines {
    inner: LinesCodec,
}

fn tolerate(
    decoded: core::result::Result<Option<String>, LinesCodecError>,
) -> core::result::Result<Option<Line>, LinesCodecError> {
    match decoded {
        Ok(line) => Ok(line.map(Ok)),
        Err(e @ LinesCodecError::MaxLineLengthExceeded) => Ok(Some(Err(e))),
        Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
            Ok(Some(Err(LinesCodecError::Io(e))))
        }
        Err(e) => Err(e),
    }
}

impl Decoder for TolerantLines {
    type Item = Line;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> core::result::Result<Option<Line>, Self::Error> {
        tolerate(self.inner.decode(buf))
    }

    fn decode_eof(
        &mut self,
        buf: &mut BytesMut,
    ) -> core::result::Result<Option<Line>, Self::Error> {
        tolerate(self.inner.decode_eof(buf))
    }
}

pub struct LineOrientation<R> {
    lines: FramedRead<R, TolerantLines>,
    listeners: Vec<OrientationListener>,
}

impl<R: AsyncRead + Unpin> LineOrientation<R> {
    pub fn new(reader: R) -> Self {
        let codec = TolerantLines {
            inner: LinesCodec::new_with_max_length(MAX_LINE_LENGTH),
        };
        Self {
            lines: FramedRead::new(reader, codec),
            listeners: Vec::new(),
        }
    }

    /// Returns the number of events delivered.
    pub async fn run(&mut self) -> anyhow::Result<usize> {
        let mut delivered = 0;
        while let Some(line) = self.lines.next().await {
            let line = match line? {
                Ok(line) => line,
                Err(e) => {
                    warn!("skipping unreadable orientation line: {e}");
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            let event: OrientationEvent = match serde_json::from_str(&line) {
                Ok(event) => event,
                Err(e) => {
                    warn!("skipping orientation line {line:?}: {e}");
                    continue;
                }
            };
            for listener in self.listeners.iter_mut() {
                listener(&event);
            }
            delivered += 1;
        }
        Ok(delivered)
    }
}

impl<R: AsyncRead + Unpin> OrientationPlatform for LineOrientation<R> {
    fn permission_request(&self) -> Capability {
        Capability::Unsupported
    }

    fn orientation_events(&self) -> Capability {
        Capability::Supported
    }

    async fn request_permission(&mut self) -> Result<PermissionState> {
        Err(PlatformError::Unsupported)
    }

    fn add_orientation_listener(&mut self, listener: OrientationListener) {
        self.listeners.push(listener);
    }
}
