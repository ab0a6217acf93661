/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The body type shared by requests and responses
//!
//! Request bodies are always built in memory. Response bodies arrive as a hyper stream and are
//! read in full before a handler sees them.

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use http_body::{Body, SizeHint};
use std::error::Error;
use std::fmt;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

pub struct SdkBody(Source);

enum Source {
    /// Yielded as a single chunk, then left empty
    Buffered(Bytes),
    Streaming(hyper::Body),
    /// Moved out for loading; polling this is a bug
    Taken,
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody(Source::Buffered(Bytes::new()))
    }

    /// Placeholder left behind when a response body is moved out to be read
    pub fn taken() -> Self {
        SdkBody(Source::Taken)
    }

    /// The contents of an in-memory body; `None` for a stream
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Source::Buffered(bytes) => Some(bytes),
            Source::Streaming(_) | Source::Taken => None,
        }
    }
}

impl fmt::Debug for SdkBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Source::Buffered(bytes) => f.debug_tuple("Buffered").field(bytes).finish(),
            Source::Streaming(_) => f.write_str("Streaming"),
            Source::Taken => f.write_str("Taken"),
        }
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody(Source::Buffered(bytes))
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        Bytes::copy_from_slice(s.as_bytes()).into()
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        Bytes::from(s).into()
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Bytes::from(data).into()
    }
}

impl From<hyper::Body> for SdkBody {
    fn from(body: hyper::Body) -> Self {
        SdkBody(Source::Streaming(body))
    }
}

impl Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        match &mut self.0 {
            Source::Buffered(bytes) => {
                let chunk = std::mem::take(bytes);
                Poll::Ready(if chunk.is_empty() { None } else { Some(Ok(chunk)) })
            }
            Source::Streaming(body) => Pin::new(body).poll_data(cx).map_err(Into::into),
            Source::Taken => Poll::Ready(Some(Err("polled a body that was already taken".into()))),
        }
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match &self.0 {
            Source::Buffered(bytes) => bytes.is_empty(),
            Source::Streaming(body) => body.is_end_stream(),
            Source::Taken => true,
        }
    }

    fn size_hint(&self) -> SizeHint {
        match &self.0 {
            Source::Buffered(bytes) => SizeHint::with_exact(bytes.len() as u64),
            Source::Streaming(body) => body.size_hint(),
            Source::Taken => SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[test]
    fn in_memory_bodies_know_their_length() {
        assert_eq!(SdkBody::from("hello").size_hint().exact(), Some(5));
        assert_eq!(SdkBody::empty().size_hint().exact(), Some(0));
        assert!(SdkBody::empty().is_end_stream());
        assert!(format!("{:?}", SdkBody::from("123")).starts_with("Buffered"));
    }

    #[tokio::test]
    async fn buffered_bodies_yield_one_chunk() {
        let mut body = SdkBody::from(r#"{"Id":"ns-1"}"#);
        let chunk = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(&chunk[..], br#"{"Id":"ns-1"}"#);
        assert!(body.data().await.is_none());
        assert_eq!(body.bytes(), Some(&b""[..]));
    }

    #[tokio::test]
    async fn streaming_bodies_are_read_to_the_end() {
        let mut body = SdkBody::from(hyper::Body::from("streamed"));
        assert_eq!(body.bytes(), None);
        let chunk = body.data().await.expect("one chunk").expect("no error");
        assert_eq!(&chunk[..], b"streamed");
        assert!(body.data().await.is_none());
    }

    #[tokio::test]
    async fn taken_bodies_fail_when_polled() {
        let mut body = SdkBody::taken();
        assert!(body.data().await.expect("an error").is_err());
    }
}
