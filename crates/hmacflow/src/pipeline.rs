// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Three-stage HMAC pipeline over bounded queues.
//!
//! ```text
//!             key   ┌──────┐ ipad ┌───────────┐ inner ┌───────────┐ tag
//! requests ─┬──────▶│ kpad ├─────▶│ inner-hash├──────▶│ outer-hash├─────▶ sink
//!           │       └──┬───┘      └───────────┘       └───────────┘
//!           │  message │ opad          ▲                    ▲
//!           └──────────┼───────────────┘                    │
//!                      └────────────────────────────────────┘
//! ```
//!
//! Every queue is FIFO and every stage handles items in arrival order, so
//! tags leave in request order. Each queue ends with one `Frame::End`.
//! A stage whose neighbour disappears stops with `PipelineAborted`; the
//! batch reports the failure that caused it instead.

use core::fmt;
use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded};
use hmacflow_core::{Digest, HashPrimitive, WordWidth};
use tracing::{debug, trace, warn};

use crate::config::{HmacConfig, Strategy, validate_primitive};
use crate::engine::HmacEngine;
use crate::error::HmacError;
use crate::pads::{Pad, compute_pads};
use crate::request::{HmacRequest, KeyBytes};
use crate::stages::{inner_hash, outer_hash};

/// Pipeline stage, in data-flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Splits requests into key and message queues
    Feed,
    /// Stage A: key folding and pad derivation
    KeyPad,
    /// Stage B: `H((K' ⊕ ipad) || m)`
    InnerHash,
    /// Stage C: `H((K' ⊕ opad) || inner)`
    OuterHash,
}

impl Stage {
    /// All stages, in data-flow order
    pub const ALL: [Stage; 4] = [Stage::Feed, Stage::KeyPad, Stage::InnerHash, Stage::OuterHash];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feed => f.write_str("feed"),
            Self::KeyPad => f.write_str("kpad"),
            Self::InnerHash => f.write_str("inner-hash"),
            Self::OuterHash => f.write_str("outer-hash"),
        }
    }
}

enum Frame<T> {
    Item(T),
    End,
}

fn send<T>(tx: &Sender<Frame<T>>, frame: Frame<T>, stage: Stage) -> Result<(), HmacError> {
    tx.send(frame).map_err(|_| HmacError::PipelineAborted { stage })
}

fn recv<T>(rx: &Receiver<Frame<T>>, stage: Stage) -> Result<Frame<T>, HmacError> {
    rx.recv().map_err(|_| HmacError::PipelineAborted { stage })
}

/// HMAC engine running key folding, inner hash and outer hash as
/// concurrent stages.
///
/// Output is identical to [`crate::SequentialHmac`]; only the schedule
/// differs. Threads live for one batch.
///
/// # Example
///
/// ```
/// use hmacflow::{HmacConfig, HmacRequest, PipelinedHmac, Sha256};
///
/// let engine = PipelinedHmac::new(Sha256, &HmacConfig::default())?;
/// let tags = engine.compute_batch(vec![
///     HmacRequest::from_slices(b"k1", b"first"),
///     HmacRequest::from_slices(b"k2", b"second"),
/// ])?;
/// assert_eq!(tags.len(), 2);
/// # Ok::<(), hmacflow::HmacError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PipelinedHmac<H> {
    hash: H,
    width: WordWidth,
    depth: usize,
}

impl<H: HashPrimitive> PipelinedHmac<H> {
    /// Builds the engine; the config's strategy is ignored.
    ///
    /// # Errors
    /// See [`HmacConfig::validate`].
    pub fn new(hash: H, config: &HmacConfig) -> Result<Self, HmacError> {
        let width = config.validate::<H>()?;
        debug!(
            primitive = H::NAME,
            strategy = %Strategy::Pipelined,
            width_bits = width.bits(),
            queue_depth = config.queue_depth,
            "pipelined hmac engine ready"
        );
        Ok(Self {
            hash,
            width,
            depth: config.queue_depth,
        })
    }

    /// Builds the engine at `width` with queues of `depth` items.
    ///
    /// # Errors
    /// `HmacError::InvalidQueueDepth` for `depth == 0`, or when `H` cannot
    /// carry HMAC.
    pub fn with_params(hash: H, width: WordWidth, depth: usize) -> Result<Self, HmacError> {
        validate_primitive::<H>()?;
        if depth == 0 {
            return Err(HmacError::InvalidQueueDepth);
        }
        Ok(Self { hash, width, depth })
    }

    /// The hash primitive
    pub fn hash(&self) -> &H {
        &self.hash
    }

    /// Capacity of every inter-stage queue
    pub fn queue_depth(&self) -> usize {
        self.depth
    }

    /// HMAC of one pair, run through the pipeline as a batch of one
    pub fn compute(&self, key: &[u8], message: &[u8]) -> Result<Digest, HmacError> {
        let mut tag = None;
        self.compute_stream([HmacRequest::from_slices(key, message)], |digest| {
            tag = Some(digest)
        })?;
        tag.ok_or(HmacError::PipelineAborted {
            stage: Stage::OuterHash,
        })
    }

    /// HMACs of a batch, in request order
    pub fn compute_batch(&self, requests: Vec<HmacRequest>) -> Result<Vec<Digest>, HmacError> {
        let mut out = Vec::with_capacity(requests.len());
        self.compute_stream(requests, |digest| out.push(digest))?;
        Ok(out)
    }

    /// Streams `requests` through the pipeline, handing each tag to `sink`
    /// on the calling thread in request order.
    ///
    /// Returns the number of tags delivered. On failure, tags already
    /// delivered stay delivered and the first real failure is returned.
    ///
    /// # Errors
    /// - The first hash or key-folding error, in stage order
    /// - `HmacError::StagePanicked` if a stage thread panicked
    pub fn compute_stream<I, F>(&self, requests: I, mut sink: F) -> Result<usize, HmacError>
    where
        I: IntoIterator<Item = HmacRequest>,
        I::IntoIter: Send,
        F: FnMut(Digest),
    {
        let requests = requests.into_iter();
        let depth = self.depth;

        let (key_tx, key_rx) = bounded::<Frame<KeyBytes>>(depth);
        let (msg_tx, msg_rx) = bounded::<Frame<Vec<u8>>>(depth);
        let (ipad_tx, ipad_rx) = bounded::<Frame<Pad>>(depth);
        let (opad_tx, opad_rx) = bounded::<Frame<Pad>>(depth);
        let (inner_tx, inner_rx) = bounded::<Frame<Digest>>(depth);
        let (out_tx, out_rx) = bounded::<Frame<Digest>>(depth);

        let (delivered, results) = thread::scope(|s| {
            let feed = s.spawn(move || run_feed(requests, key_tx, msg_tx));
            let kpad = s.spawn(move || self.run_key_pad(key_rx, ipad_tx, opad_tx));
            let inner = s.spawn(move || self.run_inner(msg_rx, ipad_rx, inner_tx));
            let outer = s.spawn(move || self.run_outer(inner_rx, opad_rx, out_tx));

            let mut delivered = 0usize;
            while let Ok(Frame::Item(digest)) = out_rx.recv() {
                sink(digest);
                delivered += 1;
            }
            drop(out_rx);

            let results = [
                (Stage::Feed, feed.join()),
                (Stage::KeyPad, kpad.join()),
                (Stage::InnerHash, inner.join()),
                (Stage::OuterHash, outer.join()),
            ]
            .map(|(stage, joined)| match joined {
                Ok(result) => result,
                Err(_) => Err(HmacError::StagePanicked { stage }),
            });

            (delivered, results)
        });

        log_stage_failures(&results);
        if let Some(err) = first_failure(results) {
            warn!(primitive = H::NAME, delivered, error = %err, "hmac pipeline failed");
            return Err(err);
        }

        debug!(primitive = H::NAME, count = delivered, "hmac batch complete");
        Ok(delivered)
    }

    fn run_key_pad(
        &self,
        keys: Receiver<Frame<KeyBytes>>,
        ipads: Sender<Frame<Pad>>,
        opads: Sender<Frame<Pad>>,
    ) -> Result<(), HmacError> {
        let stage = Stage::KeyPad;
        trace!(%stage, "stage started");

        let mut processed = 0usize;
        loop {
            match recv(&keys, stage)? {
                Frame::Item(key) => {
                    let pads = compute_pads(&self.hash, self.width, key.as_bytes())?;
                    drop(key);
                    let (ipad, opad) = pads.split();
                    send(&ipads, Frame::Item(ipad), stage)?;
                    send(&opads, Frame::Item(opad), stage)?;
                    processed += 1;
                }
                Frame::End => {
                    send(&ipads, Frame::End, stage)?;
                    send(&opads, Frame::End, stage)?;
                    break;
                }
            }
        }

        trace!(%stage, processed, "stage stopped");
        Ok(())
    }

    fn run_inner(
        &self,
        messages: Receiver<Frame<Vec<u8>>>,
        ipads: Receiver<Frame<Pad>>,
        inners: Sender<Frame<Digest>>,
    ) -> Result<(), HmacError> {
        let stage = Stage::InnerHash;
        trace!(%stage, "stage started");

        let mut processed = 0usize;
        loop {
            match (recv(&messages, stage)?, recv(&ipads, stage)?) {
                (Frame::Item(message), Frame::Item(ipad)) => {
                    let inner = inner_hash(&self.hash, self.width, &ipad, &message)?;
                    send(&inners, Frame::Item(inner), stage)?;
                    processed += 1;
                }
                (Frame::End, Frame::End) => {
                    send(&inners, Frame::End, stage)?;
                    break;
                }
                _ => return Err(HmacError::PipelineAborted { stage }),
            }
        }

        trace!(%stage, processed, "stage stopped");
        Ok(())
    }

    fn run_outer(
        &self,
        inners: Receiver<Frame<Digest>>,
        opads: Receiver<Frame<Pad>>,
        tags: Sender<Frame<Digest>>,
    ) -> Result<(), HmacError> {
        let stage = Stage::OuterHash;
        trace!(%stage, "stage started");

        let mut processed = 0usize;
        loop {
            match (recv(&inners, stage)?, recv(&opads, stage)?) {
                (Frame::Item(inner), Frame::Item(opad)) => {
                    let tag = outer_hash(&self.hash, self.width, &opad, &inner)?;
                    send(&tags, Frame::Item(tag), stage)?;
                    processed += 1;
                }
                (Frame::End, Frame::End) => {
                    send(&tags, Frame::End, stage)?;
                    break;
                }
                _ => return Err(HmacError::PipelineAborted { stage }),
            }
        }

        trace!(%stage, processed, "stage stopped");
        Ok(())
    }
}

fn run_feed<I>(
    requests: I,
    keys: Sender<Frame<KeyBytes>>,
    messages: Sender<Frame<Vec<u8>>>,
) -> Result<(), HmacError>
where
    I: Iterator<Item = HmacRequest>,
{
    let stage = Stage::Feed;
    trace!(%stage, "stage started");

    let mut fed = 0usize;
    for request in requests {
        let HmacRequest { key, message } = request;
        send(&keys, Frame::Item(key), stage)?;
        send(&messages, Frame::Item(message), stage)?;
        fed += 1;
    }
    send(&keys, Frame::End, stage)?;
    send(&messages, Frame::End, stage)?;

    trace!(%stage, fed, "stage stopped");
    Ok(())
}

fn log_stage_failures(results: &[Result<(), HmacError>; 4]) {
    for (stage, result) in Stage::ALL.iter().zip(results) {
        match result {
            Err(err) if err.is_abort() => {
                warn!(%stage, error = %err, "hmac pipeline stage aborted");
            }
            Err(err) => warn!(%stage, error = %err, "hmac pipeline stage failed"),
            Ok(()) => {}
        }
    }
}

// Aborts only echo a failure elsewhere, so a real error always wins.
fn first_failure(results: [Result<(), HmacError>; 4]) -> Option<HmacError> {
    let mut abort = None;
    for err in results.into_iter().filter_map(Result::err) {
        if !err.is_abort() {
            return Some(err);
        }
        abort.get_or_insert(err);
    }
    abort
}

impl<H: HashPrimitive> HmacEngine for PipelinedHmac<H> {
    fn strategy(&self) -> Strategy {
        Strategy::Pipelined
    }

    fn primitive(&self) -> &'static str {
        H::NAME
    }

    fn digest_len(&self) -> usize {
        H::DIGEST_LEN
    }

    fn block_len(&self) -> usize {
        H::BLOCK_LEN
    }

    fn word_width(&self) -> WordWidth {
        self.width
    }

    fn compute(&self, key: &[u8], message: &[u8]) -> Result<Digest, HmacError> {
        PipelinedHmac::compute(self, key, message)
    }

    fn compute_batch(&self, requests: Vec<HmacRequest>) -> Result<Vec<Digest>, HmacError> {
        PipelinedHmac::compute_batch(self, requests)
    }
}
