//! Growable byte store with a single read/write cursor.
//!
//! The backing `Vec<u8>` is kept fully initialised: its length *is* the
//! buffer capacity, and reads are bounded by it. Writes past the end grow
//! the store by doubling before any byte is copied, so a write is never
//! partial. `reset` zeroes every byte written since the last reset, so a
//! recycled buffer never carries an earlier payload forward.

use crate::config::{BufferConfig, GROWTH_FACTOR, MAX_BLOCK_LEN};
use crate::endian::WireOrder;
use crate::error::{BufferError, BufferResult};
use std::fmt;

/// Binary buffer for one encode or decode pass.
///
/// Invariant: `position <= capacity` and `written <= capacity` after every
/// operation.
#[derive(Clone)]
pub struct NetworkBuffer {
    storage: Vec<u8>,
    position: usize,
    /// High-water mark of bytes holding payload data.
    written: usize,
    order: WireOrder,
    warn_threshold: usize,
}

impl NetworkBuffer {
    /// Empty buffer with the default capacity and big-endian wire order.
    pub fn new() -> Self {
        Self::with_config(&BufferConfig::default())
    }

    /// Empty buffer with `capacity` bytes preallocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(&BufferConfig::default().with_initial_capacity(capacity))
    }

    /// Empty buffer using the given settings.
    pub fn with_config(config: &BufferConfig) -> Self {
        Self {
            storage: vec![0; config.initial_capacity],
            position: 0,
            written: 0,
            order: config.wire_order,
            warn_threshold: config.warn_threshold,
        }
    }

    /// Wrap received bytes for decoding. The cursor starts at 0.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::from_bytes_with_config(bytes, &BufferConfig::default())
    }

    /// Wrap received bytes, taking wire order and threshold from `config`.
    pub fn from_bytes_with_config(bytes: Vec<u8>, config: &BufferConfig) -> Self {
        Self {
            written: bytes.len(),
            storage: bytes,
            position: 0,
            order: config.wire_order,
            warn_threshold: config.warn_threshold,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Bytes between the cursor and the end of the store.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.storage.len() - self.position
    }

    #[inline]
    pub fn wire_order(&self) -> WireOrder {
        self.order
    }

    /// Move the cursor. Fails if `position` lies beyond the capacity.
    pub fn set_position(&mut self, position: usize) -> BufferResult<()> {
        if position > self.storage.len() {
            return Err(BufferError::InvalidRange {
                start: position,
                end: position,
                len: self.storage.len(),
            });
        }
        self.position = position;
        Ok(())
    }

    /// Restore a cursor taken from [`NetworkBuffer::position`].
    #[inline]
    pub(crate) fn rewind(&mut self, position: usize) {
        debug_assert!(position <= self.storage.len());
        self.position = position;
    }

    /// Read one byte and advance the cursor.
    #[inline]
    pub fn read_byte(&mut self) -> BufferResult<u8> {
        let byte = *self
            .storage
            .get(self.position)
            .ok_or(BufferError::BufferUnderflow {
                requested: 1,
                remaining: 0,
            })?;
        self.position += 1;
        Ok(byte)
    }

    /// Borrow the next `count` bytes and advance past them.
    ///
    /// The cursor does not move when fewer than `count` bytes remain.
    pub fn read_bytes(&mut self, count: usize) -> BufferResult<&[u8]> {
        self.check_remaining(count)?;
        let start = self.position;
        self.position += count;
        Ok(&self.storage[start..self.position])
    }

    /// Fill `out` from the cursor.
    pub fn read_into(&mut self, out: &mut [u8]) -> BufferResult<()> {
        let bytes = self.read_bytes(out.len())?;
        out.copy_from_slice(bytes);
        Ok(())
    }

    /// Decode `count` single-byte characters.
    pub fn read_chars(&mut self, count: usize) -> BufferResult<String> {
        let bytes = self.read_bytes(count)?;
        Ok(bytes.iter().copied().map(char::from).collect())
    }

    #[inline]
    pub(crate) fn read_array<const N: usize>(&mut self) -> BufferResult<[u8; N]> {
        self.check_remaining(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.storage[self.position..self.position + N]);
        self.position += N;
        Ok(out)
    }

    /// Store one byte at the cursor, growing first if needed.
    #[inline]
    pub fn write_byte(&mut self, value: u8) {
        self.ensure_capacity(1);
        self.storage[self.position] = value;
        self.position += 1;
        self.mark_written(self.position);
    }

    /// Copy `bytes` to the cursor, growing first if needed.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.ensure_capacity(bytes.len());
        let end = self.position + bytes.len();
        self.storage[self.position..end].copy_from_slice(bytes);
        self.position = end;
        self.mark_written(end);
    }

    /// Copy `bytes` to an absolute `offset` at or before the cursor.
    ///
    /// The cursor moves to the end of the copied range only if that lies past
    /// the current cursor. Blocks longer than 65,535 bytes and offsets past
    /// the cursor are rejected before anything changes.
    pub fn write_bytes_at(&mut self, offset: usize, bytes: &[u8]) -> BufferResult<()> {
        if bytes.len() > MAX_BLOCK_LEN {
            return Err(BufferError::OversizedWrite {
                len: bytes.len(),
                max: MAX_BLOCK_LEN,
            });
        }
        let end = match offset.checked_add(bytes.len()) {
            Some(end) if offset <= self.position => end,
            _ => {
                return Err(BufferError::InvalidRange {
                    start: offset,
                    end: offset.saturating_add(bytes.len()),
                    len: self.position,
                })
            }
        };
        self.grow_to(end);
        self.storage[offset..end].copy_from_slice(bytes);
        self.position = self.position.max(end);
        self.mark_written(end);
        Ok(())
    }

    /// Make room for `additional` bytes past the cursor.
    ///
    /// Capacity doubles until it fits. Crossing the warning threshold is
    /// logged, never refused.
    pub fn ensure_capacity(&mut self, additional: usize) {
        self.grow_to(self.position + additional);
    }

    fn grow_to(&mut self, required: usize) {
        let capacity = self.storage.len();
        if required <= capacity {
            return;
        }

        let mut new_capacity = capacity.max(1);
        while new_capacity < required {
            new_capacity = new_capacity.saturating_mul(GROWTH_FACTOR);
        }

        tracing::debug!("NetworkBuffer grown from {} to {} bytes", capacity, new_capacity);
        if new_capacity > self.warn_threshold {
            tracing::warn!(
                "NetworkBuffer size is {} bytes (warning threshold {})",
                new_capacity,
                self.warn_threshold
            );
        }

        self.storage.reserve_exact(new_capacity - capacity);
        self.storage.resize(new_capacity, 0);
    }

    #[inline]
    fn mark_written(&mut self, end: usize) {
        self.written = self.written.max(end);
    }

    fn check_remaining(&self, requested: usize) -> BufferResult<()> {
        let remaining = self.remaining();
        if requested > remaining {
            return Err(BufferError::BufferUnderflow {
                requested,
                remaining,
            });
        }
        Ok(())
    }

    /// Bytes written so far, `[0, position)`.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage[..self.position]
    }

    /// Owned copy of [`NetworkBuffer::as_bytes`] for handing to a transport.
    pub fn snapshot(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    /// Replace the contents with received bytes and rewind.
    pub fn load(&mut self, bytes: Vec<u8>) {
        self.written = bytes.len();
        self.storage = bytes;
        self.position = 0;
    }

    /// Like [`NetworkBuffer::load`] but reuses the current allocation.
    pub fn load_slice(&mut self, bytes: &[u8]) {
        self.storage.clear();
        self.storage.extend_from_slice(bytes);
        self.position = 0;
        self.written = bytes.len();
    }

    /// Rewind for reuse. Capacity is kept and previously written bytes are
    /// zeroed, so moving the cursor forward afterwards exposes only zeros.
    pub fn reset(&mut self) {
        self.storage[..self.written].fill(0);
        self.position = 0;
        self.written = 0;
    }

    /// Give up the backing store, truncated to the written bytes.
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.storage.truncate(self.position);
        self.storage
    }
}

impl Default for NetworkBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<u8>> for NetworkBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for NetworkBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes.to_vec())
    }
}

impl fmt::Debug for NetworkBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkBuffer")
            .field("position", &self.position)
            .field("capacity", &self.storage.len())
            .field("wire_order", &self.order)
            .finish()
    }
}
