//! Buffer settings, size limits and their environment overrides.

use crate::endian::WireOrder;
use crate::error::{BufferError, BufferResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Capacity of a buffer created without an explicit size.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Capacity multiplier applied on each growth step.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity above which growth logs a warning (128 MiB).
pub const CAPACITY_WARNING_THRESHOLD: usize = 128 * 1024 * 1024;

/// Longest byte block a 16-bit length can describe.
pub const MAX_BLOCK_LEN: usize = u16::MAX as usize;

/// Settings applied to a buffer at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Bytes allocated up front for an empty buffer.
    pub initial_capacity: usize,
    /// Capacity that triggers the oversized-buffer warning.
    pub warn_threshold: usize,
    /// Byte order for every multi-byte value.
    pub wire_order: WireOrder,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            warn_threshold: CAPACITY_WARNING_THRESHOLD,
            wire_order: WireOrder::default(),
        }
    }
}

impl BufferConfig {
    /// Builds a configuration from `NETBUFFER_*` environment variables,
    /// falling back to defaults for anything unset or unparseable.
    ///
    /// - `NETBUFFER_INITIAL_CAPACITY`
    /// - `NETBUFFER_WARN_THRESHOLD`
    /// - `NETBUFFER_WIRE_ORDER` (`big` or `native`)
    pub fn from_env() -> BufferResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`BufferConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> BufferResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let initial_capacity = lookup("NETBUFFER_INITIAL_CAPACITY")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.initial_capacity);
        let warn_threshold = lookup("NETBUFFER_WARN_THRESHOLD")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(defaults.warn_threshold);

        // No fallback: an unknown order is an error.
        let wire_order = match lookup("NETBUFFER_WIRE_ORDER") {
            Some(v) => v.parse()?,
            None => defaults.wire_order,
        };

        if warn_threshold == 0 {
            return Err(BufferError::InvalidConfig(
                "warn threshold must be non-zero".into(),
            ));
        }

        Ok(Self {
            initial_capacity,
            warn_threshold,
            wire_order,
        })
    }

    /// Use host byte order instead of big-endian.
    pub fn native() -> Self {
        Self {
            wire_order: WireOrder::Native,
            ..Default::default()
        }
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_warn_threshold(mut self, threshold: usize) -> Self {
        self.warn_threshold = threshold;
        self
    }

    pub fn with_wire_order(mut self, order: WireOrder) -> Self {
        self.wire_order = order;
        self
    }
}
