//! Sliding-window moving average for heading smoothing

use std::collections::VecDeque;

use crate::types::ConfigError;

/// Sliding-window moving average filter
///
/// Keeps the most recent `capacity` values and returns their arithmetic
/// mean on every insertion. Used to damp short-term sensor noise in the
/// heading stream; it must only ever be fed continuity-corrected values,
/// otherwise averaging across the 0°/360° boundary produces garbage
/// (e.g. 359° and 1° average to 180°, the opposite direction).
///
/// The mean is recomputed from the full buffer on every push rather than
/// maintained as a running sum, so rounding error cannot accumulate over
/// long sessions.
///
/// # Example
/// ```
/// use compass_assistant::MovingAverage;
///
/// let mut average = MovingAverage::new(3).unwrap();
/// assert_eq!(average.push(10.0), 10.0);
/// assert_eq!(average.push(20.0), 15.0);
/// assert_eq!(average.push(30.0), 20.0);
/// assert_eq!(average.push(40.0), 30.0); // 10.0 evicted
/// ```
#[derive(Debug, Clone)]
pub struct MovingAverage {
    /// Buffered values, oldest at the front
    buffer: VecDeque<f32>,
    /// Maximum number of buffered values
    capacity: usize,
}

impl MovingAverage {
    /// Create a moving average over a window of `capacity` values
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidWindowCapacity`] when `capacity` is
    /// zero. A zero-length window has no meaningful average and is always
    /// a configuration mistake, so it is rejected here rather than
    /// silently clamped.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidWindowCapacity { capacity });
        }
        Ok(Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// Push a value into the window and return the updated mean
    ///
    /// Evicts the oldest buffered value first when the window is full, so
    /// the returned mean always covers at most the `capacity` most recent
    /// values. While the window is still filling, the mean covers exactly
    /// the values pushed so far; it is never padded.
    pub fn push(&mut self, value: f32) -> f32 {
        if self.buffer.len() == self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
        self.average()
    }

    /// Mean of the currently buffered values, without pushing
    ///
    /// Returns 0.0 when the window is empty.
    pub fn average(&self) -> f32 {
        if self.buffer.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.buffer.iter().sum();
        sum / self.buffer.len() as f32
    }

    /// Number of values currently buffered
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the window holds no values yet
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Maximum number of values the window holds
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Discard all buffered values
    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
