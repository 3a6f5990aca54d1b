// src/window.rs
//
// Fixed-capacity ring buffer of the N most recent samples, newest first.
// The head index advances modulo N on each push; logical ordering is pure
// index arithmetic, no per-push data movement.

use crate::types::MotionSample;

pub struct SampleWindow<const N: usize> {
    slots: [MotionSample; N],
    /// Physical index of the most recent sample.
    head: usize,
    /// How many samples have ever been pushed. Until this reaches N the
    /// unfilled slots hold placeholder values and the window is not warm.
    pushed: u64,
}

impl<const N: usize> SampleWindow<N> {
    pub fn new() -> Self {
        Self {
            slots: [MotionSample::new(0, 0, 0, [0.0; 3]); N],
            head: 0,
            pushed: 0,
        }
    }

    /// Insert a sample as the newest entry, recycling the oldest slot.
    /// Always succeeds.
    pub fn push(&mut self, sample: MotionSample) {
        self.head = (self.head + N - 1) % N;
        self.slots[self.head] = sample;
        self.pushed += 1;
    }

    /// Logical indexing: 0 is the most recent sample, N-1 the oldest
    /// survivor.
    pub fn get(&self, index: usize) -> &MotionSample {
        debug_assert!(index < N);
        &self.slots[(self.head + index) % N]
    }

    pub fn latest(&self) -> &MotionSample {
        self.get(0)
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &MotionSample> {
        (0..N).map(move |i| self.get(i))
    }

    /// True once every slot has held a genuine sample.
    pub fn is_warm(&self) -> bool {
        self.pushed >= N as u64
    }

    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    pub fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}
