//! Playback state shared by the sequence-driven controllers.

use duel_core::InputSet;

use super::sequences::{InputSequence, SequenceKind};

/// The sequence being played, how far into it we are, and whether it was
/// forced on us by an interrupt.
///
/// A fresh context starts exhausted so the first frame always selects.
#[derive(Clone, Debug)]
pub struct DecisionContext {
    sequence: Option<InputSequence>,
    cursor: usize,
    interrupted: bool,
}

impl DecisionContext {
    pub fn new() -> Self {
        Self {
            sequence: None,
            cursor: 0,
            interrupted: false,
        }
    }

    /// Nothing left to play.
    pub fn is_exhausted(&self) -> bool {
        self.sequence
            .as_ref()
            .is_none_or(|sequence| self.cursor >= sequence.len())
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    pub fn current(&self) -> Option<SequenceKind> {
        self.sequence.as_ref().map(InputSequence::kind)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Starts a newly selected sequence from its first frame.
    pub fn select(&mut self, sequence: InputSequence) {
        self.sequence = Some(sequence);
        self.cursor = 0;
        self.interrupted = false;
    }

    /// Replaces whatever is playing with `sequence`. Only one interrupt can
    /// be pending; it clears on the next selection.
    pub fn interrupt(&mut self, sequence: InputSequence) {
        self.sequence = Some(sequence);
        self.cursor = 0;
        self.interrupted = true;
    }

    /// Emits the frame under the cursor and moves past it.
    pub fn advance(&mut self) -> Option<InputSet> {
        let frame = self.sequence.as_ref()?.get(self.cursor)?;
        self.cursor += 1;
        Some(frame)
    }
}

impl Default for DecisionContext {
    fn default() -> Self {
        Self::new()
    }
}
