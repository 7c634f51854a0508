//! Oriented combos
//!
//! A combo pairs a color pattern with a rotation step selecting one of its
//! distinct orientations. Mono tiles have a single orientation; bi and tri
//! tiles cycle through three, each two edges apart.

use crate::combo::pattern::{ComboPattern, SideColors};
use crate::io::configuration::EDGE_COUNT;

/// A color pattern together with its active rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    /// The tile's color pattern
    pub pattern: ComboPattern,
    /// Active orientation, one of [`Combo::rotation_steps`]
    pub rotation_step: usize,
}

impl Combo {
    /// Create a combo at rotation step 0
    #[must_use]
    pub const fn new(pattern: ComboPattern) -> Self {
        Self {
            pattern,
            rotation_step: 0,
        }
    }

    /// Number of distinct orientations for this pattern
    #[must_use]
    pub const fn rotation_step_count(&self) -> usize {
        match self.pattern {
            ComboPattern::Mono { .. } => 1,
            ComboPattern::Bi { .. } | ComboPattern::Tri { .. } => 3,
        }
    }

    /// Valid rotation steps for this pattern, in cycling order
    #[must_use]
    pub fn rotation_steps(&self) -> Vec<usize> {
        (0..self.rotation_step_count()).collect()
    }

    /// Clamp an arbitrary step into the valid range for this pattern
    ///
    /// Steps recorded as raw edge offsets (even values up to 4) are folded
    /// back to their half, matching how older saved states stored them.
    #[must_use]
    pub const fn normalize_rotation_step(&self, raw: usize) -> usize {
        let count = self.rotation_step_count();
        if raw < count {
            return raw;
        }
        if raw % 2 == 0 && raw / 2 < count {
            return raw / 2;
        }
        raw % count
    }

    /// The step following `current` in cycling order
    #[must_use]
    pub const fn next_rotation_step(&self, current: usize) -> usize {
        (self.normalize_rotation_step(current) + 1) % self.rotation_step_count()
    }

    /// Edge colors under the given rotation step
    ///
    /// The base expansion is rotated left by two edges per step. Mono
    /// patterns are rotation-invariant and ignore the step.
    #[must_use]
    pub fn oriented_side_colors(&self, step: usize) -> SideColors {
        let base = self.pattern.base_side_colors();
        if matches!(self.pattern, ComboPattern::Mono { .. }) {
            return base;
        }
        let shift = self.normalize_rotation_step(step) * 2;
        let mut rotated = [0usize; EDGE_COUNT];
        for (slot, &color) in rotated.iter_mut().zip(base.iter().cycle().skip(shift)) {
            *slot = color;
        }
        rotated
    }

    /// Edge colors under the combo's own active rotation step
    #[must_use]
    pub fn side_colors(&self) -> SideColors {
        self.oriented_side_colors(self.rotation_step)
    }
}
