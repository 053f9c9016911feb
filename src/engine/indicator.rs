// SPDX-License-Identifier: MPL-2.0
//! Position indicator binding.
//!
//! A pure projection of `(total, current, kind)` into a visual form. The
//! binding holds no navigation state of its own: clicks and arrow keys are
//! translated into requests for the index controller.

use super::index::Step;
use crate::domain::{IndicatorKind, IndicatorPosition, Orientation};

/// Derived view of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorModel {
    pub total: usize,
    pub current: usize,
}

/// One clickable mark of a dot, line, or dash indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub index: usize,
    pub is_active: bool,
    pub is_clickable: bool,
}

/// Visual form of the indicator.
#[derive(Debug, Clone, PartialEq)]
pub enum IndicatorForm {
    /// Nothing to render (no items).
    Hidden,
    /// One mark per item.
    Segments {
        kind: IndicatorKind,
        segments: Vec<Segment>,
    },
    /// `position / total`, one-based.
    Fraction { position: usize, total: usize },
    /// Filled share of a bar, in `0.0..=1.0`.
    Progress { ratio: f32 },
}

/// Arrow keys the indicator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorBinding {
    kind: IndicatorKind,
    position: IndicatorPosition,
    navigable: bool,
}

impl IndicatorBinding {
    /// Creates a display-only binding.
    #[must_use]
    pub fn new(kind: IndicatorKind, position: IndicatorPosition) -> Self {
        Self {
            kind,
            position,
            navigable: false,
        }
    }

    /// Binds (or unbinds) a navigation handler.
    #[must_use]
    pub fn with_navigation(mut self, navigable: bool) -> Self {
        self.navigable = navigable;
        self
    }

    #[must_use]
    pub fn kind(&self) -> IndicatorKind {
        self.kind
    }

    #[must_use]
    pub fn position(&self) -> IndicatorPosition {
        self.position
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.position.orientation()
    }

    #[must_use]
    pub fn is_navigable(&self) -> bool {
        self.navigable
    }

    /// Projects the model into its visual form.
    #[must_use]
    pub fn form(&self, model: IndicatorModel) -> IndicatorForm {
        if model.total == 0 {
            return IndicatorForm::Hidden;
        }
        let current = model.current.min(model.total - 1);

        match self.kind {
            IndicatorKind::Dot | IndicatorKind::Line | IndicatorKind::Dash => {
                let segments = (0..model.total)
                    .map(|index| Segment {
                        index,
                        is_active: index == current,
                        is_clickable: self.navigable,
                    })
                    .collect();
                IndicatorForm::Segments {
                    kind: self.kind,
                    segments,
                }
            }
            IndicatorKind::Fraction => IndicatorForm::Fraction {
                position: current + 1,
                total: model.total,
            },
            #[allow(clippy::cast_precision_loss)]
            IndicatorKind::Progress => IndicatorForm::Progress {
                ratio: (current + 1) as f32 / model.total as f32,
            },
        }
    }

    /// Resolves a click on the segment at `index` into a jump target.
    ///
    /// Only segment forms with a bound handler have click targets.
    #[must_use]
    pub fn click(&self, model: IndicatorModel, index: usize) -> Option<usize> {
        (self.navigable && self.kind.has_segments() && index < model.total).then_some(index)
    }

    /// Resolves an arrow key pressed while the indicator has focus.
    ///
    /// Horizontal layouts react to left/right, vertical layouts to up/down;
    /// keys on the cross axis are ignored.
    #[must_use]
    pub fn key(&self, key: ArrowKey) -> Option<Step> {
        if !self.navigable {
            return None;
        }
        match (self.orientation(), key) {
            (Orientation::Horizontal, ArrowKey::Left) | (Orientation::Vertical, ArrowKey::Up) => {
                Some(Step::Previous)
            }
            (Orientation::Horizontal, ArrowKey::Right)
            | (Orientation::Vertical, ArrowKey::Down) => Some(Step::Next),
            _ => None,
        }
    }
}
