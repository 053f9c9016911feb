// SPDX-License-Identifier: MPL-2.0
//! Enumerations shared by the engine, configuration, and views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a transition between two indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Target index is greater than the source index.
    Forward,
    /// Target index is lower than (or equal to) the source index.
    Backward,
}

impl Direction {
    /// Derives the direction from a raw index comparison.
    ///
    /// The comparison is not wrap-corrected: under looping, going from the
    /// last item to the first reads as `Backward`.
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Self::Forward
        } else {
            Self::Backward
        }
    }

    /// Returns `1.0` for forward and `-1.0` for backward.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Backward => -1.0,
        }
    }
}

/// Visual effect of the standalone image transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransitionKind {
    #[default]
    Fade,
    Slide,
    Zoom,
    Reveal,
    Flip,
}

impl TransitionKind {
    /// All supported effects, in declaration order.
    pub const ALL: [TransitionKind; 5] = [
        TransitionKind::Fade,
        TransitionKind::Slide,
        TransitionKind::Zoom,
        TransitionKind::Reveal,
        TransitionKind::Flip,
    ];

    /// Returns true if the effect needs a discrete restart, i.e. its start
    /// pose must be painted for at least one frame before animating.
    #[must_use]
    pub fn requires_restart(self) -> bool {
        !matches!(self, Self::Fade)
    }

    /// Stable lowercase name used by the CLI and configuration.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Zoom => "zoom",
            Self::Reveal => "reveal",
            Self::Flip => "flip",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown transition `{s}`"))
    }
}

/// Transition styles available to the carousel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CarouselTransition {
    /// Continuous track translated by the current index and live drag.
    #[default]
    Slide,
    /// Stacked layers cross-fading by opacity.
    Fade,
}

impl CarouselTransition {
    /// Returns the underlying effect.
    #[must_use]
    pub fn kind(self) -> TransitionKind {
        match self {
            Self::Slide => TransitionKind::Slide,
            Self::Fade => TransitionKind::Fade,
        }
    }
}

impl FromStr for CarouselTransition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slide" => Ok(Self::Slide),
            "fade" => Ok(Self::Fade),
            other => Err(format!("carousel transition must be `slide` or `fade`, got `{other}`")),
        }
    }
}

/// Visual form of the position indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorKind {
    #[default]
    Dot,
    Line,
    Dash,
    Fraction,
    Progress,
}

impl IndicatorKind {
    /// Returns true if every item is rendered as its own target.
    #[must_use]
    pub fn has_segments(self) -> bool {
        matches!(self, Self::Dot | Self::Line | Self::Dash)
    }
}

/// Placement of the indicator relative to the carousel viewport.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum IndicatorPosition {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl IndicatorPosition {
    /// Layout axis implied by the position.
    #[must_use]
    pub fn orientation(self) -> Orientation {
        match self {
            Self::Top | Self::Bottom => Orientation::Horizontal,
            Self::Left | Self::Right => Orientation::Vertical,
        }
    }
}

/// Layout axis of the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}
