// Copyright 2025 the circle_label Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis measurement constraints.

use core::fmt;
use core::num::ParseIntError;
use core::str::FromStr;

/// A layout constraint for one axis, as handed down by the host's layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeasureSpec {
    /// The parent asks for exactly this size.
    ///
    /// The circle treats it as a lower bound and grows past it if the label needs more room.
    Exact(i32),
    /// The parent allows at most this size.
    AtMost(i32),
    /// The parent imposes no constraint.
    Unspecified,
}

impl MeasureSpec {
    /// Applies this constraint to a preferred size.
    #[must_use]
    pub fn resolve(self, preferred: i32) -> i32 {
        match self {
            Self::Exact(n) => preferred.max(n),
            Self::AtMost(n) => preferred.min(n),
            Self::Unspecified => preferred,
        }
    }
}

impl fmt::Display for MeasureSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "exact:{n}"),
            Self::AtMost(n) => write!(f, "at-most:{n}"),
            Self::Unspecified => f.write_str("unspecified"),
        }
    }
}

/// Errors returned when parsing a [`MeasureSpec`] from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseMeasureSpecError {
    /// The input was empty or only whitespace.
    Empty,
    /// The constraint kind was not `exact`, `at-most` or `unspecified`.
    UnknownKind,
    /// `exact` or `at-most` was given without a `:<size>` suffix.
    MissingSize,
    /// The size did not parse as an `i32`.
    InvalidSize(ParseIntError),
}

impl fmt::Display for ParseMeasureSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty measure spec"),
            Self::UnknownKind => {
                f.write_str("unknown measure spec kind (expected exact, at-most or unspecified)")
            }
            Self::MissingSize => f.write_str("measure spec is missing its `:<size>` suffix"),
            Self::InvalidSize(err) => write!(f, "invalid measure spec size: {err}"),
        }
    }
}

impl core::error::Error for ParseMeasureSpecError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::InvalidSize(err) => Some(err),
            _ => None,
        }
    }
}

impl FromStr for MeasureSpec {
    type Err = ParseMeasureSpecError;

    /// Parses `exact:<n>`, `at-most:<n>` or `unspecified`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseMeasureSpecError::Empty);
        }
        let (kind, size) = match s.split_once(':') {
            Some((kind, size)) => (kind.trim(), Some(size.trim())),
            None => (s, None),
        };
        if kind.eq_ignore_ascii_case("exact") {
            parse_size(size).map(Self::Exact)
        } else if kind.eq_ignore_ascii_case("at-most") {
            parse_size(size).map(Self::AtMost)
        } else if kind.eq_ignore_ascii_case("unspecified") && size.is_none() {
            Ok(Self::Unspecified)
        } else {
            Err(ParseMeasureSpecError::UnknownKind)
        }
    }
}

fn parse_size(size: Option<&str>) -> Result<i32, ParseMeasureSpecError> {
    size.ok_or(ParseMeasureSpecError::MissingSize)?
        .parse()
        .map_err(ParseMeasureSpecError::InvalidSize)
}
