// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions to and from Kurbo geometry.

use crate::error::ConfigError;
use crate::types::{Coord, Point, Region};

impl From<Point> for kurbo::Point {
    fn from(p: Point) -> Self {
        Self::new(f64::from(p.x), f64::from(p.y))
    }
}

impl From<Region> for kurbo::Rect {
    fn from(r: Region) -> Self {
        Self::new(
            f64::from(r.min_x()),
            f64::from(r.min_y()),
            f64::from(r.max_x()),
            f64::from(r.max_y()),
        )
    }
}

impl TryFrom<kurbo::Rect> for Region {
    type Error = ConfigError;

    /// Round outward to integer coordinates.
    fn try_from(rect: kurbo::Rect) -> Result<Self, ConfigError> {
        if rect.is_nan() {
            return Err(ConfigError::CoordinateOutOfRange);
        }
        let rect = rect.abs().expand();
        Self::try_new(
            to_coord(rect.x0)?,
            to_coord(rect.y0)?,
            to_coord(rect.x1)?,
            to_coord(rect.y1)?,
        )
    }
}

fn to_coord(v: f64) -> Result<Coord, ConfigError> {
    if !(0.0..=f64::from(Coord::MAX)).contains(&v) {
        return Err(ConfigError::CoordinateOutOfRange);
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Range checked above and already rounded to an integer."
    )]
    let c = v as Coord;
    Ok(c)
}
