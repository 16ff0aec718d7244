//! # Rectangle Model
//!
//! A rectangle is a value type made of two strictly positive sides.
//!
//! Two rectangles combine through a *perimeter-additive* rule rather than a
//! bounding box:
//! * `a + b` keeps `width = a.width + b.width` and sums both perimeters.
//! * `a - b` subtracts the smaller perimeter from the larger one and keeps
//!   the absolute width difference.
//!
//! Comparison only looks at the area, so `2 x 3` and `1 x 6` are equal.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => f.write_str("width"),
            Dimension::Height => f.write_str("height"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RectangleError {
    #[error("invalid {dimension}: must be a positive number, not {value}")]
    InvalidDimension { dimension: Dimension, value: f64 },

    #[error("invalid rectangle '{0}': expected W or WxH")]
    Parse(String),
}

#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

fn check(dimension: Dimension, value: f64) -> Result<f64, RectangleError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(RectangleError::InvalidDimension { dimension, value })
    }
}

impl Rectangle {
    /// Creates a rectangle, rejecting any side that is not a finite positive number.
    pub fn new(width: f64, height: f64) -> Result<Self, RectangleError> {
        let rect = Self::build(width, height).inspect_err(|e| {
            error!("Failed to create rectangle: {e}");
        })?;
        info!("Created rectangle with width {} and height {}", rect.width, rect.height);
        Ok(rect)
    }

    /// A rectangle whose height equals its width.
    pub fn square(side: f64) -> Result<Self, RectangleError> {
        Self::new(side, side)
    }

    fn build(width: f64, height: f64) -> Result<Self, RectangleError> {
        Ok(Self {
            width: check(Dimension::Width, width)?,
            height: check(Dimension::Height, height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Replaces the width. On error the rectangle is left as it was.
    pub fn set_width(&mut self, value: f64) -> Result<(), RectangleError> {
        match check(Dimension::Width, value) {
            Ok(width) => {
                self.width = width;
                info!("Width changed. Rectangle with width {} and height {}", self.width, self.height);
                Ok(())
            }
            Err(e) => {
                error!("Failed to change width: {e}");
                Err(e)
            }
        }
    }

    /// Replaces the height. On error the rectangle is left as it was.
    pub fn set_height(&mut self, value: f64) -> Result<(), RectangleError> {
        match check(Dimension::Height, value) {
            Ok(height) => {
                self.height = height;
                info!("Height changed. Rectangle with width {} and height {}", self.width, self.height);
                Ok(())
            }
            Err(e) => {
                error!("Failed to change height: {e}");
                Err(e)
            }
        }
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Perimeter-additive sum: widths add up and the perimeters add up.
    pub fn combine(&self, other: &Rectangle) -> Result<Rectangle, RectangleError> {
        let width = self.width + other.width;
        let perimeter = self.perimeter() + other.perimeter();
        Rectangle::new(width, perimeter / 2.0 - width)
    }

    /// Perimeter-subtractive difference, larger perimeter first.
    ///
    /// Fails with [`RectangleError::InvalidDimension`] when the result would
    /// have a zero or negative side, e.g. for two rectangles of equal width.
    pub fn difference(&self, other: &Rectangle) -> Result<Rectangle, RectangleError> {
        let (big, small) = if self.perimeter() < other.perimeter() {
            (other, self)
        } else {
            (self, other)
        };
        let width = (big.width - small.width).abs();
        let perimeter = big.perimeter() - small.perimeter();
        Rectangle::new(width, perimeter / 2.0 - width)
    }
}

impl Add for Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn add(self, rhs: Rectangle) -> Self::Output {
        self.combine(&rhs)
    }
}

impl Add for &Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn add(self, rhs: &Rectangle) -> Self::Output {
        self.combine(rhs)
    }
}

impl Sub for Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn sub(self, rhs: Rectangle) -> Self::Output {
        self.difference(&rhs)
    }
}

impl Sub for &Rectangle {
    type Output = Result<Rectangle, RectangleError>;

    fn sub(self, rhs: &Rectangle) -> Self::Output {
        self.difference(rhs)
    }
}

// Sides are always finite and positive, so areas never hit NaN and
// `total_cmp` agrees with `==` on them.
impl Ord for Rectangle {
    fn cmp(&self, other: &Self) -> Ordering {
        self.area().total_cmp(&other.area())
    }
}

impl PartialOrd for Rectangle {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rectangle {}

impl fmt::Display for Rectangle {
    /// `{}` is the human readable form, `{:#}` the constructor form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Rectangle({}, {})", self.width, self.height)
        } else {
            write!(f, "Rectangle with sides {} and {}", self.width, self.height)
        }
    }
}

impl FromStr for Rectangle {
    type Err = RectangleError;

    /// Parses `"W"` as a square or `"WxH"` as a full rectangle.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_side = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|_| RectangleError::Parse(s.to_string()))
        };

        match s.split_once(['x', 'X']) {
            Some((w, h)) => Rectangle::new(parse_side(w)?, parse_side(h)?),
            None => Rectangle::square(parse_side(s)?),
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
