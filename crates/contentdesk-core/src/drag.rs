//! Draggable surface
//!
//! Pointer grab/move/release tracking for the floating preview card. The
//! grab offset is captured once on grab so the card does not jump to the
//! pointer while it follows it.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Where a surface sits before its first drag.
pub const DEFAULT_POSITION: Point = Point::new(50.0, 50.0);

/// Stacking order applied while a drag is in progress.
pub const DRAG_Z_INDEX: i32 = 1000;

/// A point in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Client-space rectangle of the dragged element
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub top_left: Point,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(top_left: Point, width: f64, height: f64) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// Bounds from a measured client rectangle (`x`, `y` is the top-left).
    pub fn from_client_rect(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), width, height)
    }
}

/// How the surface is laid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Normal layout flow
    Flow,
    /// Fixed at `position`; `elevated` while a drag is in progress
    Floating { position: Point, elevated: bool },
}

impl Placement {
    /// Inline CSS for the surface's container.
    pub fn css(&self) -> String {
        match self {
            Placement::Flow => "position: relative;".to_string(),
            Placement::Floating {
                position,
                elevated: true,
            } => format!(
                "position: fixed; left: {}px; top: {}px; z-index: {};",
                position.x, position.y, DRAG_Z_INDEX
            ),
            Placement::Floating {
                position,
                elevated: false,
            } => format!(
                "position: fixed; left: {}px; top: {}px;",
                position.x, position.y
            ),
        }
    }
}

/// Drag state for one surface
#[derive(Debug, Clone, PartialEq)]
pub struct DragSurface {
    position: Point,
    grab_offset: Point,
    active: bool,
    floating: bool,
}

impl Default for DragSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSurface {
    pub fn new() -> Self {
        Self::with_position(DEFAULT_POSITION)
    }

    pub fn with_position(position: Point) -> Self {
        Self {
            position,
            grab_offset: Point::default(),
            active: false,
            floating: false,
        }
    }

    /// Grab the surface. Returns `false` (and changes nothing) when a drag
    /// is already in progress.
    pub fn begin_drag(&mut self, pointer: Point, bounds: Bounds) -> bool {
        if self.active {
            return false;
        }
        self.grab_offset = pointer - bounds.top_left;
        self.active = true;
        self.floating = true;
        true
    }

    /// Follow the pointer. Stray moves outside a drag are ignored.
    pub fn update_drag(&mut self, pointer: Point) -> bool {
        if !self.active {
            return false;
        }
        self.position = pointer - self.grab_offset;
        true
    }

    /// Release the surface where it is. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    /// Put a released surface back into layout flow.
    pub fn dock(&mut self) {
        if !self.active {
            self.floating = false;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn grab_offset(&self) -> Point {
        self.grab_offset
    }

    pub fn placement(&self) -> Placement {
        if self.floating {
            Placement::Floating {
                position: self.position,
                elevated: self.active,
            }
        } else {
            Placement::Flow
        }
    }
}
