//! Test doubles for the engine: a recording surface and a stepping clock.

use crate::clock::Clock;
use crate::color::SerializableColor;
use crate::surface::{RasterSurface, StrokeStyle};
use kurbo::{Ellipse, Point, Rect, Size};
use peniko::Color;
use std::cell::Cell;

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(SerializableColor),
    Segment {
        from: Point,
        to: Point,
        color: SerializableColor,
        width: f64,
    },
    Rect {
        rect: Rect,
        color: SerializableColor,
        width: f64,
    },
    Ellipse {
        ellipse: Ellipse,
        color: SerializableColor,
        width: f64,
    },
}

impl DrawCall {
    pub fn color(&self) -> SerializableColor {
        match self {
            DrawCall::Clear(color) => *color,
            DrawCall::Segment { color, .. }
            | DrawCall::Rect { color, .. }
            | DrawCall::Ellipse { color, .. } => *color,
        }
    }
}

/// Surface whose "pixels" are the list of draw calls still visible on it.
///
/// `visible` behaves like real pixels (snapshot copies it, restore replaces
/// it, clear wipes it) while `log` keeps every call ever made.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    pub visible: Vec<DrawCall>,
    pub log: Vec<DrawCall>,
    pub restores: usize,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Size::new(width, height),
            visible: Vec::new(),
            log: Vec::new(),
            restores: 0,
        }
    }

    fn record(&mut self, call: DrawCall) {
        self.visible.push(call.clone());
        self.log.push(call);
    }

    pub fn segments_in_log(&self) -> usize {
        self.log
            .iter()
            .filter(|call| matches!(call, DrawCall::Segment { .. }))
            .count()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}

impl RasterSurface for RecordingSurface {
    type Snapshot = Vec<DrawCall>;

    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, color: Color) {
        self.visible.clear();
        self.record(DrawCall::Clear(color.into()));
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.visible.clone()
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        self.visible = snapshot.clone();
        self.restores += 1;
    }

    fn draw_segment(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.record(DrawCall::Segment {
            from,
            to,
            color: style.color.into(),
            width: style.width,
        });
    }

    fn draw_rect(&mut self, rect: Rect, style: StrokeStyle) {
        self.record(DrawCall::Rect {
            rect,
            color: style.color.into(),
            width: style.width,
        });
    }

    fn draw_ellipse(&mut self, ellipse: Ellipse, style: StrokeStyle) {
        self.record(DrawCall::Ellipse {
            ellipse,
            color: style.color.into(),
            width: style.width,
        });
    }
}

/// Clock that advances by a fixed step every time it is read.
#[derive(Debug)]
pub struct SteppingClock {
    next: Cell<f64>,
    step: f64,
}

impl SteppingClock {
    pub fn new(start: f64, step: f64) -> Self {
        Self {
            next: Cell::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> f64 {
        let now = self.next.get();
        self.next.set(now + self.step);
        now
    }
}
