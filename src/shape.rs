//! Shape descriptions
//!
//! A [Shape] is plain data: which primitive, where it is, how it is
//! transformed and what color it has. Polygons and circles are checked when
//! they are built; [Shape::validate] repeats every check so a shape that was
//! assembled by hand is still rejected before anything is drawn.
//!
//! [Shape]: struct.Shape.html
//! [Shape::validate]: struct.Shape.html#method.validate

use crate::color::Argb8;
use crate::error::{Error, Result};
use crate::transform::Transform;

use std::fmt;

/// A point or vector
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from(p: (f64, f64)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Straight line between two points
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub p0: Point,
    pub p1: Point,
}

/// Any triangle
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl Triangle {
    pub fn points(&self) -> [Point; 3] {
        [self.p0, self.p1, self.p2]
    }
}

/// Rectangle from its origin corner and size
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

/// Polygon with three or more points, each with a texture coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    uvs: Vec<Point>,
}

impl Polygon {
    /// Polygon from matching point and texture coordinate lists
    pub fn new(points: Vec<Point>, uvs: Vec<Point>) -> Result<Self> {
        let poly = Self { points, uvs };
        poly.validate()?;
        Ok(poly)
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn uvs(&self) -> &[Point] {
        &self.uvs
    }
    fn validate(&self) -> Result<()> {
        if self.points.len() < 3 {
            return Err(Error::invalid_shape(format!(
                "polygon needs at least 3 points, got {}",
                self.points.len()
            )));
        }
        if self.points.len() != self.uvs.len() {
            return Err(Error::invalid_shape(format!(
                "polygon has {} points but {} texture coordinates",
                self.points.len(),
                self.uvs.len()
            )));
        }
        finite("polygon", self.points.iter().chain(self.uvs.iter()).copied())
    }
}

/// Circle from its center and radius
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Circle with a radius of zero or more
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        let circle = Self { center, radius };
        circle.validate()?;
        Ok(circle)
    }
    pub fn center(&self) -> Point {
        self.center
    }
    pub fn radius(&self) -> f64 {
        self.radius
    }
    fn validate(&self) -> Result<()> {
        if !(self.radius >= 0.0) {
            return Err(Error::invalid_shape(format!("circle radius {} is negative", self.radius)));
        }
        finite("circle", std::iter::once(self.center))?;
        if !self.radius.is_finite() {
            return Err(Error::invalid_shape("circle radius is not finite"));
        }
        Ok(())
    }
}

fn finite<I: IntoIterator<Item = Point>>(what: &str, pts: I) -> Result<()> {
    if pts.into_iter().all(Point::is_finite) {
        Ok(())
    } else {
        Err(Error::invalid_shape(format!("{} has a non-finite coordinate", what)))
    }
}

/// Primitive and its geometry
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    Line(Line),
    Triangle(Triangle),
    Rectangle(Rectangle),
    Polygon(Polygon),
    Circle(Circle),
}

impl ShapeKind {
    /// Lower case name of the primitive
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line(_) => "line",
            ShapeKind::Triangle(_) => "triangle",
            ShapeKind::Rectangle(_) => "rectangle",
            ShapeKind::Polygon(_) => "polygon",
            ShapeKind::Circle(_) => "circle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that can be rendered and metarendered
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    /// Applied to the geometry before the buffer's own transform
    pub transform: Transform,
    pub color: Argb8,
}

impl Shape {
    /// Shape with an identity transform
    pub fn new(kind: ShapeKind, color: Argb8) -> Self {
        Self { kind, transform: Transform::new(), color }
    }
    /// Straight line
    pub fn line<P: Into<Point>>(p0: P, p1: P, color: Argb8) -> Self {
        Self::new(ShapeKind::Line(Line { p0: p0.into(), p1: p1.into() }), color)
    }
    /// Triangle
    ///
    ///     use metaraster::{Argb8, Shape};
    ///     let tri = Shape::triangle((0.0, 0.0), (10.0, 0.0), (5.0, 10.0), Argb8::WHITE);
    ///     assert!(tri.validate().is_ok());
    ///
    pub fn triangle<P: Into<Point>>(p0: P, p1: P, p2: P, color: Argb8) -> Self {
        let t = Triangle { p0: p0.into(), p1: p1.into(), p2: p2.into() };
        Self::new(ShapeKind::Triangle(t), color)
    }
    /// Rectangle
    pub fn rectangle<P: Into<Point>>(origin: P, width: f64, height: f64, color: Argb8) -> Self {
        let r = Rectangle { origin: origin.into(), width, height };
        Self::new(ShapeKind::Rectangle(r), color)
    }
    /// Polygon; fails unless there are 3 or more points and as many
    /// texture coordinates
    pub fn polygon(points: Vec<Point>, uvs: Vec<Point>, color: Argb8) -> Result<Self> {
        Ok(Self::new(ShapeKind::Polygon(Polygon::new(points, uvs)?), color))
    }
    /// Circle; fails on a negative radius
    pub fn circle<P: Into<Point>>(center: P, radius: f64, color: Argb8) -> Result<Self> {
        Ok(Self::new(ShapeKind::Circle(Circle::new(center.into(), radius)?), color))
    }
    /// Same shape with `transform` instead of its current one
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
    /// Check the shape can be rendered
    pub fn validate(&self) -> Result<()> {
        if !self.transform.is_finite() {
            return Err(Error::invalid_shape("transform is not finite"));
        }
        match &self.kind {
            ShapeKind::Line(l) => finite("line", [l.p0, l.p1].iter().copied()),
            ShapeKind::Triangle(t) => finite("triangle", t.points().iter().copied()),
            ShapeKind::Rectangle(r) => {
                let size = Point::new(r.width, r.height);
                finite("rectangle", [r.origin, size].iter().copied())
            }
            ShapeKind::Polygon(p) => p.validate(),
            ShapeKind::Circle(c) => c.validate(),
        }
    }
}
