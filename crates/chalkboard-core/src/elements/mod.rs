//! Drawable element definitions.

mod circle;
mod freehand;
mod line;
mod rectangle;
mod text;

pub use circle::Circle;
pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;
pub use text::{ApproximateMeasure, Text, TextMeasure};

use crate::error::{CanvasError, CanvasResult};
use crate::geometry::{min_max_corners, ordered_endpoints};
use crate::selection::Position;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an element: its index in the owning collection.
pub type ElementId = usize;

/// The kinds of element the model can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Line,
    Rectangle,
    Circle,
    Pencil,
    Text,
}

impl ElementKind {
    /// Name used in tool selections and error messages.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Circle => "circle",
            ElementKind::Pencil => "pencil",
            ElementKind::Text => "text",
        }
    }

    /// Whether coordinates are canonicalized when a gesture finalizes.
    pub fn needs_normalize(self) -> bool {
        matches!(self, ElementKind::Line | ElementKind::Rectangle | ElementKind::Circle)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = CanvasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ElementKind::Line),
            "rectangle" => Ok(ElementKind::Rectangle),
            "circle" => Ok(ElementKind::Circle),
            "pencil" => Ok(ElementKind::Pencil),
            "text" => Ok(ElementKind::Text),
            other => Err(CanvasError::UnrecognizedType(other.to_string())),
        }
    }
}

/// Common behaviour of every element variant.
pub trait ElementTrait {
    /// Index of the element in its collection.
    fn id(&self) -> ElementId;

    /// Axis-aligned bounding box in logical coordinates.
    fn bounds(&self) -> Rect;

    /// Which handle or body part (if any) lies under `point`.
    fn position_within(&self, point: Point) -> Option<Position>;
}

/// A drawable element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    #[serde(rename = "pencil")]
    Freehand(Freehand),
    Text(Text),
}

impl Element {
    /// Build an element of `kind` spanning `start`–`end`.
    ///
    /// Pencil strokes ignore `end` and start with `start` as their only point;
    /// text starts empty.
    pub fn create(id: ElementId, start: Point, end: Point, kind: ElementKind) -> Self {
        match kind {
            ElementKind::Line => Element::Line(Line::new(id, start, end)),
            ElementKind::Rectangle => Element::Rectangle(Rectangle::new(id, start, end)),
            ElementKind::Circle => Element::Circle(Circle::new(id, start, end)),
            ElementKind::Pencil => Element::Freehand(Freehand::new(id, start)),
            ElementKind::Text => Element::Text(Text::new(id, start, end)),
        }
    }

    /// Build an element from a kind name.
    pub fn create_named(id: ElementId, start: Point, end: Point, kind: &str) -> CanvasResult<Self> {
        Ok(Self::create(id, start, end, kind.parse()?))
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line(_) => ElementKind::Line,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Circle(_) => ElementKind::Circle,
            Element::Freehand(_) => ElementKind::Pencil,
            Element::Text(_) => ElementKind::Text,
        }
    }

    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(e) => e.id(),
            Element::Rectangle(e) => e.id(),
            Element::Circle(e) => e.id(),
            Element::Freehand(e) => e.id(),
            Element::Text(e) => e.id(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Element::Line(e) => e.bounds(),
            Element::Rectangle(e) => e.bounds(),
            Element::Circle(e) => e.bounds(),
            Element::Freehand(e) => e.bounds(),
            Element::Text(e) => e.bounds(),
        }
    }

    pub fn position_within(&self, point: Point) -> Option<Position> {
        match self {
            Element::Line(e) => e.position_within(point),
            Element::Rectangle(e) => e.position_within(point),
            Element::Circle(e) => e.position_within(point),
            Element::Freehand(e) => e.position_within(point),
            Element::Text(e) => e.position_within(point),
        }
    }

    /// Corner (x1, y1); the first point for pencil strokes.
    pub fn start(&self) -> Point {
        match self {
            Element::Line(e) => e.start,
            Element::Rectangle(e) => e.start,
            Element::Circle(e) => e.start,
            Element::Freehand(e) => e.first(),
            Element::Text(e) => e.start,
        }
    }

    /// Corner (x2, y2); the last point for pencil strokes.
    pub fn end(&self) -> Point {
        match self {
            Element::Line(e) => e.end,
            Element::Rectangle(e) => e.end,
            Element::Circle(e) => e.end,
            Element::Freehand(e) => e.last(),
            Element::Text(e) => e.end,
        }
    }

    /// Text content, if this is a text element.
    pub fn content(&self) -> Option<&str> {
        match self {
            Element::Text(t) => Some(&t.content),
            _ => None,
        }
    }

    pub fn as_freehand(&self) -> Option<&Freehand> {
        match self {
            Element::Freehand(f) => Some(f),
            _ => None,
        }
    }

    /// Canonical copy with the draw direction removed.
    ///
    /// Rectangles and circles get min/max corners, lines get endpoints
    /// ordered by x then y. Other variants are returned unchanged.
    pub fn normalized(&self) -> Self {
        match self {
            Element::Rectangle(r) => {
                let (start, end) = min_max_corners(r.start, r.end);
                Element::Rectangle(Rectangle::new(r.id, start, end))
            }
            Element::Circle(c) => {
                let (start, end) = min_max_corners(c.start, c.end);
                Element::Circle(Circle::new(c.id, start, end))
            }
            Element::Line(l) => {
                let (start, end) = ordered_endpoints(l.start, l.end);
                Element::Line(Line::new(l.id, start, end))
            }
            Element::Freehand(_) | Element::Text(_) => self.clone(),
        }
    }
}

/// Extra inputs for [`Elements::update`].
#[derive(Clone, Copy, Default)]
pub struct UpdateOptions<'a> {
    /// New text content (text elements only).
    pub content: &'a str,
    /// Measurement backend used to size text boxes.
    pub measure: Option<&'a dyn TextMeasure>,
}

impl<'a> UpdateOptions<'a> {
    pub fn text(content: &'a str, measure: &'a dyn TextMeasure) -> Self {
        Self {
            content,
            measure: Some(measure),
        }
    }
}

/// Ordered element collection where every element's id is its index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Elements(Vec<Element>);

impl Elements {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Id the next appended element will receive.
    pub fn next_id(&self) -> ElementId {
        self.0.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.0.get(id)
    }

    pub fn last(&self) -> Option<&Element> {
        self.0.last()
    }

    /// Elements in drawing order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.0.iter()
    }

    /// Copy of the collection with `element` appended.
    pub fn with_appended(&self, element: Element) -> Self {
        debug_assert_eq!(element.id(), self.next_id());
        let mut elements = self.clone();
        elements.0.push(element);
        elements
    }

    /// Copy of the collection with the element at `element.id()` replaced.
    pub fn with_replaced(&self, element: Element) -> CanvasResult<Self> {
        let id = element.id();
        let mut elements = self.clone();
        let slot = elements.0.get_mut(id).ok_or(CanvasError::UnknownElement(id))?;
        *slot = element;
        Ok(elements)
    }

    /// Apply a geometry update to element `id` and return the new collection.
    ///
    /// Lines, rectangles and circles are rebuilt at the new corners. Pencil
    /// strokes append `end` to their points. Text is resized from the measured
    /// width of `options.content` and stores that content.
    ///
    /// Pencil strokes are only ever extended here. Moving a whole stroke
    /// rebuilds its points from the grab offsets and goes through
    /// [`Elements::with_replaced`] instead.
    pub fn update(
        &self,
        id: ElementId,
        start: Point,
        end: Point,
        kind: ElementKind,
        options: UpdateOptions<'_>,
    ) -> CanvasResult<Self> {
        let element = match kind {
            ElementKind::Line | ElementKind::Rectangle | ElementKind::Circle => {
                Element::create(id, start, end, kind)
            }
            ElementKind::Pencil => {
                let mut stroke = self
                    .get(id)
                    .and_then(Element::as_freehand)
                    .cloned()
                    .ok_or(CanvasError::UnknownElement(id))?;
                stroke.add_point(end);
                Element::Freehand(stroke)
            }
            ElementKind::Text => {
                let measure = options.measure.ok_or(CanvasError::MeasurementUnavailable)?;
                let width = measure
                    .measure_width(options.content)
                    .ok_or(CanvasError::MeasurementUnavailable)?;
                let end = start + Vec2::new(width, measure.line_height());
                Element::Text(Text::with_content(id, start, end, options.content.to_string()))
            }
        };
        self.with_replaced(element)
    }

    /// Apply a named-kind update, failing on unknown names.
    pub fn update_named(
        &self,
        id: ElementId,
        start: Point,
        end: Point,
        kind: &str,
        options: UpdateOptions<'_>,
    ) -> CanvasResult<Self> {
        self.update(id, start, end, kind.parse()?, options)
    }
}

impl From<Vec<Element>> for Elements {
    fn from(elements: Vec<Element>) -> Self {
        Self(elements)
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoFonts;

    impl TextMeasure for NoFonts {
        fn measure_width(&self, _text: &str) -> Option<f64> {
            None
        }

        fn line_height(&self) -> f64 {
            20.0
        }
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_create_each_kind() {
        let rect = Element::create(0, p(1.0, 2.0), p(3.0, 4.0), ElementKind::Rectangle);
        assert_eq!(rect.kind(), ElementKind::Rectangle);
        assert_eq!(rect.start(), p(1.0, 2.0));
        assert_eq!(rect.end(), p(3.0, 4.0));

        let pencil = Element::create(1, p(1.0, 2.0), p(30.0, 40.0), ElementKind::Pencil);
        assert_eq!(pencil.as_freehand().unwrap().points, vec![p(1.0, 2.0)]);

        let text = Element::create(2, p(5.0, 5.0), p(5.0, 5.0), ElementKind::Text);
        assert_eq!(text.content(), Some(""));
        assert_eq!(text.id(), 2);
    }

    #[test]
    fn test_create_unknown_kind() {
        let result = Element::create_named(0, p(0.0, 0.0), p(1.0, 1.0), "triangle");
        assert_eq!(result, Err(CanvasError::UnrecognizedType("triangle".into())));
    }

    #[test]
    fn test_kind_names_roundtrip() {
        for kind in [
            ElementKind::Line,
            ElementKind::Rectangle,
            ElementKind::Circle,
            ElementKind::Pencil,
            ElementKind::Text,
        ] {
            assert_eq!(kind.name().parse::<ElementKind>(), Ok(kind));
        }
        assert!("selection".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_update_replaces_box_elements() {
        let elements = Elements::new()
            .with_appended(Element::create(0, p(0.0, 0.0), p(0.0, 0.0), ElementKind::Circle));
        let updated = elements
            .update(0, p(0.0, 0.0), p(40.0, 20.0), ElementKind::Circle, UpdateOptions::default())
            .unwrap();
        assert_eq!(updated.get(0).unwrap().end(), p(40.0, 20.0));
        // The source collection is untouched.
        assert_eq!(elements.get(0).unwrap().end(), p(0.0, 0.0));
    }

    #[test]
    fn test_update_appends_pencil_points() {
        let elements = Elements::new()
            .with_appended(Element::create(0, p(0.0, 0.0), p(0.0, 0.0), ElementKind::Pencil));
        let elements = elements
            .update(0, p(0.0, 0.0), p(1.0, 1.0), ElementKind::Pencil, UpdateOptions::default())
            .unwrap()
            .update(0, p(0.0, 0.0), p(2.0, 3.0), ElementKind::Pencil, UpdateOptions::default())
            .unwrap();
        let points = &elements.get(0).unwrap().as_freehand().unwrap().points;
        assert_eq!(points, &vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 3.0)]);
    }

    #[test]
    fn test_update_text_measures_content() {
        let measure = ApproximateMeasure::default();
        let elements = Elements::new()
            .with_appended(Element::create(0, p(10.0, 10.0), p(10.0, 10.0), ElementKind::Text));
        let elements = elements
            .update(0, p(10.0, 10.0), p(0.0, 0.0), ElementKind::Text, UpdateOptions::text("x=2", &measure))
            .unwrap();
        let text = elements.get(0).unwrap();
        assert_eq!(text.content(), Some("x=2"));
        assert!((text.end().x - 46.0).abs() < f64::EPSILON);
        assert!((text.end().y - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_update_text_without_measurement() {
        let elements = Elements::new()
            .with_appended(Element::create(0, p(0.0, 0.0), p(0.0, 0.0), ElementKind::Text));
        let result = elements.update(0, p(0.0, 0.0), p(0.0, 0.0), ElementKind::Text, UpdateOptions::text("a", &NoFonts));
        assert_eq!(result, Err(CanvasError::MeasurementUnavailable));

        let result = elements.update(0, p(0.0, 0.0), p(0.0, 0.0), ElementKind::Text, UpdateOptions::default());
        assert_eq!(result, Err(CanvasError::MeasurementUnavailable));
    }

    #[test]
    fn test_update_unknown_id() {
        let elements = Elements::new();
        let result = elements.update(4, p(0.0, 0.0), p(1.0, 1.0), ElementKind::Line, UpdateOptions::default());
        assert_eq!(result, Err(CanvasError::UnknownElement(4)));
    }

    #[test]
    fn test_update_named_unknown_kind() {
        let elements = Elements::new()
            .with_appended(Element::create(0, p(0.0, 0.0), p(0.0, 0.0), ElementKind::Line));
        let result = elements.update_named(0, p(0.0, 0.0), p(1.0, 1.0), "hexagon", UpdateOptions::default());
        assert_eq!(result, Err(CanvasError::UnrecognizedType("hexagon".into())));
    }

    #[test]
    fn test_normalize_rectangle_and_circle() {
        for kind in [ElementKind::Rectangle, ElementKind::Circle] {
            let element = Element::create(0, p(100.0, 10.0), p(20.0, 80.0), kind).normalized();
            assert_eq!(element.start(), p(20.0, 10.0));
            assert_eq!(element.end(), p(100.0, 80.0));
        }
    }

    #[test]
    fn test_normalize_line_orders_endpoints() {
        let line = Element::create(0, p(50.0, 0.0), p(10.0, 30.0), ElementKind::Line).normalized();
        assert_eq!(line.start(), p(10.0, 30.0));
        assert_eq!(line.end(), p(50.0, 0.0));

        let vertical = Element::create(0, p(5.0, 9.0), p(5.0, 1.0), ElementKind::Line).normalized();
        assert_eq!(vertical.start(), p(5.0, 1.0));
        assert_eq!(vertical.end(), p(5.0, 9.0));
    }

    #[test]
    fn test_normalize_leaves_text_and_pencil() {
        let text = Element::create(0, p(9.0, 9.0), p(1.0, 1.0), ElementKind::Text);
        assert_eq!(text.normalized(), text);
        let pencil = Element::create(0, p(9.0, 9.0), p(1.0, 1.0), ElementKind::Pencil);
        assert_eq!(pencil.normalized(), pencil);
    }

    #[test]
    fn test_serde_tags() {
        let element = Element::create(0, p(1.0, 1.0), p(1.0, 1.0), ElementKind::Pencil);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "pencil");
        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }
}
