//! Compass rose graduations.
//!
//! A 360×360 dial gets one radial tick every 5°, drawn inward from the rim.
//! Angle 0 sits at the top and angles grow clockwise, so screen coordinates
//! are computed from `angle - 90°` with y pointing down.

use std::collections::HashMap;
use std::fmt::Write as _;

use log::debug;
use nalgebra::{Point2, Vector2};

pub const CENTER: (f64, f64) = (180.0, 180.0);
pub const OUTER_RADIUS: f64 = 156.0;
pub const TICK_STEP: u32 = 5;
pub const TICK_STROKE: &str = "rgba(0,255,65,0.4)";

/// Visual weight of a tick, by the coarsest graduation its angle falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickClass {
    /// multiples of 90°
    Major,
    /// multiples of 45°
    Medium,
    /// multiples of 10°
    Minor,
    /// remaining multiples of 5°
    Fine,
}

impl TickClass {
    pub fn for_angle(angle: u32) -> Self {
        if angle % 90 == 0 {
            TickClass::Major
        } else if angle % 45 == 0 {
            TickClass::Medium
        } else if angle % 10 == 0 {
            TickClass::Minor
        } else {
            TickClass::Fine
        }
    }

    pub fn length(self) -> f64 {
        match self {
            TickClass::Major => 20.0,
            TickClass::Medium => 13.0,
            TickClass::Minor => 8.0,
            TickClass::Fine => 4.0,
        }
    }

    pub fn opacity(self) -> f64 {
        match self {
            TickClass::Major => 0.8,
            TickClass::Medium => 0.5,
            TickClass::Minor => 0.28,
            TickClass::Fine => 0.14,
        }
    }

    pub fn stroke_width(self) -> f64 {
        match self {
            TickClass::Major => 2.5,
            TickClass::Medium => 1.5,
            TickClass::Minor | TickClass::Fine => 1.0,
        }
    }
}

/// One radial line segment on the dial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    pub angle: u32,
    pub class: TickClass,
    /// on the rim
    pub outer: Point2<f64>,
    pub inner: Point2<f64>,
}

impl Tick {
    pub fn new(angle: u32) -> Self {
        let class = TickClass::for_angle(angle);
        let rad = (f64::from(angle) - 90.0).to_radians();
        let center = Point2::new(CENTER.0, CENTER.1);
        let dir = Vector2::new(rad.cos(), rad.sin());
        Self {
            angle,
            class,
            outer: center + dir * OUTER_RADIUS,
            inner: center + dir * (OUTER_RADIUS - class.length()),
        }
    }

    /// SVG attributes of the `<line>` element, coordinates to one decimal.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("x1", format!("{:.1}", self.outer.x)),
            ("y1", format!("{:.1}", self.outer.y)),
            ("x2", format!("{:.1}", self.inner.x)),
            ("y2", format!("{:.1}", self.inner.y)),
            ("stroke", TICK_STROKE.to_string()),
            ("stroke-width", self.class.stroke_width().to_string()),
            ("opacity", self.class.opacity().to_string()),
            ("stroke-linecap", "round".to_string()),
        ]
    }
}

/// All 72 ticks, clockwise from north.
pub fn compass_rose_ticks() -> Vec<Tick> {
    (0..360).step_by(TICK_STEP as usize).map(Tick::new).collect()
}

/// An element that line children can be appended to.
pub trait TickGroup {
    fn append_line(&mut self, tick: &Tick);
}

/// A drawing surface whose groups are looked up by element id.
pub trait TickSurface {
    type Group: TickGroup;

    fn group_mut(&mut self, id: &str) -> Option<&mut Self::Group>;
}

/// Id of the tick group belonging to the dial `svg_id`.
pub fn ticks_group_id(svg_id: &str) -> String {
    format!("{svg_id}-ticks")
}

/// Append the dial's ticks to the `<svg_id>-ticks` group.
///
/// A missing group is not an error; nothing is drawn. Every call appends a
/// fresh set of lines.
pub fn build_compass_rose_ticks<S: TickSurface>(surface: &mut S, svg_id: &str) {
    let group_id = ticks_group_id(svg_id);
    let Some(group) = surface.group_mut(&group_id) else {
        debug!("no element #{group_id}, skipping compass rose ticks");
        return;
    };
    for tick in compass_rose_ticks() {
        group.append_line(&tick);
    }
}

/// In-memory `<g>` element holding rendered `<line>` markup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgGroup {
    id: String,
    children: Vec<String>,
}

impl SvgGroup {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[String] {
        &self.children
    }

    pub fn to_markup(&self) -> String {
        let mut out = format!("<g id=\"{}\">\n", escape_attr(&self.id));
        for child in &self.children {
            let _ = writeln!(out, "  {child}");
        }
        out.push_str("</g>");
        out
    }
}

impl TickGroup for SvgGroup {
    fn append_line(&mut self, tick: &Tick) {
        let mut line = String::from("<line");
        for (name, value) in tick.attributes() {
            let _ = write!(line, " {name}=\"{value}\"");
        }
        line.push_str("/>");
        self.children.push(line);
    }
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// In-memory SVG document: a set of groups addressable by id.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    groups: HashMap<String, SvgGroup>,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing an empty tick group for the dial `svg_id`.
    pub fn with_dial(svg_id: &str) -> Self {
        let mut doc = Self::new();
        doc.insert_group(SvgGroup::new(ticks_group_id(svg_id)));
        doc
    }

    pub fn insert_group(&mut self, group: SvgGroup) {
        let _ = self.groups.insert(group.id.clone(), group);
    }

    pub fn group(&self, id: &str) -> Option<&SvgGroup> {
        self.groups.get(id)
    }
}

impl TickSurface for SvgDocument {
    type Group = SvgGroup;

    fn group_mut(&mut self, id: &str) -> Option<&mut SvgGroup> {
        self.groups.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn full_pass_has_72_ticks() {
        let ticks = compass_rose_ticks();
        assert_eq!(ticks.len(), 72);
        assert!(ticks.iter().all(|t| t.angle % 5 == 0 && t.angle < 360));
    }

    #[test]
    fn classes_follow_angle() {
        assert_eq!(TickClass::for_angle(0), TickClass::Major);
        assert_eq!(TickClass::for_angle(270), TickClass::Major);
        assert_eq!(TickClass::for_angle(135), TickClass::Medium);
        assert_eq!(TickClass::for_angle(20), TickClass::Minor);
        assert_eq!(TickClass::for_angle(90 + 15), TickClass::Fine);

        let ticks = compass_rose_ticks();
        let count = |c: TickClass| ticks.iter().filter(|t| t.class == c).count();
        assert_eq!(count(TickClass::Major), 4);
        assert_eq!(count(TickClass::Medium), 4);
        assert_eq!(count(TickClass::Minor), 32);
        assert_eq!(count(TickClass::Fine), 32);
    }

    #[test]
    fn north_tick_points_up() {
        let tick = Tick::new(0);
        assert_relative_eq!(tick.outer.x, 180.0, epsilon = 1e-9);
        assert_relative_eq!(tick.outer.y, 24.0, epsilon = 1e-9);
        assert_relative_eq!(tick.inner.y, 44.0, epsilon = 1e-9);
    }

    #[test]
    fn east_tick_is_on_the_right() {
        let tick = Tick::new(90);
        assert_relative_eq!(tick.outer.x, 336.0, epsilon = 1e-9);
        assert_relative_eq!(tick.outer.y, 180.0, epsilon = 1e-9);
        assert_relative_eq!(tick.inner.x, 316.0, epsilon = 1e-9);
    }

    #[test]
    fn attributes_use_one_decimal() {
        let attrs = Tick::new(0).attributes();
        assert_eq!(attrs[0], ("x1", "180.0".to_string()));
        assert_eq!(attrs[1], ("y1", "24.0".to_string()));
        assert_eq!(attrs[3], ("y2", "44.0".to_string()));
        assert_eq!(attrs[5], ("stroke-width", "2.5".to_string()));
        assert_eq!(attrs[6], ("opacity", "0.8".to_string()));

        let fine = Tick::new(5).attributes();
        assert_eq!(fine[5].1, "1");
        assert_eq!(fine[6].1, "0.14");
    }

    #[test]
    fn renders_into_tick_group() {
        let mut doc = SvgDocument::with_dial("compass");
        build_compass_rose_ticks(&mut doc, "compass");

        let group = doc.group("compass-ticks").unwrap();
        assert_eq!(group.children().len(), 72);
        assert!(group.children()[0].starts_with("<line x1=\"180.0\" y1=\"24.0\""));
        assert!(group.to_markup().starts_with("<g id=\"compass-ticks\">"));
    }

    #[test]
    fn missing_group_is_a_no_op() {
        let mut doc = SvgDocument::with_dial("other");
        build_compass_rose_ticks(&mut doc, "compass");
        assert!(doc.group("compass-ticks").is_none());
        assert!(doc.group("other-ticks").unwrap().children().is_empty());
    }

    #[test]
    fn second_call_appends_duplicates() {
        let mut doc = SvgDocument::with_dial("qibla");
        build_compass_rose_ticks(&mut doc, "qibla");
        build_compass_rose_ticks(&mut doc, "qibla");
        assert_eq!(doc.group("qibla-ticks").unwrap().children().len(), 144);
    }

    #[test]
    fn group_id_is_escaped_in_markup() {
        let mut doc = SvgDocument::with_dial("a\"b&<c>");
        build_compass_rose_ticks(&mut doc, "a\"b&<c>");
        let group = doc.group("a\"b&<c>-ticks").unwrap();
        assert_eq!(group.children().len(), 72);
        assert!(group
            .to_markup()
            .starts_with("<g id=\"a&quot;b&amp;&lt;c&gt;-ticks\">"));
    }
}
