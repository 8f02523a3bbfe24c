//! Composite nodes and the packing algorithms.

use std::rc::Rc;

use log::{debug, trace, warn};

use panelkit_core::{
    footprint::{FootprintKind, Footprints, Part},
    geometry::{Axis, Bounds, Point, Side},
};

use super::{
    FixedWidthOptions, LayoutElement, LayoutError, LayoutNode, LineOptions, PartEntry, Placeable,
};

const LINE_LABEL: &str = "Line";
const FIXED_WIDTH_LINE_LABEL: &str = "Fixed width line";

/// Direction of a fold over edge coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Min,
    Max,
}

impl Extreme {
    /// Starting value of the fold.
    fn sentinel(self) -> f64 {
        match self {
            Self::Min => f64::INFINITY,
            Self::Max => f64::NEG_INFINITY,
        }
    }

    fn pick(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Min => a.min(b),
            Self::Max => a.max(b),
        }
    }
}

/// An ordered sequence of nodes packed by one of the factories.
///
/// Footprints are the bounding union of the children at build time and the
/// group starts at position `(0, 0)`. Translating the group translates every
/// descendant.
#[derive(Debug, Clone)]
pub struct LayoutGroup {
    label: String,
    elements: Vec<LayoutNode>,
    footprints: Footprints,
}

impl LayoutGroup {
    /// Builds a group whose footprints bound `elements`.
    ///
    /// `padded` is a `(axis, start, end)` range both footprints are widened
    /// to cover along `axis`.
    fn from_nodes(
        label: impl Into<String>,
        elements: Vec<LayoutNode>,
        padded: Option<(Axis, f64, f64)>,
    ) -> Self {
        let mut inside = union_bounds(&elements, FootprintKind::Inside);
        let mut outside = union_bounds(&elements, FootprintKind::Outside);
        if let Some((axis, start, end)) = padded {
            inside = widen_along(inside, axis, start, end);
            outside = widen_along(outside, axis, start, end);
        }
        let footprints = Footprints::new(
            inside.to_size(),
            outside.to_size(),
            inside.center(),
            outside.center(),
        );

        Self {
            label: label.into(),
            elements,
            footprints,
        }
    }

    /// Packs nodes one after another along a line.
    ///
    /// Each node is sized by its total footprint, or its outside footprint
    /// when [`LineOptions::align_to_outside_footprint`] is set, and
    /// consecutive footprints are separated by exactly `margin`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyInput`] when `elements` is empty.
    pub fn line_of_elements<I>(elements: I, options: &LineOptions) -> Result<Self, LayoutError>
    where
        I: IntoIterator,
        I::Item: Into<LayoutNode>,
    {
        let nodes: Vec<LayoutNode> = elements.into_iter().map(Into::into).collect();
        if nodes.is_empty() {
            return Err(LayoutError::EmptyInput(
                "cannot create a line with no elements".to_string(),
            ));
        }

        Ok(Self::pack_line(nodes, options, None))
    }

    /// Packing loop shared by the line factories.
    ///
    /// `padding` reserves empty space before the first node and after the
    /// last one. The padded range counts towards centring and towards the
    /// group's footprints along the packing axis only.
    fn pack_line(mut nodes: Vec<LayoutNode>, options: &LineOptions, padding: Option<f64>) -> Self {
        if options.center_at_origin && options.align_start_to_outside_footprint {
            warn!(
                "Combining center_at_origin with align_start_to_outside_footprint discards the start alignment"
            );
        }

        let axis = options.axis();
        let cross = axis.cross();
        let kind = options.sizing_kind();

        // Shift that puts the first outside footprint's start edge at 0.
        let mut origin = 0.0;
        if options.align_start_to_outside_footprint && !options.align_to_outside_footprint {
            let first = nodes[0].footprints();
            origin = first.outside().along(axis) / 2.0 - first.outside_offset().along(axis)
                - first.total().along(axis) / 2.0
                + first.inside_offset().along(axis);
        }

        let mut cursor = origin + padding.unwrap_or(0.0);
        for (idx, node) in nodes.iter_mut().enumerate() {
            if idx > 0 {
                cursor += options.margin;
            }

            let half = node.footprints().footprint(kind).along(axis) / 2.0;
            let offset = node.footprints().offset(kind);
            let across = if options.align_other_dimension_at_0 {
                0.0
            } else {
                -offset.along(cross)
            };

            cursor += half;
            node.translate(axis.point(cursor - offset.along(axis), across));
            cursor += half;

            trace!(label = node.label(), cursor; "Placed node in line");
        }
        let mut padded = padding.map(|padding| (origin, cursor + padding));

        if options.center_at_origin {
            let mut start = extreme_edge(&nodes, kind, axis.start_side(), Extreme::Min);
            let mut end = extreme_edge(&nodes, kind, axis.end_side(), Extreme::Max);
            if let Some((padded_start, padded_end)) = padded {
                start = start.min(padded_start);
                end = end.max(padded_end);
            }
            let shift = -(start + end) / 2.0;
            for node in &mut nodes {
                node.translate(axis.point(shift, 0.0));
            }
            padded = padded.map(|(start, end)| (start + shift, end + shift));
        }

        debug!(
            nodes = nodes.len(),
            margin = options.margin,
            horizontal = options.horizontal,
            sizing = kind.name();
            "Packed line"
        );

        Self::from_nodes(
            LINE_LABEL,
            nodes,
            padded.map(|(start, end)| (axis, start, end)),
        )
    }

    /// Wraps parts into elements, then packs them with [`Self::line_of_elements`].
    ///
    /// Unlabelled parts receive a random unique label.
    pub fn line_of_parts<I>(parts: I, options: &LineOptions) -> Result<Self, LayoutError>
    where
        I: IntoIterator,
        I::Item: Into<PartEntry>,
    {
        Self::line_of_elements(elements_from_parts(parts), options)
    }

    /// Packs nodes so that they span exactly `size` along the packing axis.
    ///
    /// The margin is `(size - Σ footprints) / (n - 1)`, or `/ (n + 1)` with
    /// margins on the sides. A single node without side margins gets a
    /// margin of 0. A negative margin overlaps the nodes and is only logged.
    ///
    /// Side margins are empty space, not children: across the packing axis
    /// the group's footprints bound its nodes alone.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyInput`] when `elements` is empty.
    pub fn fixed_width_line_of_elements<I>(
        size: f64,
        elements: I,
        options: &FixedWidthOptions,
    ) -> Result<Self, LayoutError>
    where
        I: IntoIterator,
        I::Item: Into<LayoutNode>,
    {
        let nodes: Vec<LayoutNode> = elements.into_iter().map(Into::into).collect();
        if nodes.is_empty() {
            return Err(LayoutError::EmptyInput(
                "cannot create a fixed width line with no elements".to_string(),
            ));
        }

        let line_options = options.line_options(0.0);
        let axis = line_options.axis();
        let kind = line_options.sizing_kind();

        let used: f64 = nodes
            .iter()
            .map(|node| node.footprints().footprint(kind).along(axis))
            .sum();
        let gaps = nodes.len() - 1 + if options.add_margin_on_sides { 2 } else { 0 };
        let margin = if gaps == 0 {
            0.0
        } else {
            (size - used) / gaps as f64
        };

        if margin < 0.0 {
            warn!(
                size, used, margin;
                "Fixed width line is narrower than its elements, they will overlap"
            );
        }

        let padding = options.add_margin_on_sides.then_some(margin);
        let group = Self::pack_line(nodes, &options.line_options(margin), padding);
        Ok(group.with_label(FIXED_WIDTH_LINE_LABEL))
    }

    /// Wraps parts into elements, then packs them with
    /// [`Self::fixed_width_line_of_elements`].
    pub fn fixed_width_line_of_parts<I>(
        size: f64,
        parts: I,
        options: &FixedWidthOptions,
    ) -> Result<Self, LayoutError>
    where
        I: IntoIterator,
        I::Item: Into<PartEntry>,
    {
        Self::fixed_width_line_of_elements(size, elements_from_parts(parts), options)
    }

    /// Lays out `rows × cols` copies of one part.
    ///
    /// Every row is a horizontal line labelled `"{label} row {n}"` whose
    /// elements are labelled `"{label} {row}-{col}"` (1-based). Rows are then
    /// stacked along Y, row 1 lowest.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::EmptyInput`] when `rows` or `cols` is zero.
    pub fn grid_of_part(
        label: &str,
        part: Rc<dyn Part>,
        rows: usize,
        cols: usize,
        margin_rows: f64,
        margin_cols: f64,
    ) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::EmptyInput(format!(
                "grid `{label}` needs at least one row and one column, got {rows}x{cols}"
            )));
        }

        let row_options = LineOptions::horizontal().with_margin(margin_cols);
        let row_groups = (1..=rows)
            .map(|row| {
                let entries = (1..=cols)
                    .map(|col| PartEntry::labeled(format!("{label} {row}-{col}"), Rc::clone(&part)));
                Self::line_of_parts(entries, &row_options)
                    .map(|group| group.with_label(format!("{label} row {row}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let grid = Self::line_of_elements(row_groups, &LineOptions::vertical().with_margin(margin_rows))?;
        debug!(label, rows, cols; "Built grid");
        Ok(grid.with_label(label))
    }

    /// Renames the group (builder style).
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Direct children in packing order, spacers included.
    pub fn elements(&self) -> &[LayoutNode] {
        &self.elements
    }

    /// Every leaf with a part, depth first in packing order.
    pub fn get_elements(&self) -> Vec<&LayoutElement> {
        self.elements
            .iter()
            .flat_map(LayoutNode::get_elements)
            .collect()
    }

    /// Folds one edge query over `elements`.
    pub fn extreme_point_in_footprints_of_elements<'a, P, I>(
        elements: I,
        use_inside: bool,
        side: Side,
        extreme: Extreme,
    ) -> f64
    where
        P: Placeable + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        extreme_edge(elements, FootprintKind::from_use_inside(use_inside), side, extreme)
    }

    pub fn leftmost_point_in_footprints_of_elements<'a, P, I>(elements: I, use_inside: bool) -> f64
    where
        P: Placeable + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        Self::extreme_point_in_footprints_of_elements(elements, use_inside, Side::Left, Extreme::Min)
    }

    pub fn rightmost_point_in_footprints_of_elements<'a, P, I>(elements: I, use_inside: bool) -> f64
    where
        P: Placeable + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        Self::extreme_point_in_footprints_of_elements(elements, use_inside, Side::Right, Extreme::Max)
    }

    pub fn topmost_point_in_footprints_of_elements<'a, P, I>(elements: I, use_inside: bool) -> f64
    where
        P: Placeable + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        Self::extreme_point_in_footprints_of_elements(elements, use_inside, Side::Top, Extreme::Max)
    }

    pub fn bottommost_point_in_footprints_of_elements<'a, P, I>(elements: I, use_inside: bool) -> f64
    where
        P: Placeable + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        Self::extreme_point_in_footprints_of_elements(elements, use_inside, Side::Bottom, Extreme::Min)
    }
}

impl Placeable for LayoutGroup {
    fn label(&self) -> &str {
        &self.label
    }

    fn footprints(&self) -> &Footprints {
        &self.footprints
    }

    fn translate(&mut self, delta: Point) -> &mut Self {
        for node in &mut self.elements {
            node.translate(delta);
        }
        self.footprints.translate(delta);
        self
    }
}

fn elements_from_parts<I>(parts: I) -> Vec<LayoutElement>
where
    I: IntoIterator,
    I::Item: Into<PartEntry>,
{
    parts
        .into_iter()
        .map(|entry| entry.into().into_element())
        .collect()
}

fn extreme_edge<'a, P, I>(elements: I, kind: FootprintKind, side: Side, extreme: Extreme) -> f64
where
    P: Placeable + 'a,
    I: IntoIterator<Item = &'a P>,
{
    elements.into_iter().fold(extreme.sentinel(), |acc, element| {
        extreme.pick(acc, element.footprints().edge(kind, side))
    })
}

fn union_bounds(nodes: &[LayoutNode], kind: FootprintKind) -> Bounds {
    Bounds::new(
        extreme_edge(nodes, kind, Side::Left, Extreme::Min),
        extreme_edge(nodes, kind, Side::Bottom, Extreme::Min),
        extreme_edge(nodes, kind, Side::Right, Extreme::Max),
        extreme_edge(nodes, kind, Side::Top, Extreme::Max),
    )
}

/// Extends `bounds` along `axis` so that it covers `start..end`.
fn widen_along(bounds: Bounds, axis: Axis, start: f64, end: f64) -> Bounds {
    match axis {
        Axis::X => Bounds::new(
            bounds.min_x().min(start),
            bounds.min_y(),
            bounds.max_x().max(end),
            bounds.max_y(),
        ),
        Axis::Y => Bounds::new(
            bounds.min_x(),
            bounds.min_y().min(start),
            bounds.max_x(),
            bounds.max_y().max(end),
        ),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use panelkit_core::{footprint::PartFootprint, geometry::Size};

    use super::*;

    fn block(width: f64, height: f64) -> Rc<dyn Part> {
        Rc::new(PartFootprint::new(
            Size::new(width, height),
            Size::new(width, height),
        ))
    }

    fn jack() -> Rc<dyn Part> {
        Rc::new(
            PartFootprint::new(Size::new(20.0, 6.0), Size::new(10.0, 4.0))
                .with_inside_offset(Point::new(3.0, 1.5)),
        )
    }

    fn xs(group: &LayoutGroup) -> Vec<f64> {
        group.get_elements().iter().map(|e| e.position().x()).collect()
    }

    #[test]
    fn test_three_element_line() {
        let group = LayoutGroup::line_of_parts(
            [
                PartEntry::labeled("A", block(10.0, 5.0)),
                PartEntry::labeled("B", block(8.0, 5.0)),
                PartEntry::labeled("C", block(12.0, 5.0)),
            ],
            &LineOptions::horizontal().with_margin(2.0),
        )
        .unwrap();

        let positions = xs(&group);
        assert_approx_eq!(f64, positions[0], -12.0);
        assert_approx_eq!(f64, positions[1], -1.0);
        assert_approx_eq!(f64, positions[2], 11.0);

        let elements = group.get_elements();
        let left = LayoutGroup::leftmost_point_in_footprints_of_elements(elements.iter().copied(), true);
        let right = LayoutGroup::rightmost_point_in_footprints_of_elements(elements.iter().copied(), true);
        assert_approx_eq!(f64, left, -17.0);
        assert_approx_eq!(f64, right, 17.0);
        assert_approx_eq!(f64, group.footprints().total().width(), 34.0);
        assert_eq!(group.label(), "Line");
    }

    #[test]
    fn test_empty_line_fails() {
        let err = LayoutGroup::line_of_elements(Vec::<LayoutElement>::new(), &LineOptions::default())
            .unwrap_err();
        assert!(matches!(err, LayoutError::EmptyInput(_)));

        let err = LayoutGroup::fixed_width_line_of_parts(
            10.0,
            Vec::<PartEntry>::new(),
            &FixedWidthOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::EmptyInput(_)));
    }

    #[test]
    fn test_outside_footprints_abut() {
        let group = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", jack()), PartEntry::labeled("B", block(6.0, 6.0))],
            &LineOptions::horizontal()
                .with_margin(0.0)
                .with_align_to_outside_footprint(true),
        )
        .unwrap();

        let elements = group.get_elements();
        assert_approx_eq!(
            f64,
            elements[0].rightmost_point_in_footprint(false),
            elements[1].leftmost_point_in_footprint(false)
        );

        let left = elements[0].leftmost_point_in_footprint(false);
        let right = elements[1].rightmost_point_in_footprint(false);
        assert_approx_eq!(f64, left, -right);
    }

    #[test]
    fn test_total_footprint_uses_inside_offset() {
        let group = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", jack()), PartEntry::labeled("B", jack())],
            &LineOptions::horizontal().with_margin(1.0),
        )
        .unwrap();

        let elements = group.get_elements();
        // Total footprint is 20 wide and centred 3 mm right of the position.
        assert_approx_eq!(f64, elements[0].position().x(), -10.5 - 3.0);
        assert_approx_eq!(f64, elements[1].position().x(), 10.5 - 3.0);
    }

    #[test]
    fn test_cross_axis_alignment() {
        let centred = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", jack())],
            &LineOptions::horizontal(),
        )
        .unwrap();
        assert_approx_eq!(f64, centred.get_elements()[0].position().y(), -1.5);

        let at_zero = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", jack())],
            &LineOptions::horizontal().with_align_other_dimension_at_0(true),
        )
        .unwrap();
        assert_approx_eq!(f64, at_zero.get_elements()[0].position().y(), 0.0);
    }

    #[test]
    fn test_vertical_line_packs_upward() {
        let group = LayoutGroup::line_of_parts(
            [PartEntry::labeled("Low", block(4.0, 10.0)), PartEntry::labeled("High", block(4.0, 6.0))],
            &LineOptions::vertical().with_margin(4.0),
        )
        .unwrap();

        let ys: Vec<f64> = group.get_elements().iter().map(|e| e.position().y()).collect();
        assert_approx_eq!(f64, ys[0], -5.0);
        assert_approx_eq!(f64, ys[1], 7.0);
        assert_approx_eq!(f64, group.footprints().inside().height(), 20.0);
    }

    #[test]
    fn test_start_aligned_to_outside_footprint() {
        let group = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", jack()), PartEntry::labeled("B", jack())],
            &LineOptions::horizontal()
                .with_margin(2.0)
                .with_center_at_origin(false)
                .with_align_start_to_outside_footprint(true),
        )
        .unwrap();

        let elements = group.get_elements();
        assert_approx_eq!(f64, elements[0].leftmost_point_in_footprint(false), 0.0);
        assert_approx_eq!(
            f64,
            elements[1].leftmost_point_in_footprint(true) - elements[0].rightmost_point_in_footprint(true),
            2.0
        );
    }

    #[test]
    fn test_uncentred_line_starts_at_zero() {
        let group = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", block(10.0, 5.0)), PartEntry::labeled("B", block(8.0, 5.0))],
            &LineOptions::horizontal().with_margin(2.0).with_center_at_origin(false),
        )
        .unwrap();

        assert_eq!(xs(&group), vec![5.0, 16.0]);
    }

    #[test]
    fn test_fixed_width_spans_size() {
        let group = LayoutGroup::fixed_width_line_of_parts(
            100.0,
            [
                PartEntry::labeled("A", block(10.0, 5.0)),
                PartEntry::labeled("B", block(8.0, 5.0)),
                PartEntry::labeled("C", block(12.0, 5.0)),
            ],
            &FixedWidthOptions::horizontal(),
        )
        .unwrap();

        assert_eq!(group.elements().len(), 3);
        assert!(group.elements().iter().all(|node| !node.is_spacer()));

        let left = group.leftmost_point_in_footprint(true);
        let right = group.rightmost_point_in_footprint(true);
        assert_approx_eq!(f64, right - left, 100.0, epsilon = 1e-9);
        assert_approx_eq!(f64, left, -50.0, epsilon = 1e-9);
        assert_approx_eq!(f64, group.footprints().outside().width(), 100.0, epsilon = 1e-9);

        // margin = (100 - 30) / 4
        let elements = group.get_elements();
        assert_eq!(elements.len(), 3);
        assert_approx_eq!(f64, elements[0].leftmost_point_in_footprint(true), -50.0 + 17.5);
        assert_eq!(group.label(), "Fixed width line");
    }

    /// Inside 10×4 raised 5 mm above the nominal position, outside 6×2.
    fn raised_jack() -> Rc<dyn Part> {
        Rc::new(
            PartFootprint::new(Size::new(10.0, 4.0), Size::new(6.0, 2.0))
                .with_inside_offset(Point::new(0.0, 5.0)),
        )
    }

    #[test]
    fn test_fixed_width_side_margins_keep_cross_axis_tight() {
        let fixed = LayoutGroup::fixed_width_line_of_parts(
            40.0,
            [PartEntry::labeled("Jack", raised_jack())],
            &FixedWidthOptions::horizontal(),
        )
        .unwrap();
        let line = LayoutGroup::line_of_parts(
            [PartEntry::labeled("Jack", raised_jack())],
            &LineOptions::horizontal(),
        )
        .unwrap();

        let footprints = fixed.footprints();
        assert_eq!(footprints.outside(), Size::new(40.0, 2.0));
        assert_eq!(footprints.inside(), Size::new(40.0, 4.0));
        assert_approx_eq!(
            f64,
            footprints.outside().height(),
            line.footprints().outside().height()
        );
        assert_approx_eq!(
            f64,
            fixed.bottommost_point_in_footprint(false),
            line.bottommost_point_in_footprint(false)
        );
        assert_approx_eq!(
            f64,
            fixed.topmost_point_in_footprint(false),
            line.topmost_point_in_footprint(false)
        );
    }

    #[test]
    fn test_fixed_width_rows_stack_by_their_parts() {
        let row = |name: &str| {
            LayoutGroup::fixed_width_line_of_parts(
                40.0,
                [
                    PartEntry::labeled(format!("{name} L"), raised_jack()),
                    PartEntry::labeled(format!("{name} R"), raised_jack()),
                ],
                &FixedWidthOptions::horizontal(),
            )
            .unwrap()
        };

        let column = LayoutGroup::line_of_elements(
            [row("Low"), row("High")],
            &LineOptions::vertical().with_margin(5.0),
        )
        .unwrap();

        let rows = column.elements();
        let gap = rows[1].footprints().edge(FootprintKind::Total, Side::Bottom)
            - rows[0].footprints().edge(FootprintKind::Total, Side::Top);
        assert_approx_eq!(f64, gap, 5.0, epsilon = 1e-9);

        // Rows are one total height (4) plus the margin apart.
        let elements = column.get_elements();
        assert_eq!(elements.len(), 4);
        assert_approx_eq!(
            f64,
            elements[2].position().y() - elements[0].position().y(),
            9.0,
            epsilon = 1e-9
        );
        assert_approx_eq!(f64, column.footprints().total().height(), 13.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_width_without_side_margins() {
        let group = LayoutGroup::fixed_width_line_of_parts(
            50.0,
            [PartEntry::labeled("A", block(10.0, 5.0)), PartEntry::labeled("B", block(10.0, 5.0))],
            &FixedWidthOptions::horizontal().with_add_margin_on_sides(false),
        )
        .unwrap();

        assert_eq!(group.elements().len(), 2);
        assert_eq!(xs(&group), vec![-20.0, 20.0]);
    }

    #[test]
    fn test_fixed_width_single_element_without_sides() {
        let group = LayoutGroup::fixed_width_line_of_parts(
            50.0,
            [PartEntry::labeled("A", block(10.0, 5.0))],
            &FixedWidthOptions::horizontal().with_add_margin_on_sides(false),
        )
        .unwrap();

        assert_eq!(xs(&group), vec![0.0]);
    }

    #[test]
    fn test_fixed_width_uncentred_starts_at_zero() {
        let group = LayoutGroup::fixed_width_line_of_parts(
            40.0,
            [PartEntry::labeled("A", block(10.0, 5.0)), PartEntry::labeled("B", block(10.0, 5.0))],
            &FixedWidthOptions::horizontal().with_center_at_origin(false),
        )
        .unwrap();

        // margin = (40 - 20) / 3
        let margin = 20.0 / 3.0;
        let positions = xs(&group);
        assert_approx_eq!(f64, positions[0], margin + 5.0, epsilon = 1e-9);
        assert_approx_eq!(f64, positions[1], 2.0 * margin + 15.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fixed_width_negative_margin_overlaps() {
        let group = LayoutGroup::fixed_width_line_of_parts(
            10.0,
            [PartEntry::labeled("A", block(10.0, 5.0)), PartEntry::labeled("B", block(10.0, 5.0))],
            &FixedWidthOptions::horizontal().with_add_margin_on_sides(false),
        )
        .unwrap();

        let elements = group.get_elements();
        assert!(elements[1].leftmost_point_in_footprint(true) < elements[0].rightmost_point_in_footprint(true));
    }

    #[test]
    fn test_grid_of_part() {
        let grid = LayoutGroup::grid_of_part("Knob", block(10.0, 10.0), 2, 3, 4.0, 2.0).unwrap();

        let elements = grid.get_elements();
        let labels: Vec<&str> = elements.iter().map(|e| e.label()).collect();
        assert_eq!(
            labels,
            vec!["Knob 1-1", "Knob 1-2", "Knob 1-3", "Knob 2-1", "Knob 2-2", "Knob 2-3"]
        );

        assert_approx_eq!(f64, elements[0].position().x(), -12.0);
        assert_approx_eq!(f64, elements[1].position().x(), 0.0);
        assert_approx_eq!(f64, elements[2].position().x(), 12.0);

        assert_approx_eq!(f64, elements[0].position().y(), -7.0);
        assert_approx_eq!(f64, elements[3].position().y(), 7.0);
        assert!(elements[3].position().y() > elements[0].position().y());

        assert_eq!(grid.label(), "Knob");
        let rows: Vec<&str> = grid.elements().iter().map(|n| n.label()).collect();
        assert_eq!(rows, vec!["Knob row 1", "Knob row 2"]);
        assert_eq!(grid.footprints().total(), Size::new(34.0, 24.0));
    }

    #[test]
    fn test_grid_with_zero_rows_fails() {
        let err = LayoutGroup::grid_of_part("Knob", block(10.0, 10.0), 0, 3, 4.0, 2.0).unwrap_err();
        assert!(matches!(err, LayoutError::EmptyInput(_)));
        let err = LayoutGroup::grid_of_part("Knob", block(10.0, 10.0), 2, 0, 4.0, 2.0).unwrap_err();
        assert!(matches!(err, LayoutError::EmptyInput(_)));
    }

    #[test]
    fn test_spacers_are_excluded() {
        let group = LayoutGroup::line_of_elements(
            [
                LayoutElement::from_part("A", block(5.0, 5.0)),
                LayoutElement::spacer_y(10.0),
                LayoutElement::from_part("B", block(5.0, 5.0)),
            ],
            &LineOptions::vertical(),
        )
        .unwrap();

        let labels: Vec<&str> = group.get_elements().iter().map(|e| e.label()).collect();
        assert_eq!(labels, vec!["A", "B"]);
        assert_eq!(group.elements().len(), 3);
        assert_approx_eq!(f64, group.footprints().inside().height(), 30.0);
    }

    #[test]
    fn test_nested_group_translate_and_move_to() {
        let inner = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", block(10.0, 5.0)), PartEntry::labeled("B", block(10.0, 5.0))],
            &LineOptions::horizontal().with_margin(0.0),
        )
        .unwrap();
        let mut outer = LayoutGroup::line_of_elements(
            [LayoutNode::from(inner), LayoutElement::from_part("C", block(4.0, 4.0)).into()],
            &LineOptions::vertical().with_margin(0.0),
        )
        .unwrap();

        let before: Vec<Point> = outer.get_elements().iter().map(|e| e.position()).collect();
        outer.translate(Point::new(3.0, -2.0));
        let after: Vec<Point> = outer.get_elements().iter().map(|e| e.position()).collect();
        for (b, a) in before.iter().zip(&after) {
            assert_approx_eq!(f64, a.x() - b.x(), 3.0);
            assert_approx_eq!(f64, a.y() - b.y(), -2.0);
        }
        assert_eq!(outer.position(), Point::new(3.0, -2.0));

        outer.move_to(Point::new(10.0, 10.0));
        assert_eq!(outer.position(), Point::new(10.0, 10.0));
        let moved: Vec<Point> = outer.get_elements().iter().map(|e| e.position()).collect();
        for (b, m) in before.iter().zip(&moved) {
            assert_approx_eq!(f64, m.x() - b.x(), 10.0);
            assert_approx_eq!(f64, m.y() - b.y(), 10.0);
        }
    }

    #[test]
    fn test_group_align_center_to_origin() {
        let mut group = LayoutGroup::line_of_parts(
            [PartEntry::labeled("A", block(10.0, 5.0))],
            &LineOptions::horizontal(),
        )
        .unwrap();
        group.translate(Point::new(7.0, 3.0));
        group.align_center_to_origin(FootprintKind::Outside);

        let bounds = group.footprints().bounds(FootprintKind::Outside);
        assert_approx_eq!(f64, bounds.center().x(), 0.0);
        assert_approx_eq!(f64, bounds.center().y(), 0.0);
        assert_approx_eq!(f64, group.get_elements()[0].position().x(), 0.0);
    }

    #[test]
    fn test_extreme_sentinels_on_empty_input() {
        let empty: Vec<LayoutElement> = Vec::new();
        assert_eq!(
            LayoutGroup::leftmost_point_in_footprints_of_elements(&empty, true),
            f64::INFINITY
        );
        assert_eq!(
            LayoutGroup::topmost_point_in_footprints_of_elements(&empty, false),
            f64::NEG_INFINITY
        );
    }
}
