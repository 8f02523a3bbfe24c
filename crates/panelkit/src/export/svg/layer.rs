//! Z-ordered layers of the panel debug view.

use svg::node::element as svg_element;

/// Boxed SVG node.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    Background,
    /// Panel outline.
    Panel,
    /// Inside footprints, drawn under the outside ones.
    Inside,
    Outside,
    /// Nominal part positions.
    Marker,
    Label,
}

impl RenderLayer {
    pub fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Panel => "panel",
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Marker => "marker",
            Self::Label => "label",
        }
    }
}

/// SVG nodes collected per layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_to_layer(&mut self, layer: RenderLayer, node: impl Into<SvgNode>) {
        self.items.push((layer, node.into()));
    }

    /// One `<g data-layer="...">` per non-empty layer, bottom first.
    ///
    /// Nodes keep their insertion order within a layer.
    pub fn render(mut self) -> Vec<SvgNode> {
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut groups: Vec<(RenderLayer, svg_element::Group)> = Vec::new();
        for (layer, node) in self.items {
            match groups.last_mut() {
                Some((current, group)) if *current == layer => {
                    let taken = std::mem::replace(group, svg_element::Group::new());
                    *group = taken.add(node);
                }
                _ => {
                    let group = svg_element::Group::new()
                        .set("data-layer", layer.name())
                        .add(node);
                    groups.push((layer, group));
                }
            }
        }

        groups
            .into_iter()
            .map(|(_, group)| Box::new(group) as SvgNode)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Circle, Rectangle};

    use super::*;

    #[test]
    fn test_empty_output_renders_nothing() {
        assert!(LayeredOutput::new().render().is_empty());
    }

    #[test]
    fn test_layers_render_bottom_first() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Label, Rectangle::new());
        output.add_to_layer(RenderLayer::Inside, Rectangle::new());
        output.add_to_layer(RenderLayer::Inside, Circle::new());
        output.add_to_layer(RenderLayer::Panel, Rectangle::new());

        let nodes = output.render();
        assert_eq!(nodes.len(), 3);

        let rendered: Vec<String> = nodes.iter().map(|node| node.to_string()).collect();
        assert!(rendered[0].contains("data-layer=\"panel\""));
        assert!(rendered[1].contains("data-layer=\"inside\""));
        assert!(rendered[1].contains("<circle"));
        assert!(rendered[2].contains("data-layer=\"label\""));
    }
}
