use crate::constants::{SVG_FONT_FAMILY, SVG_NAMESPACE};
use skybeam_core::{Node, Scene};
use web_sys as web;

fn create(document: &web::Document, tag: &str) -> anyhow::Result<web::Element> {
    document
        .create_element_ns(Some(SVG_NAMESPACE), tag)
        .map_err(|e| anyhow::anyhow!("createElementNS({}) failed: {:?}", tag, e))
}

fn set(el: &web::Element, name: &str, value: impl ToString) {
    _ = el.set_attribute(name, &value.to_string());
}

fn node_element(document: &web::Document, node: &Node) -> anyhow::Result<web::Element> {
    let el = match node {
        Node::Rect {
            origin,
            size,
            corner_radius,
            fill,
        } => {
            let el = create(document, "rect")?;
            set(&el, "x", origin.x);
            set(&el, "y", origin.y);
            set(&el, "width", size.x);
            set(&el, "height", size.y);
            set(&el, "rx", corner_radius);
            set(&el, "fill", fill);
            el
        }
        Node::Polygon { points, fill } => {
            let el = create(document, "polygon")?;
            let pts = points
                .iter()
                .map(|p| format!("{},{}", p.x, p.y))
                .collect::<Vec<_>>()
                .join(" ");
            set(&el, "points", pts);
            set(&el, "fill", fill);
            el
        }
        Node::Circle {
            center,
            radius,
            fill,
            id,
        } => {
            let el = create(document, "circle")?;
            set(&el, "cx", center.x);
            set(&el, "cy", center.y);
            set(&el, "r", radius);
            set(&el, "fill", fill);
            if let Some(id) = id {
                el.set_id(id);
            }
            el
        }
        Node::Line {
            from,
            to,
            stroke,
            width,
        } => {
            let el = create(document, "line")?;
            set(&el, "x1", from.x);
            set(&el, "y1", from.y);
            set(&el, "x2", to.x);
            set(&el, "y2", to.y);
            set(&el, "stroke", stroke);
            set(&el, "stroke-width", width);
            el
        }
        Node::Text {
            anchor,
            text,
            fill,
            size_px,
            bold,
        } => {
            let el = create(document, "text")?;
            set(&el, "x", anchor.x);
            set(&el, "y", anchor.y);
            set(&el, "fill", fill);
            set(&el, "font-size", size_px);
            set(&el, "font-family", SVG_FONT_FAMILY);
            set(&el, "text-anchor", "middle");
            set(&el, "dominant-baseline", "middle");
            if *bold {
                set(&el, "font-weight", "bold");
            }
            // Labels sit over the arrows; keep them from eating marker drags.
            set(&el, "pointer-events", "none");
            el.set_text_content(Some(text));
            el
        }
    };
    Ok(el)
}

/// Replaces the contents of `svg` with `scene`. Returns the load marker element.
pub fn write_scene(
    document: &web::Document,
    svg: &web::Element,
    scene: &Scene,
) -> anyhow::Result<Option<web::Element>> {
    svg.set_inner_html("");
    set(svg, "viewBox", format!("0 0 {} {}", scene.width, scene.height));
    let mut marker = None;
    for node in &scene.nodes {
        let el = node_element(document, node)?;
        if matches!(node, Node::Circle { id: Some(_), .. }) {
            marker = Some(el.clone());
        }
        svg.append_child(&el)
            .map_err(|e| anyhow::anyhow!("appendChild failed: {:?}", e))?;
    }
    Ok(marker)
}
