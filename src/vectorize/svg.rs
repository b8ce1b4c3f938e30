// SVG path emission
// Coordinates are integer pixel positions, y grows downward

use crate::models::Contour;

/// Path data for a closed contour: `M x0,y0 L x1,y1 ... Z`
pub fn path_data(contour: &Contour) -> String {
    let points: Vec<String> = contour.points.iter().map(|p| p.to_string()).collect();
    format!("M {} Z", points.join(" L "))
}

/// Wrap path data in a filled `<path>` element
pub fn path_element(d: &str, fill: &str) -> String {
    format!(r#"<path d="{}" fill="{}"/>"#, d, fill)
}

/// One element per line, no trailing newline
pub fn join_elements(elements: &[String]) -> String {
    elements.join("\n")
}

/// Wrap path elements in a standalone SVG document sized to the source image
pub fn wrap_document(elements: &[String], width: u32, height: u32) -> String {
    let mut doc = String::new();
    doc.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = width,
        h = height
    ));
    doc.push('\n');

    for element in elements {
        doc.push_str("  ");
        doc.push_str(element);
        doc.push('\n');
    }

    doc.push_str("</svg>");
    doc
}
