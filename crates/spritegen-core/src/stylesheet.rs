use crate::model::Layout;

/// Turns a file name into a CSS class fragment: `.`, `_` and whitespace all
/// become dashes (`icon_home.png` -> `icon-home-png`).
pub fn class_fragment(file_name: &str) -> String {
    file_name
        .chars()
        .map(|c| {
            if c == '.' || c == '_' || c.is_whitespace() {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Renders one rule block per placement, in packing order. `namespace` is
/// prepended verbatim to every class name; `sprite_file` is the sheet file
/// the rules point at, assumed to sit next to the stylesheet.
pub fn render_stylesheet(layout: &Layout, namespace: &str, sprite_file: &str) -> String {
    let mut css = String::new();
    for placed in &layout.placements {
        css.push_str(&format!(
            ".{}{} {{\n",
            namespace,
            class_fragment(&placed.key)
        ));
        css.push_str(&format!("  background-image: url(\"{}\");\n", sprite_file));
        css.push_str("  background-repeat: no-repeat;\n");
        css.push_str(&format!(
            "  background-position: -{}px -{}px;\n",
            placed.left, placed.top
        ));
        css.push_str(&format!("  width: {}px;\n", placed.width));
        css.push_str(&format!("  height: {}px;\n", placed.height));
        css.push_str("}\n\n");
    }
    css
}
