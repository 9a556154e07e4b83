//! Stylesheet generation.
//!
//! One rule (CSS) or mixin (SCSS) per piece, in declaration order, each
//! pointing at the piece's offset into the composite image.

use super::{Layout, Placement, SheetStyle, SpritePiece};

/// Render a background offset: `0` at the origin, negative pixels otherwise.
fn offset(value: u32) -> String {
    if value == 0 {
        "0".to_string()
    } else {
        format!("-{}px", value)
    }
}

fn declarations(background: &str, placement: &Placement) -> String {
    format!(
        "  background: {} no-repeat {} {};\n  width: {}px;\n  height: {}px;\n",
        background,
        offset(placement.x),
        offset(placement.y),
        placement.width,
        placement.height
    )
}

/// Turn a selector into something usable as an SCSS identifier.
///
/// `.btn-black` becomes `btn-black`, `a.black > span` becomes `a-black-span`.
pub fn identifier(selector: &str) -> String {
    let mut ident = String::with_capacity(selector.len());
    let mut pending_dash = false;

    for c in selector.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            if pending_dash && !ident.is_empty() {
                ident.push('-');
            }
            pending_dash = false;
            ident.push(c);
        } else {
            pending_dash = true;
        }
    }

    ident.trim_matches('-').to_string()
}

pub fn render_css(pieces: &[SpritePiece], layout: &Layout, style: &SheetStyle) -> String {
    let background = format!("url({})", style.url);
    let mut out = String::new();

    for (piece, placement) in pieces.iter().zip(&layout.placements) {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&format!("{}{} {{\n", style.css_prefix, piece.css_class));
        out.push_str(&declarations(&background, placement));
        out.push_str("}\n");
    }

    out
}

pub fn render_scss(pieces: &[SpritePiece], layout: &Layout, style: &SheetStyle) -> String {
    let sheet = identifier(&style.name);
    let variable = format!("${}-sprite-url", sheet);
    let mut out = format!("{}: url({});\n", variable, style.url);

    for (piece, placement) in pieces.iter().zip(&layout.placements) {
        let class = identifier(&format!("{}{}", style.css_prefix, piece.css_class));
        out.push_str(&format!("\n@mixin {}-{} {{\n", sheet, class));
        out.push_str(&declarations(&variable, placement));
        out.push_str("}\n");
    }

    out
}
