//! The seven export emitters.
//!
//! All emitters are deterministic string builders over [`ColorScale`]s.
//! Palette order is preserved everywhere; within a color, steps are always
//! emitted in `SCALE_STEPS` order (light to dark).

use hueforge_palette::extracted::ExtractedColor;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::scale::{build_scales, dedupe_names, ColorScale};

/// The full set of export artifacts for one palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteExports {
    /// `:root { … }` CSS custom properties
    pub css_variables: String,
    /// `$name-50: …;` SCSS variables
    pub scss_variables: String,
    /// `module.exports = { theme: { extend: { colors: … } } }`
    pub tailwind_config: String,
    /// Figma-style design tokens (JSON)
    pub figma_tokens: String,
    /// SwiftUI `Color` extension
    pub swift_extension: String,
    /// Kotlin Compose color object
    pub kotlin_object: String,
    /// JSON palette mirror with the scale attached to each color
    pub json_palette: String,
}

/// Generate all export artifacts for a palette.
///
/// Names are deduplicated first (appending `" 2"`, `" 3"`, …), so the
/// artifacts never collide even for hand-assembled palettes.
#[must_use]
pub fn generate_exports(palette: &[ExtractedColor]) -> PaletteExports {
    let mut palette = palette.to_vec();
    dedupe_names(&mut palette);
    let scales = build_scales(&palette);

    PaletteExports {
        css_variables: emit_css(&scales),
        scss_variables: emit_scss(&scales),
        tailwind_config: emit_tailwind(&scales),
        figma_tokens: emit_figma(&palette),
        swift_extension: emit_swift(&scales),
        kotlin_object: emit_kotlin(&scales),
        json_palette: emit_json(&palette, &scales),
    }
}

fn emit_css(scales: &[ColorScale]) -> String {
    let mut out = String::from(":root {\n");
    for scale in scales {
        for (step, hex) in &scale.steps {
            out.push_str(&format!("  --{}-{}: {};\n", scale.slug, step, hex));
        }
        out.push_str(&format!("  --{0}: var(--{0}-500);\n", scale.slug));
    }
    out.push_str("}\n");
    out
}

fn emit_scss(scales: &[ColorScale]) -> String {
    let mut out = String::new();
    for scale in scales {
        for (step, hex) in &scale.steps {
            out.push_str(&format!("${}-{}: {};\n", scale.slug, step, hex));
        }
        out.push_str(&format!("${0}: ${0}-500;\n", scale.slug));
    }
    out
}

fn emit_tailwind(scales: &[ColorScale]) -> String {
    let mut out = String::from(
        "module.exports = {\n  theme: {\n    extend: {\n      colors: {\n",
    );
    for scale in scales {
        out.push_str(&format!("        '{}': {{\n", scale.slug));
        out.push_str(&format!(
            "          DEFAULT: '{}',\n",
            scale.hex(500).unwrap_or_default()
        ));
        for (step, hex) in &scale.steps {
            out.push_str(&format!("          {step}: '{hex}',\n"));
        }
        out.push_str("        },\n");
    }
    out.push_str("      },\n    },\n  },\n};\n");
    out
}

fn emit_figma(palette: &[ExtractedColor]) -> String {
    let mut tokens = serde_json::Map::new();
    for color in palette {
        tokens.insert(
            color.name.clone(),
            json!({
                "value": color.formats.hex.css,
                "type": "color",
                "description": format!(
                    "{} ({}, {} coverage {:.1}%)",
                    color.name,
                    color.id,
                    color.source.segment.label(),
                    color.source.pixel_coverage * 100.0
                ),
            }),
        );
    }
    // Map ordering is alphabetical (BTree), which keeps the artifact stable
    serde_json::to_string_pretty(&serde_json::Value::Object(tokens))
        .unwrap_or_else(|_| String::from("{}"))
}

fn emit_swift(scales: &[ColorScale]) -> String {
    let mut out = String::from("import SwiftUI\n\nextension Color {\n");
    for scale in scales {
        let [r, g, b] = scale.base.to_srgb8();
        out.push_str(&format!(
            "    static let {} = Color(red: {:.3}, green: {:.3}, blue: {:.3})\n",
            scale.ident,
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        ));
    }
    out.push_str("}\n");
    out
}

fn emit_kotlin(scales: &[ColorScale]) -> String {
    let mut out = String::from(
        "import androidx.compose.ui.graphics.Color\n\nobject PaletteColors {\n",
    );
    for scale in scales {
        let [r, g, b] = scale.base.to_srgb8();
        out.push_str(&format!(
            "    val {} = Color(0xFF{r:02X}{g:02X}{b:02X})\n",
            scale.ident
        ));
    }
    out.push_str("}\n");
    out
}

fn emit_json(palette: &[ExtractedColor], scales: &[ColorScale]) -> String {
    let colors: Vec<serde_json::Value> = palette
        .iter()
        .zip(scales.iter())
        .map(|(color, scale)| {
            let mut value = serde_json::to_value(color).unwrap_or_else(|_| json!({}));
            let steps: Vec<serde_json::Value> = scale
                .steps
                .iter()
                .map(|(step, hex)| json!({ "step": step, "hex": hex }))
                .collect();
            value["scale"] = json!(steps);
            value
        })
        .collect();

    serde_json::to_string_pretty(&json!({ "palette": colors }))
        .unwrap_or_else(|_| String::from("{}"))
}
