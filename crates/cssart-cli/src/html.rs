//! Standalone HTML page for a mounted composition.
//!
//! The page stacks one absolutely positioned `<div>` per layer inside a
//! fixed-size black viewport, with the layer's declarations and opacity as
//! inline styles and the `@keyframes` of every animation in use.

use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::path::Path;

use cssart_spec::RenderTarget;

/// Render a complete HTML document.
pub fn render_page(target: &RenderTarget, width: u32, height: u32) -> String {
    let mut presets = BTreeSet::new();
    for layer in target.composition().iter() {
        if let Some(preset) = layer.animation {
            presets.insert(preset.name());
        }
    }

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n<title>CSS Art</title>\n<style>\n");
    html.push_str("body { margin: 0; background: #000; }\n");
    let _ = writeln!(
        html,
        ".canvas {{ position: relative; width: {}px; height: {}px; overflow: hidden; background: #000; }}",
        width, height
    );
    html.push_str(".layer { position: absolute; inset: 0; }\n");
    for preset in cssart_spec::AnimationPreset::ALL {
        if presets.contains(preset.name()) {
            html.push_str(preset.keyframes_css());
            html.push('\n');
        }
    }
    html.push_str("</style>\n</head>\n<body>\n<div class=\"canvas\">\n");

    for (layer, opacity) in target.layers() {
        let style = layer.css().inline_style(Some(opacity));
        let _ = writeln!(
            html,
            "  <div class=\"layer\" style=\"{}\"></div>",
            escape_attribute(&style)
        );
    }

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}

/// Write the page to `path`.
pub fn write_page(target: &RenderTarget, width: u32, height: u32, path: &Path) -> std::io::Result<()> {
    std::fs::write(path, render_page(target, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cssart_compose::{generate, ConstantSource, DeterministicRng};

    #[test]
    fn test_one_div_per_layer() {
        let composition = generate(&mut DeterministicRng::new(3));
        let count = composition.len();
        let target = RenderTarget::opaque(composition);
        let html = render_page(&target, 800, 800);

        assert_eq!(html.matches("class=\"layer\"").count(), count);
        assert!(html.contains("width: 800px; height: 800px"));
        assert!(html.contains("opacity: 1;"));
    }

    #[test]
    fn test_keyframes_only_for_used_presets() {
        // every layer animated with glow
        let target = RenderTarget::opaque(generate(&mut ConstantSource::just_below_one()));
        let html = render_page(&target, 100, 100);
        assert!(html.contains("@keyframes glow"));
        assert!(!html.contains("@keyframes spin"));

        // no layer animated
        let target = RenderTarget::opaque(generate(&mut ConstantSource::new(0.0)));
        let html = render_page(&target, 100, 100);
        assert!(!html.contains("@keyframes"));
    }

    #[test]
    fn test_write_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("art.html");
        let target = RenderTarget::opaque(generate(&mut DeterministicRng::new(1)));
        write_page(&target, 800, 800, &path).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("<!DOCTYPE html>"));
    }
}
