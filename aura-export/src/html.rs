//! Document export to self-contained static HTML.
//!
//! [`export_html`] is a pure function from an ordered component list to a
//! complete HTML document: same input, byte-identical output. Components are
//! rendered in list order, which is paint order. All user-supplied content
//! and attribute values are escaped; the exported artifact embeds no external
//! stylesheet or script references.

use std::fmt::Write;

use aura_core::{Component, ComponentType, PreviewMode};

use crate::error::{ExportError, ExportResult};

/// Layout presentation of the exported document.
///
/// The variant is an explicit parameter: each one emits its viewport
/// directive directly, so no consumer needs to patch the output textually.
/// The directive literals are part of the output contract; changing them is
/// a breaking change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportVariant {
    /// Device-width layout, the canonical form for saving and copying.
    Desktop,
    /// Fixed 350px layout for phone-sized previews.
    Mobile,
}

impl ExportVariant {
    /// The viewport meta directive content for this variant.
    #[must_use]
    pub fn viewport_content(self) -> &'static str {
        match self {
            Self::Desktop => "width=device-width, initial-scale=1.0",
            Self::Mobile => "width=350, initial-scale=1.0, maximum-scale=1.0, user-scalable=no",
        }
    }
}

impl From<PreviewMode> for ExportVariant {
    fn from(mode: PreviewMode) -> Self {
        match mode {
            PreviewMode::Desktop => Self::Desktop,
            PreviewMode::Mobile => Self::Mobile,
        }
    }
}

/// Shared style block: container layout, component base class, and the
/// 768px responsive breakpoint. Component-specific styling is inlined per
/// element, so this is the only stylesheet the document carries.
const STYLE_BLOCK: &str = "    * { box-sizing: border-box; }
    html { margin: 0; padding: 0; width: 100%; }
    body { margin: 0; padding: 0; overflow-x: hidden; width: 100%; font-family: system-ui, -apple-system, \"Segoe UI\", Roboto, sans-serif; line-height: 1.5; text-align: left; }
    .aura-container { position: relative; width: 100%; min-height: 100vh; padding: 10px; margin: 0 auto; max-width: 1200px; }
    .aura-component { position: absolute; transition: transform 0.2s ease; }
    .aura-component:hover { transform: scale(1.005); }
    @media (max-width: 768px) {
      .aura-component { position: absolute; transform: none !important; }
    }
    @media (max-width: 768px) {
      body { width: 350px; margin: 0 auto; }
      .aura-container { padding: 5px; position: relative; width: 100%; margin: 0; }
      .aura-component { max-width: 340px; left: auto !important; right: auto !important; }
    }
";

/// Export an ordered component list as a self-contained HTML document.
///
/// A component whose required properties are missing or mistyped renders as
/// a clearly marked placeholder; the failure is logged and the remaining
/// components still serialize.
#[must_use]
pub fn export_html(components: &[Component], variant: ExportVariant) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    let _ = writeln!(
        html,
        "  <meta name=\"viewport\" content=\"{}\">",
        variant.viewport_content()
    );
    html.push_str("  <title>Exported from Aura</title>\n");
    html.push_str("  <style>\n");
    html.push_str(STYLE_BLOCK);
    html.push_str("  </style>\n");
    html.push_str("</head>\n<body>\n");
    html.push_str("  <div class=\"aura-container\">\n");

    for component in components {
        match component_markup(component) {
            Ok(markup) => html.push_str(&markup),
            Err(e) => {
                tracing::warn!("Skipping unrenderable component: {e}");
                render_placeholder(&mut html, component);
            }
        }
    }

    html.push_str("  </div>\n");
    html.push_str("</body>\n</html>");
    html
}

/// Inline style prefix shared by every component: absolute positioning at
/// the component's canvas coordinates.
fn base_style(component: &Component) -> String {
    format!(
        "position: absolute; left: {}px; top: {}px; box-sizing: border-box; text-align: left; ",
        component.position.x, component.position.y
    )
}

/// Render one component to its markup line.
fn component_markup(component: &Component) -> ExportResult<String> {
    match component.kind() {
        ComponentType::Text => render_text(component),
        ComponentType::TextArea => render_textarea(component),
        ComponentType::Image => render_image(component),
        ComponentType::Button => render_button(component),
    }
}

fn render_text(component: &Component) -> ExportResult<String> {
    let font_size = number(component, "fontSize")?;
    let font_weight = text(component, "fontWeight")?;
    let color = text(component, "color")?;
    let content = text(component, "content")?;

    let mut style = base_style(component);
    let _ = write!(
        style,
        "font-size: {font_size}px; font-weight: {}; color: {};",
        escape_html(font_weight),
        escape_html(color),
    );
    Ok(format!(
        "    <div id=\"{}\" class=\"aura-component\" style=\"{style}\">{}</div>\n",
        component.id(),
        escape_html(content),
    ))
}

fn render_textarea(component: &Component) -> ExportResult<String> {
    let font_size = number(component, "fontSize")?;
    let color = text(component, "color")?;
    let text_align = text(component, "textAlign")?;
    let content = text(component, "content")?;

    let mut style = base_style(component);
    // pre-wrap keeps user newlines while still wrapping on whitespace.
    let _ = write!(
        style,
        "font-size: {font_size}px; color: {}; text-align: {}; white-space: pre-wrap;",
        escape_html(color),
        escape_html(text_align),
    );
    Ok(format!(
        "    <div id=\"{}\" class=\"aura-component\" style=\"{style}\">{}</div>\n",
        component.id(),
        escape_html(content),
    ))
}

fn render_image(component: &Component) -> ExportResult<String> {
    let height = number(component, "height")?;
    let width = number(component, "width")?;
    let border_radius = number(component, "borderRadius")?;
    let object_fit = text(component, "objectFit")?;
    let image_url = text(component, "imageUrl")?;
    let alt_text = text(component, "altText")?;

    let mut style = base_style(component);
    let _ = write!(
        style,
        "height: {height}px; width: {width}px; border-radius: {border_radius}px; object-fit: {};",
        escape_html(object_fit),
    );
    Ok(format!(
        "    <img id=\"{}\" class=\"aura-component\" src=\"{}\" alt=\"{}\" style=\"{style}\" />\n",
        component.id(),
        escape_html(image_url),
        escape_html(alt_text),
    ))
}

fn render_button(component: &Component) -> ExportResult<String> {
    let font_size = number(component, "fontSize")?;
    let padding = number(component, "padding")?;
    let border_radius = number(component, "borderRadius")?;
    let background_color = text(component, "backgroundColor")?;
    let text_color = text(component, "textColor")?;
    let url = text(component, "url")?;
    let button_text = text(component, "buttonText")?;

    let mut style = base_style(component);
    let _ = write!(
        style,
        "font-size: {font_size}px; padding: {padding}px; background-color: {}; color: {}; \
         border-radius: {border_radius}px; text-decoration: none; display: inline-block; \
         border: none; cursor: pointer; box-shadow: 0 2px 5px rgba(0,0,0,0.15); \
         transition: all 0.2s ease;",
        escape_html(background_color),
        escape_html(text_color),
    );
    // Hover state is inlined as handlers: the exported document carries no
    // stylesheet beyond the shared block above.
    Ok(format!(
        "    <a id=\"{}\" class=\"aura-component\" href=\"{}\" style=\"{style}\" \
         onmouseover=\"this.style.transform='scale(1.05)';this.style.boxShadow='0 4px 8px rgba(0,0,0,0.2)';\" \
         onmouseout=\"this.style.transform='scale(1)';this.style.boxShadow='0 2px 5px rgba(0,0,0,0.15)';\">{}</a>\n",
        component.id(),
        escape_html(url),
        escape_html(button_text),
    ))
}

/// Emit a clearly marked stand-in so one bad record cannot corrupt the
/// whole document.
fn render_placeholder(html: &mut String, component: &Component) {
    let _ = writeln!(
        html,
        "    <div id=\"{}\" class=\"aura-component aura-placeholder\" style=\"{}\">Unknown component type</div>",
        component.id(),
        base_style(component),
    );
}

fn number(component: &Component, name: &str) -> ExportResult<f64> {
    let value = component
        .properties
        .get(name)
        .ok_or_else(|| ExportError::MissingProperty {
            component: component.id().to_string(),
            name: name.to_string(),
        })?;
    value.as_number().ok_or_else(|| ExportError::InvalidProperty {
        component: component.id().to_string(),
        name: name.to_string(),
    })
}

fn text<'a>(component: &'a Component, name: &str) -> ExportResult<&'a str> {
    let value = component
        .properties
        .get(name)
        .ok_or_else(|| ExportError::MissingProperty {
            component: component.id().to_string(),
            name: name.to_string(),
        })?;
    value.as_text().ok_or_else(|| ExportError::InvalidProperty {
        component: component.id().to_string(),
        name: name.to_string(),
    })
}

/// Escape text for safe inclusion in markup content and attribute values.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
