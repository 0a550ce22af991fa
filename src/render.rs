//! Canvas model for the template editor.
//!
//! Turns a structure plus its mapping table into zoomed, absolutely placed
//! boxes with the text each one should display. In edit mode bound
//! elements show `{variable}`; in preview mode they show resolved data.

use serde::{Deserialize, Serialize};

use crate::design::{DesignStructure, Element, ElementKind, ElementStyle};
use crate::invoice::{sample_invoice, InvoiceData, Resolver};
use crate::mapping::MappingTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    #[default]
    Edit,
    Preview,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub zoom: f64,
    pub mode: RenderMode,
    pub resolver: Resolver,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            mode: RenderMode::Edit,
            resolver: Resolver::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub mode: RenderMode,
    pub elements: Vec<RenderedElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedElement {
    pub element_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variable: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
}

/// Text shown for one element.
///
/// Unbound elements keep their design content. `data` is only consulted
/// in preview mode.
pub fn display_text(
    element: &Element,
    variable: Option<&str>,
    mode: RenderMode,
    data: &InvoiceData,
    resolver: &Resolver,
) -> String {
    match (variable, mode) {
        (Some(variable), RenderMode::Preview) => resolver.resolve(data, variable),
        (Some(variable), RenderMode::Edit) => format!("{{{variable}}}"),
        (None, _) => element.content.clone().unwrap_or_default(),
    }
}

/// Lay out the renderable elements of `structure`.
///
/// Preview mode falls back to the sample invoice when `data` is `None`.
pub fn render_canvas(
    structure: &DesignStructure,
    mappings: &MappingTable,
    data: Option<&InvoiceData>,
    options: &RenderOptions,
) -> Canvas {
    let data = data.unwrap_or_else(|| sample_invoice());
    let positions = structure.absolute_positions();
    let zoom = options.zoom;

    let elements = structure
        .elements
        .iter()
        .filter(|el| el.kind.is_renderable())
        .map(|el| {
            let (abs_x, abs_y) = positions.get(&el.id).copied().unwrap_or((el.x, el.y));
            let variable = mappings.get(&el.id);
            let text = el.is_text().then(|| {
                display_text(el, variable, options.mode, data, &options.resolver)
            });
            RenderedElement {
                element_id: el.id.clone(),
                name: el.name.clone(),
                kind: el.kind,
                left: abs_x * zoom,
                top: abs_y * zoom,
                width: el.width * zoom,
                height: el.height * zoom,
                text,
                variable: variable.map(str::to_string),
                style: el.style.as_ref().map(|s| canvas_style(s, el.is_text(), zoom)),
            }
        })
        .collect();

    Canvas {
        width: structure.width * zoom,
        height: structure.height * zoom,
        mode: options.mode,
        elements,
    }
}

fn canvas_style(style: &ElementStyle, is_text: bool, zoom: f64) -> ElementStyle {
    ElementStyle {
        font_family: style.font_family.clone(),
        font_size: style.font_size.map(|size| size * zoom as f32),
        font_weight: style.font_weight,
        color: style.color.clone().filter(|_| is_text),
        background_color: style.background_color.clone().filter(|_| !is_text),
        opacity: style.opacity,
    }
}
