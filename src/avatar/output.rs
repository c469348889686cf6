//! Output Helpers Module
//!
//! Ready-to-embed forms of a rendered avatar: raw SVG, data URL and HTML
//! fragments.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::avatar::content::{escape_xml, num};
use crate::avatar::request::{AvatarRequest, Shape};
use crate::avatar::svg::{build_svg, ROUNDED_CORNER_RATIO};
use crate::error::{AvatarError, Result};

/// Characters left as-is by `encodeURIComponent`, minus the single quote
/// so the URL is safe inside either quote style.
const DATA_URL_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'(')
    .remove(b')');

const DATA_URL_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

// == Render Mode ==
/// How [`html_string`] wraps the avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Inline SVG markup
    Svg,
    /// `<img>` tag pointing at a data URL
    Img,
    /// Element built by an [`ElementHost`]
    Element,
}

impl RenderMode {
    /// `"svg"` and `"img"` are recognised, anything else means `Element`.
    pub fn parse(value: &str) -> Self {
        match value {
            "svg" => RenderMode::Svg,
            "img" => RenderMode::Img,
            _ => RenderMode::Element,
        }
    }
}

// == Element Host ==
/// Capability to wrap an avatar in a host UI element.
///
/// Only environments that can build elements implement this; the string
/// outputs never need it.
pub trait ElementHost {
    /// Returns the serialized element wrapping `svg`.
    fn create_element(&self, request: &AvatarRequest, svg: &str) -> Result<String>;
}

/// Host that serializes the wrapper `<div>` directly as markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupElementHost;

impl ElementHost for MarkupElementHost {
    fn create_element(&self, request: &AvatarRequest, svg: &str) -> Result<String> {
        Ok(format!(
            r#"<div class="sa-avatar sa-{}" style="width: {size}px; height: {size}px;" title="{}">{}</div>"#,
            request.shape.as_str(),
            escape_xml(&request.name),
            svg,
            size = request.size
        ))
    }
}

// == String Outputs ==
/// Raw SVG markup for the request.
pub fn svg_string(request: &AvatarRequest) -> Result<String> {
    build_svg(request)
}

/// `data:` URL embedding the SVG, usable as an image source.
pub fn svg_data_url(request: &AvatarRequest) -> Result<String> {
    let svg = build_svg(request)?;
    Ok(format!(
        "{}{}",
        DATA_URL_PREFIX,
        utf8_percent_encode(&svg, DATA_URL_ESCAPE)
    ))
}

/// CSS border radius matching the shape envelope.
fn border_radius(shape: Shape, size: u32) -> String {
    match shape {
        Shape::Circle => "50%".to_string(),
        Shape::Rounded => format!("{}px", num(f64::from(size) * ROUNDED_CORNER_RATIO)),
        Shape::Square => "0".to_string(),
    }
}

/// HTML fragment for the avatar in the requested mode.
///
/// `RenderMode::Element` needs a host; without one the call fails with
/// [`AvatarError::HostUnavailable`].
pub fn html_string(
    request: &AvatarRequest,
    mode: RenderMode,
    host: Option<&dyn ElementHost>,
) -> Result<String> {
    match mode {
        RenderMode::Svg => svg_string(request),
        RenderMode::Img => {
            let url = svg_data_url(request)?;
            let name = escape_xml(&request.name);
            Ok(format!(
                r#"<img src="{url}" alt="Avatar of {name}" title="{name}" style="width:{size}px;height:{size}px;border-radius:{radius};box-shadow:0 2px 6px rgba(0,0,0,.15);">"#,
                size = request.size,
                radius = border_radius(request.shape, request.size)
            ))
        }
        RenderMode::Element => {
            let host = host.ok_or_else(|| {
                AvatarError::HostUnavailable("no element host in this environment".to_string())
            })?;
            let svg = build_svg(request)?;
            host.create_element(request, &svg)
        }
    }
}
