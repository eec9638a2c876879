use anyhow::anyhow;
use web_sys as web;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Create an SVG element with `attrs` and append it to `parent`.
pub fn svg_el(
    doc: &web::Document,
    parent: &web::Element,
    tag: &str,
    attrs: &[(&str, &str)],
) -> anyhow::Result<web::Element> {
    let el = doc
        .create_element_ns(Some(SVG_NS), tag)
        .map_err(|e| anyhow!("create <{tag}> failed: {:?}", e))?;
    for (k, v) in attrs {
        _ = el.set_attribute(k, v);
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow!("append <{tag}> failed: {:?}", e))?;
    Ok(el)
}

pub fn set(el: &web::Element, name: &str, value: impl ToString) {
    _ = el.set_attribute(name, &value.to_string());
}
