//! OData Atom feed decoding
//!
//! The upstream answers `Accept: application/xml` with an Atom feed where
//! each record sits in an `m:properties` element:
//!
//! ```xml
//! <feed>
//!   <entry>
//!     <content type="application/xml">
//!       <m:properties>
//!         <d:Code>USA</d:Code>
//!         <d:Title>United States of America</d:Title>
//!       </m:properties>
//!     </content>
//!   </entry>
//! </feed>
//! ```
//!
//! [`parse_feed`] turns that into the `{ "value": [...] }` shape of a JSON
//! body, keyed by local element names. Values stay strings; the normalizer
//! parses numbers where it expects them.

use gho_domain::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value, json};

use crate::constants::XML_PROPERTIES_ELEMENT;

type XmlReader<'a> = Reader<&'a [u8]>;

fn xml_error(e: quick_xml::Error) -> Error {
    Error::upstream_with_source(format!("Malformed XML response body: {e}"), e)
}

fn malformed(reason: &str) -> Error {
    Error::upstream(format!("Malformed XML response body: {reason}"))
}

fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

/// Resolve a predefined or numeric entity reference (`amp`, `#39`, `#x27`)
fn resolve_reference(name: &str) -> String {
    if let Some(code) = name.strip_prefix('#') {
        let parsed = match code.strip_prefix('x') {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => code.parse().ok(),
        };
        if let Some(c) = parsed.and_then(char::from_u32) {
            return c.to_string();
        }
    }
    match name {
        "amp" => "&".to_string(),
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "quot" => "\"".to_string(),
        "apos" => "'".to_string(),
        _ => format!("&{name};"),
    }
}

/// Insert a child, turning repeated names into arrays
fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}

/// Read up to the end tag of the element whose start was just consumed
///
/// Text-only elements become strings (trimmed), empty ones `null`, and
/// elements with children objects. Reaching the end of the document first
/// is an error, so a truncated body never yields a partial record.
fn read_element(reader: &mut XmlReader<'_>) -> Result<Value> {
    let mut children = Map::new();
    let mut text = String::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                let name = local_name(&e);
                let child = read_element(reader)?;
                insert_child(&mut children, name, child);
            }
            Event::Empty(e) => insert_child(&mut children, local_name(&e), Value::Null),
            Event::Text(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e)),
            Event::GeneralRef(e) => text.push_str(&resolve_reference(&String::from_utf8_lossy(&e))),
            Event::End(_) => break,
            Event::Eof => return Err(malformed("unexpected end of document")),
            _ => {}
        }
    }

    if !children.is_empty() {
        return Ok(Value::Object(children));
    }
    let text = text.trim();
    Ok(if text.is_empty() {
        Value::Null
    } else {
        Value::String(text.to_string())
    })
}

/// Decode an OData Atom feed into `{ "value": [records] }`
///
/// Documents without any `properties` element fall back to
/// [`xml_to_json`], so error documents and service documents still decode.
/// Truncated documents and bodies without a root element are upstream
/// failures.
pub fn parse_feed(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    let mut records = Vec::new();
    let mut found = false;
    let mut depth = 0usize;

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) if e.local_name().as_ref() == XML_PROPERTIES_ELEMENT => {
                found = true;
                let record = match read_element(&mut reader)? {
                    Value::Object(fields) => fields,
                    _ => Map::new(),
                };
                records.push(Value::Object(record));
            }
            Event::Empty(e) if e.local_name().as_ref() == XML_PROPERTIES_ELEMENT => {
                found = true;
                records.push(Value::Object(Map::new()));
            }
            Event::Start(_) => depth += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(malformed("unexpected end of document"));
    }

    if found {
        Ok(json!({ "value": records }))
    } else {
        xml_to_json(xml)
    }
}

/// Decode arbitrary XML into a nested JSON object keyed by local names
///
/// Fails when the input holds no element at all.
pub fn xml_to_json(xml: &str) -> Result<Value> {
    let mut reader = Reader::from_str(xml);
    let mut root = Map::new();

    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) => {
                let name = local_name(&e);
                let child = read_element(&mut reader)?;
                insert_child(&mut root, name, child);
            }
            Event::Empty(e) => insert_child(&mut root, local_name(&e), Value::Null),
            Event::Eof => break,
            _ => {}
        }
    }

    if root.is_empty() {
        return Err(malformed("no root element"));
    }
    Ok(Value::Object(root))
}
