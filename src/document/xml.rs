use crate::errors::{Error, Result};

use quick_xml::events::{BytesStart, Event as XmlEvent};
use quick_xml::Reader;

/// An element's local name and its (unescaped) attributes, in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct RawElement(pub String, pub Vec<(String, String)>);

impl RawElement {
    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.1
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v.as_str()))
    }
}

/// The structural XML events which matter for conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementEvent {
    Start(RawElement),
    Empty(RawElement),
    End(String),
}

impl TryFrom<BytesStart<'_>> for RawElement {
    type Error = Error;

    /// Failures here are low-level XML errors (e.g. malformed or duplicate
    /// attributes) rather than anything semantic about SVG.
    fn try_from(e: BytesStart) -> Result<Self> {
        // namespace prefixes (e.g. `svg:path`) are ignored
        let name = String::from_utf8(e.local_name().into_inner().to_vec())?;
        let attrs = e
            .attributes()
            .map(|a| {
                let aa = a.map_err(|e| Error::Document(format!("bad attribute in <{name}>: {e}")))?;
                let key = String::from_utf8(aa.key.into_inner().to_vec())?;
                let value = aa
                    .unescape_value()
                    .map_err(|e| Error::Document(format!("bad value for '{key}': {e}")))?
                    .into_owned();
                Ok((key, value))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self(name, attrs))
    }
}

/// Read the complete element structure of an XML document.
///
/// The whole document is read before anything is returned, so structural
/// problems anywhere are reported ahead of any semantic ones.
pub fn read_elements(input: &str) -> Result<Vec<ElementEvent>> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().check_end_names = true;

    let mut events = Vec::new();
    // Stack of names of open tags
    let mut open = Vec::new();
    let mut seen_root = false;

    loop {
        let ev = reader.read_event().map_err(|e| {
            Error::Document(format!(
                "XML error near offset {}: {e}",
                reader.error_position()
            ))
        })?;
        match ev {
            XmlEvent::Start(bs) => {
                let el: RawElement = bs.try_into()?;
                open.push(el.name().to_owned());
                seen_root = true;
                events.push(ElementEvent::Start(el));
            }
            XmlEvent::Empty(bs) => {
                seen_root = true;
                events.push(ElementEvent::Empty(bs.try_into()?));
            }
            XmlEvent::End(be) => {
                let name = String::from_utf8(be.local_name().into_inner().to_vec())?;
                if open.pop().as_ref() != Some(&name) {
                    return Err(Error::Document(format!("unexpected closing tag </{name}>")));
                }
                events.push(ElementEvent::End(name));
            }
            XmlEvent::Eof => break,
            // text, comments, declarations etc. carry no geometry
            _ => {}
        }
    }

    if let Some(name) = open.last() {
        return Err(Error::Document(format!("unclosed element <{name}>")));
    }
    if !seen_root {
        return Err(Error::Document("no root element".to_string()));
    }
    Ok(events)
}
