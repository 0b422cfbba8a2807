//! Positional extraction of the eVatR param-array encoding.
//!
//! The reply is a legacy RPC document without a schema: a sequence of
//! `param` elements, each wrapping a nested `value/array/data` structure
//! whose first string is a field name and whose second string is the value.

use std::collections::BTreeMap;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::core::VerifyError;

/// The named values extracted from one eVatR reply.
///
/// Built by [`EvatrFields::parse`] in a single traversal of the document.
/// A `param` with fewer than two strings yields no entry, so an absent
/// field stays distinguishable from an empty one. Field names not listed
/// among the constants are kept but do not influence interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvatrFields {
    entries: BTreeMap<String, String>,
}

impl EvatrFields {
    pub const ERROR_CODE: &'static str = "ErrorCode";
    pub const UST_ID_1: &'static str = "UstId_1";
    pub const UST_ID_2: &'static str = "UstId_2";
    pub const FIRMENNAME: &'static str = "Firmenname";
    pub const ORT: &'static str = "Ort";
    pub const PLZ: &'static str = "PLZ";
    pub const STRASSE: &'static str = "Strasse";
    pub const ERG_NAME: &'static str = "Erg_Name";
    pub const ERG_ORT: &'static str = "Erg_Ort";
    pub const ERG_PLZ: &'static str = "Erg_PLZ";
    pub const ERG_STR: &'static str = "Erg_Str";
    pub const GUELTIG_AB: &'static str = "Gueltig_ab";
    pub const GUELTIG_BIS: &'static str = "Gueltig_bis";

    /// Parse a reply document into the field map.
    ///
    /// Within each `param`, strings are collected at the
    /// `param/value/array/data/value/string` position in document order;
    /// the first is the name, the second the value, anything beyond is
    /// ignored. When the same name appears in several params, the first
    /// occurrence wins.
    ///
    /// # Errors
    ///
    /// [`VerifyError::MalformedXml`] on any parse or unescape failure.
    pub fn parse(xml: &str) -> Result<Self, VerifyError> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut fields = Self::default();
        let mut path: Vec<String> = Vec::new();
        let mut strings: Vec<String> = Vec::new();
        let mut text: Option<String> = None;

        loop {
            match reader.read_event() {
                Ok(Event::Start(ref e)) => {
                    let name = std::str::from_utf8(e.name().as_ref())
                        .unwrap_or("")
                        .to_string();
                    path.push(name);
                    if at_pair_string(&path) {
                        text = Some(String::new());
                    }
                }
                Ok(Event::Empty(ref e)) => {
                    // <string/> is an empty value, not an absent one.
                    if e.name().as_ref() == b"string" && at_pair_value(&path) {
                        strings.push(String::new());
                    }
                }
                Ok(Event::Text(ref e)) => {
                    if let Some(buf) = text.as_mut() {
                        let t = e
                            .unescape()
                            .map_err(|err| VerifyError::MalformedXml(err.to_string()))?;
                        buf.push_str(&t);
                    }
                }
                Ok(Event::CData(ref e)) => {
                    if let Some(buf) = text.as_mut() {
                        buf.push_str(&String::from_utf8_lossy(e));
                    }
                }
                Ok(Event::End(_)) => {
                    let ended = path.pop().unwrap_or_default();
                    if ended == "string" {
                        if let Some(s) = text.take() {
                            strings.push(s);
                        }
                    } else if ended == "param" {
                        let mut pair = strings.drain(..);
                        if let (Some(name), Some(value)) = (pair.next(), pair.next()) {
                            fields.entries.entry(name).or_insert(value);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(VerifyError::MalformedXml(e.to_string())),
                _ => {}
            }
        }

        Ok(fields)
    }

    /// Value for a field name; an absent param yields `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Like [`EvatrFields::get`], but an empty value also yields `None`.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    /// All extracted name/value pairs, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Whether the traversal found any paired values at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }
}

fn at_pair_value(path: &[String]) -> bool {
    let n = path.len();
    n >= 5
        && path[n - 5] == "param"
        && path[n - 4] == "value"
        && path[n - 3] == "array"
        && path[n - 2] == "data"
        && path[n - 1] == "value"
}

fn at_pair_string(path: &[String]) -> bool {
    let n = path.len();
    n >= 6 && path[n - 1] == "string" && at_pair_value(&path[..n - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(name: &str, value: &str) -> String {
        format!(
            "<param><value><array><data>\
             <value><string>{name}</string></value>\
             <value><string>{value}</string></value>\
             </data></array></value></param>"
        )
    }

    fn doc(params: &str) -> String {
        format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?><params>{params}</params>")
    }

    #[test]
    fn pairs_name_and_value() {
        let xml = doc(&[param("ErrorCode", "200"), param("UstId_2", "DE129273398")].concat());
        let fields = EvatrFields::parse(&xml).unwrap();
        assert_eq!(fields.get(EvatrFields::ERROR_CODE), Some("200"));
        assert_eq!(fields.get(EvatrFields::UST_ID_2), Some("DE129273398"));
        assert_eq!(fields.get(EvatrFields::ORT), None);
    }

    #[test]
    fn single_string_param_yields_no_entry() {
        let xml = doc(
            "<param><value><array><data>\
             <value><string>ErrorCode</string></value>\
             </data></array></value></param>",
        );
        let fields = EvatrFields::parse(&xml).unwrap();
        assert_eq!(fields.get(EvatrFields::ERROR_CODE), None);
    }

    #[test]
    fn empty_value_string_yields_empty_entry() {
        let xml = doc(
            "<param><value><array><data>\
             <value><string>Erg_Ort</string></value>\
             <value><string/></value>\
             </data></array></value></param>",
        );
        let fields = EvatrFields::parse(&xml).unwrap();
        assert_eq!(fields.get(EvatrFields::ERG_ORT), Some(""));
        assert_eq!(fields.get_non_empty(EvatrFields::ERG_ORT), None);
    }

    #[test]
    fn entities_are_unescaped() {
        let xml = doc(&param("Firmenname", "M&amp;M Handels GmbH"));
        let fields = EvatrFields::parse(&xml).unwrap();
        assert_eq!(
            fields.get(EvatrFields::FIRMENNAME),
            Some("M&M Handels GmbH")
        );
    }

    #[test]
    fn cdata_value() {
        let xml = doc(
            "<param><value><array><data>\
             <value><string>Firmenname</string></value>\
             <value><string><![CDATA[Tricky & Co]]></string></value>\
             </data></array></value></param>",
        );
        let fields = EvatrFields::parse(&xml).unwrap();
        assert_eq!(fields.get(EvatrFields::FIRMENNAME), Some("Tricky & Co"));
    }

    #[test]
    fn duplicate_field_first_wins() {
        let xml = doc(&[param("ErrorCode", "200"), param("ErrorCode", "201")].concat());
        let fields = EvatrFields::parse(&xml).unwrap();
        assert_eq!(fields.get(EvatrFields::ERROR_CODE), Some("200"));
    }

    #[test]
    fn strings_outside_pair_position_are_ignored() {
        let xml = doc("<stray><string>ErrorCode</string><string>200</string></stray>");
        let fields = EvatrFields::parse(&xml).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn mismatched_tags_are_malformed() {
        let err = EvatrFields::parse("<params><param></wrong></params>").unwrap_err();
        assert!(matches!(err, VerifyError::MalformedXml(_)));
    }

    #[test]
    fn empty_document_has_no_fields() {
        let fields = EvatrFields::parse("<params/>").unwrap();
        assert!(fields.is_empty());
    }
}
