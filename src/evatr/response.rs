//! eVatR reply interpretation and diagnostics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::codes::MessageCatalog;
use super::params::EvatrFields;

/// Status codes denoting a successful validity determination (sorted).
///
/// 216, 218, and 219 report problems with the qualified confirmation while
/// still confirming the ID itself; 223 is valid with the print function
/// retired.
static VALID_CODES: &[&str] = &["200", "216", "218", "219", "223"];

/// Whether an `ErrorCode` value denotes a valid ID.
///
/// The whitelist is authoritative: every other code, including an absent
/// one, denotes invalid. Codes are opaque strings, never parsed as numbers.
pub fn is_valid_code(code: &str) -> bool {
    VALID_CODES.binary_search(&code).is_ok()
}

/// Interpreted eVatR reply for one confirmation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvatrReply {
    /// Whether the status code denotes a valid ID.
    pub valid: bool,
    /// Raw `ErrorCode` value, when present and non-empty.
    pub error_code: Option<String>,
    /// Start of the validity window (`Gueltig_ab`, dd.MM.yyyy).
    pub valid_from: Option<NaiveDate>,
    /// End of the validity window (`Gueltig_bis`, dd.MM.yyyy).
    pub valid_until: Option<NaiveDate>,
    /// Human-readable outcome lines, ordered.
    pub diagnostics: Vec<String>,
}

/// Interpret an extracted field set into a reply.
///
/// Diagnostic lines come in a fixed order: the status line, the validity
/// window, then the name/street/postal/city match indicators. Each match
/// line pairs the response-echoed submitted value with the catalog text for
/// its indicator. Only present fields produce lines.
pub(crate) fn interpret_fields(fields: &EvatrFields, catalog: &MessageCatalog) -> EvatrReply {
    let mut diagnostics = Vec::new();

    let error_code = fields.get_non_empty(EvatrFields::ERROR_CODE);
    if let Some(code) = error_code {
        let ustid2 = fields.get(EvatrFields::UST_ID_2).unwrap_or_default();
        diagnostics.push(format!("{ustid2} -> {code} = {}", catalog.error_text(code)));
    }

    let from_raw = fields.get_non_empty(EvatrFields::GUELTIG_AB);
    let until_raw = fields.get_non_empty(EvatrFields::GUELTIG_BIS);
    if from_raw.is_some() || until_raw.is_some() {
        diagnostics.push(format!(
            "Gueltig_ab = {}, Gueltig_bis = {}",
            from_raw.unwrap_or_default(),
            until_raw.unwrap_or_default(),
        ));
    }

    for (indicator_field, echoed_field) in [
        (EvatrFields::ERG_NAME, EvatrFields::FIRMENNAME),
        (EvatrFields::ERG_STR, EvatrFields::STRASSE),
        (EvatrFields::ERG_PLZ, EvatrFields::PLZ),
        (EvatrFields::ERG_ORT, EvatrFields::ORT),
    ] {
        if let Some(indicator) = fields.get_non_empty(indicator_field) {
            let echoed = fields.get(echoed_field).unwrap_or_default();
            diagnostics.push(format!(
                "{indicator_field} -> {echoed} -> {}",
                catalog.match_text(indicator)
            ));
        }
    }

    EvatrReply {
        valid: error_code.is_some_and(is_valid_code),
        error_code: error_code.map(str::to_string),
        valid_from: from_raw.and_then(parse_date),
        valid_until: until_raw.and_then(parse_date),
        diagnostics,
    }
}

/// eVatR dates are German-style day-first. Unparseable values stay raw in
/// the diagnostics and yield `None` here.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%d.%m.%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> EvatrFields {
        let mut f = EvatrFields::default();
        for (name, value) in pairs {
            f.insert(*name, *value);
        }
        f
    }

    fn catalog() -> MessageCatalog {
        MessageCatalog::new()
    }

    // --- Validity classification ---

    #[test]
    fn code_200_is_valid() {
        let reply = interpret_fields(&fields(&[("ErrorCode", "200")]), &catalog());
        assert!(reply.valid);
        assert_eq!(reply.error_code.as_deref(), Some("200"));
    }

    #[test]
    fn code_201_is_invalid() {
        let reply = interpret_fields(&fields(&[("ErrorCode", "201")]), &catalog());
        assert!(!reply.valid);
        assert_eq!(reply.error_code.as_deref(), Some("201"));
    }

    #[test]
    fn absent_code_is_invalid() {
        let reply = interpret_fields(&fields(&[]), &catalog());
        assert!(!reply.valid);
        assert_eq!(reply.error_code, None);
        assert!(reply.diagnostics.is_empty());
    }

    #[test]
    fn whole_whitelist_is_valid() {
        for code in ["200", "216", "218", "219", "223"] {
            assert!(is_valid_code(code), "{code} should be valid");
        }
        for code in ["", "199", "217", "220", "221", "222", "999"] {
            assert!(!is_valid_code(code), "{code} should be invalid");
        }
    }

    #[test]
    fn whitelist_is_sorted() {
        for window in VALID_CODES.windows(2) {
            assert!(
                window[0] < window[1],
                "valid codes not sorted: {} >= {}",
                window[0],
                window[1]
            );
        }
    }

    // --- Diagnostics ---

    #[test]
    fn full_reply_diagnostics_order() {
        let reply = interpret_fields(
            &fields(&[
                ("ErrorCode", "200"),
                ("UstId_2", "ATU12345678"),
                ("Firmenname", "ACME GmbH"),
                ("Erg_Name", "A"),
                ("Ort", "Wien"),
                ("Erg_Ort", "B"),
                ("PLZ", "1010"),
                ("Erg_PLZ", "C"),
                ("Strasse", "Opernring 1"),
                ("Erg_Str", "D"),
                ("Gueltig_ab", "01.01.2020"),
                ("Gueltig_bis", "31.12.2024"),
            ]),
            &catalog(),
        );

        assert_eq!(
            reply.diagnostics,
            vec![
                "ATU12345678 -> 200 = The queried VAT ID is valid.".to_string(),
                "Gueltig_ab = 01.01.2020, Gueltig_bis = 31.12.2024".to_string(),
                "Erg_Name -> ACME GmbH -> matches the registered data".to_string(),
                "Erg_Str -> Opernring 1 -> is not disclosed by the member state".to_string(),
                "Erg_PLZ -> 1010 -> was not queried".to_string(),
                "Erg_Ort -> Wien -> does not match the registered data".to_string(),
            ]
        );
    }

    #[test]
    fn window_line_with_one_side_absent() {
        let reply = interpret_fields(
            &fields(&[("ErrorCode", "204"), ("Gueltig_bis", "30.06.2019")]),
            &catalog(),
        );
        assert!(!reply.valid);
        assert_eq!(reply.diagnostics[1], "Gueltig_ab = , Gueltig_bis = 30.06.2019");
    }

    #[test]
    fn window_dates_are_parsed() {
        let reply = interpret_fields(
            &fields(&[
                ("ErrorCode", "204"),
                ("Gueltig_ab", "01.01.2020"),
                ("Gueltig_bis", "31.12.2024"),
            ]),
            &catalog(),
        );
        assert_eq!(reply.valid_from, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(reply.valid_until, NaiveDate::from_ymd_opt(2024, 12, 31));
    }

    #[test]
    fn unparseable_date_stays_raw_in_diagnostics() {
        let reply = interpret_fields(
            &fields(&[("ErrorCode", "204"), ("Gueltig_ab", "sometime")]),
            &catalog(),
        );
        assert_eq!(reply.valid_from, None);
        assert_eq!(reply.diagnostics[1], "Gueltig_ab = sometime, Gueltig_bis = ");
    }

    #[test]
    fn unknown_code_line_echoes_code() {
        let reply = interpret_fields(
            &fields(&[("ErrorCode", "477"), ("UstId_2", "FR999")]),
            &catalog(),
        );
        assert!(!reply.valid);
        assert_eq!(reply.diagnostics[0], "FR999 -> 477 = 477");
    }

    #[test]
    fn indicator_without_echoed_value_renders_empty() {
        let reply = interpret_fields(
            &fields(&[("ErrorCode", "216"), ("Erg_Name", "C")]),
            &catalog(),
        );
        assert_eq!(reply.diagnostics[1], "Erg_Name ->  -> was not queried");
    }

    #[test]
    fn empty_indicator_produces_no_line() {
        let reply = interpret_fields(
            &fields(&[("ErrorCode", "200"), ("Erg_Name", "")]),
            &catalog(),
        );
        assert_eq!(reply.diagnostics.len(), 1);
    }
}
