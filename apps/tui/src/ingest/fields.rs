use super::IngestError;

/// Candidate column names for each canonical field, in priority order.
///
/// The lists carry the localized and unit-suffixed spellings seen in real
/// test spreadsheets; matching is case-insensitive.
pub const DISTANCE_KEYS: &[&str] = &["距离", "distance", "dist", "距离(m)", "距离（m）", "range"];
pub const ANGLE_KEYS: &[&str] = &["角度", "angle", "角度(°)", "角度（°）", "角度(度)", "deg"];
pub const TRIGGER_KEYS: &[&str] = &[
    "触发次数",
    "触发",
    "count",
    "triggered",
    "trigger",
    "是否触发",
    "times",
    "result",
];

/// The headers chosen for each canonical field.
///
/// `trigger` is optional: without it every record defaults to the maximal
/// trigger level.
#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    pub distance: String,
    pub angle: String,
    pub trigger: Option<String>,
}

/// Two-pass header matching.
///
/// Pass 1 requires exact equality (trimmed, lowercased) with a candidate
/// key, candidates tried in priority order; pass 2 falls back to substring
/// containment of the key inside the header. The first header found wins.
pub fn resolve<'a>(headers: &'a [String], keys: &[&str]) -> Option<&'a str> {
    for key in keys {
        let key = key.to_lowercase();
        for header in headers {
            if header.trim().to_lowercase() == key {
                return Some(header.as_str());
            }
        }
    }
    for key in keys {
        let key = key.to_lowercase();
        for header in headers {
            if header.trim().to_lowercase().contains(&key) {
                return Some(header.as_str());
            }
        }
    }
    None
}

/// Resolves all three canonical fields against a header row.
///
/// Distance and angle are mandatory; failing either aborts ingestion with an
/// error naming the available headers.
pub fn resolve_columns(headers: &[String]) -> Result<ResolvedColumns, IngestError> {
    let distance = resolve(headers, DISTANCE_KEYS)
        .ok_or_else(|| IngestError::UnresolvableSchema {
            field: "distance",
            headers: headers.to_vec(),
        })?
        .to_string();

    let angle = resolve(headers, ANGLE_KEYS)
        .ok_or_else(|| IngestError::UnresolvableSchema {
            field: "angle",
            headers: headers.to_vec(),
        })?
        .to_string();

    let trigger = resolve(headers, TRIGGER_KEYS).map(str::to_string);

    Ok(ResolvedColumns {
        distance,
        angle,
        trigger,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn exact_match_beats_substring_match() {
        // "distance_raw" contains "distance", but the exact "Range" header
        // must win even though "range" is the lowest-priority key.
        let hs = headers(&["distance_raw", "Range"]);
        assert_eq!(resolve(&hs, DISTANCE_KEYS), Some("Range"));
    }

    #[test]
    fn exact_match_is_case_insensitive_and_trimmed() {
        let hs = headers(&[" DISTANCE "]);
        assert_eq!(resolve(&hs, DISTANCE_KEYS), Some(" DISTANCE "));
    }

    #[test]
    fn substring_pass_runs_only_when_exact_fails() {
        let hs = headers(&["测试距离(m)"]);
        assert_eq!(resolve(&hs, DISTANCE_KEYS), Some("测试距离(m)"));
    }

    #[test]
    fn candidate_priority_order_is_respected() {
        // Both headers match by substring; the earlier candidate key wins.
        let hs = headers(&["deg_col", "angle_col"]);
        assert_eq!(resolve(&hs, ANGLE_KEYS), Some("angle_col"));
    }

    #[test]
    fn localized_headers_resolve() {
        let hs = headers(&["距离(m)", "角度(°)", "触发次数"]);
        let cols = resolve_columns(&hs).unwrap();
        assert_eq!(cols.distance, "距离(m)");
        assert_eq!(cols.angle, "角度(°)");
        assert_eq!(cols.trigger.as_deref(), Some("触发次数"));
    }

    #[test]
    fn missing_trigger_column_is_not_an_error() {
        let cols = resolve_columns(&headers(&["range", "deg"])).unwrap();
        assert_eq!(cols.distance, "range");
        assert_eq!(cols.angle, "deg");
        assert!(cols.trigger.is_none());
    }

    #[test]
    fn missing_angle_column_names_available_headers() {
        let err = resolve_columns(&headers(&["range", "speed"])).unwrap_err();
        match err {
            IngestError::UnresolvableSchema { field, headers } => {
                assert_eq!(field, "angle");
                assert_eq!(headers, vec!["range", "speed"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
