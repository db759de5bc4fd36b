use serde_json::Value;

use crate::types::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, FilterState, PHONE_ALL};

/// The query-string serialization of the dashboard's filter and page
/// position. This is the shareable "view link": any view can be copied,
/// bookmarked, and reopened from it, so the parameter layout must stay
/// stable across releases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLink {
    pub filter: FilterState,
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewLink {
    fn default() -> Self {
        ViewLink {
            filter: FilterState::default(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ViewLink {
    /// Parse a view link. Malformed parameters are never fatal: every
    /// field falls back to its default, and a leading `?` is tolerated.
    pub fn decode(input: &str) -> ViewLink {
        let query = input.strip_prefix('?').unwrap_or(input);
        let mut view = ViewLink::default();

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "phone" => {
                    if !value.is_empty() {
                        view.filter.phone = value.into_owned();
                    }
                }
                "q" => view.filter.search = value.into_owned(),
                "project" => view.filter.project = value.into_owned(),
                "labels" => view.filter.labels = parse_labels(&value),
                "page" => view.page = parse_positive(&value, DEFAULT_PAGE),
                "pageSize" => view.page_size = parse_positive(&value, DEFAULT_PAGE_SIZE),
                _ => {}
            }
        }

        view
    }

    /// Serialize to the canonical query string: `phone` always written
    /// (defaulting to the `all` sentinel), `q`/`project`/`labels` only when
    /// non-empty, `page` and `pageSize` always, in that order.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());

        let phone = if self.filter.phone.is_empty() {
            PHONE_ALL
        } else {
            &self.filter.phone
        };
        serializer.append_pair("phone", phone);

        if !self.filter.search.is_empty() {
            serializer.append_pair("q", &self.filter.search);
        }
        if !self.filter.project.is_empty() {
            serializer.append_pair("project", &self.filter.project);
        }
        if !self.filter.labels.is_empty() {
            let labels_json = serde_json::to_string(&self.filter.labels).unwrap_or_default();
            serializer.append_pair("labels", &labels_json);
        }

        serializer.append_pair("page", &self.page.to_string());
        serializer.append_pair("pageSize", &self.page_size.to_string());

        serializer.finish()
    }
}

/// Two-stage label decoder: a JSON string array is canonical; anything
/// else falls back to comma-splitting with trimmed, non-empty tokens.
fn parse_labels(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        return items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
    }

    raw.split(',')
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_positive(raw: &str, fallback: usize) -> usize {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => n,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty_query_yields_defaults() {
        let view = ViewLink::decode("");
        assert_eq!(view.filter.phone, PHONE_ALL);
        assert_eq!(view.filter.search, "");
        assert_eq!(view.filter.project, "");
        assert!(view.filter.labels.is_empty());
        assert_eq!(view.page, 1);
        assert_eq!(view.page_size, 10);
    }

    #[test]
    fn test_decode_tolerates_leading_question_mark() {
        let view = ViewLink::decode("?q=team&page=2");
        assert_eq!(view.filter.search, "team");
        assert_eq!(view.page, 2);
    }

    #[test]
    fn test_decode_json_labels() {
        let view = ViewLink::decode("labels=%5B%22Important%22%2C%22Urgent%22%5D");
        assert_eq!(view.filter.labels, vec!["Important", "Urgent"]);
    }

    #[test]
    fn test_decode_labels_comma_fallback() {
        let view = ViewLink::decode("labels=a%2C%20b%2Cc");
        assert_eq!(view.filter.labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decode_labels_bad_json_becomes_single_token() {
        let view = ViewLink::decode("labels=%5Bbad%20json");
        assert_eq!(view.filter.labels, vec!["[bad json"]);
    }

    #[test]
    fn test_decode_labels_json_non_strings_dropped() {
        let view = ViewLink::decode("labels=%5B%22A%22%2C7%2C%22B%22%5D");
        assert_eq!(view.filter.labels, vec!["A", "B"]);
    }

    #[test]
    fn test_decode_invalid_page_falls_back() {
        let view = ViewLink::decode("page=zero&pageSize=-3");
        assert_eq!(view.page, 1);
        assert_eq!(view.page_size, 10);
    }

    #[test]
    fn test_decode_zero_page_falls_back() {
        let view = ViewLink::decode("page=0");
        assert_eq!(view.page, 1);
    }

    #[test]
    fn test_decode_empty_phone_stays_all() {
        let view = ViewLink::decode("phone=&q=x");
        assert_eq!(view.filter.phone, PHONE_ALL);
    }

    #[test]
    fn test_encode_defaults() {
        let view = ViewLink::default();
        assert_eq!(view.encode(), "phone=all&page=1&pageSize=10");
    }

    #[test]
    fn test_encode_skips_empty_optional_params() {
        let view = ViewLink {
            filter: FilterState {
                phone: "+91 98765 43210".to_string(),
                ..Default::default()
            },
            page: 2,
            page_size: 25,
        };
        let encoded = view.encode();
        assert!(!encoded.contains("q="));
        assert!(!encoded.contains("project="));
        assert!(!encoded.contains("labels="));
        assert!(encoded.ends_with("page=2&pageSize=25"));
    }

    #[test]
    fn test_round_trip_full_state() {
        let view = ViewLink {
            filter: FilterState {
                phone: "+1 555".to_string(),
                search: "team".to_string(),
                project: "Ops".to_string(),
                labels: vec!["Important".to_string(), "Urgent".to_string()],
            },
            page: 3,
            page_size: 25,
        };
        let decoded = ViewLink::decode(&view.encode());
        assert_eq!(decoded, view);
    }

    #[test]
    fn test_round_trip_preserves_spaces_in_phone() {
        let view = ViewLink {
            filter: FilterState {
                phone: "+91 98765 43210".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        let decoded = ViewLink::decode(&view.encode());
        assert_eq!(decoded.filter.phone, "+91 98765 43210");
    }

    #[test]
    fn test_canonical_parameter_order() {
        let view = ViewLink {
            filter: FilterState {
                phone: "all".to_string(),
                search: "x".to_string(),
                project: "Alpha".to_string(),
                labels: vec!["Work".to_string()],
            },
            page: 1,
            page_size: 10,
        };
        let encoded = view.encode();
        let phone_pos = encoded.find("phone=").unwrap();
        let q_pos = encoded.find("q=").unwrap();
        let project_pos = encoded.find("project=").unwrap();
        let labels_pos = encoded.find("labels=").unwrap();
        let page_pos = encoded.find("page=").unwrap();
        let size_pos = encoded.find("pageSize=").unwrap();
        assert!(phone_pos < q_pos);
        assert!(q_pos < project_pos);
        assert!(project_pos < labels_pos);
        assert!(labels_pos < page_pos);
        assert!(page_pos < size_pos);
    }
}
