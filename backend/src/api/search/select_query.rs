//! Solr select query builder helpers.

use std::str::FromStr;

use common::{
    query_params::{QueryParams, url_decode},
    search_const::{DEFAULT_FACET_LIMIT, DEFAULT_ROWS, DEFAULT_START},
    select_request::{FilterQuery, ParamError, SelectRequest, SortField},
};


/// Builds the select request from raw querystring params, applying the
/// default for every absent or malformed parameter.
pub fn build_select_request(params: &QueryParams) -> SelectRequest {
    let mut request = SelectRequest::default();

    if let Some(q) = single_value(params, "q") {
        request.query = url_decode(q);
    }

    request.start = integer_param(params, "start").unwrap_or(DEFAULT_START);
    request.rows = integer_param::<u64>(params, "rows")
        .and_then(|rows| {
            if rows > 0 {
                return Some(rows);
            }
            warn_rejected("rows", &ParamError::NotPositive { key: "rows".into(), value: rows.to_string() });
            None
        })
        .unwrap_or(DEFAULT_ROWS);

    // the app only sends one sort at a time: date or score
    if let Some(sort) = single_value(params, "sort") {
        match url_decode(sort).parse::<SortField>() {
            Ok(sort) => request.sort = sort,
            Err(e) => warn_rejected("sort", &e),
        }
    }

    if let Some(field) = single_value(params, "hl.fl") {
        request.highlighting.field = field.to_string();
    }
    if let Some(flag) = single_value(params, "hl.usePhraseHighlighter") {
        match parse_bool("hl.usePhraseHighlighter", flag) {
            Ok(flag) => request.highlighting.use_phrase_highlighter = flag,
            Err(e) => warn_rejected("hl.usePhraseHighlighter", &e),
        }
    }

    request.facet_set.limit = integer_param(params, "facet.limit").unwrap_or(DEFAULT_FACET_LIMIT);
    if let Some(sort) = single_value(params, "facet.sort") {
        request.facet_set.sort = sort.to_string();
    }
    if let Some(fields) = params.get("facet.field") {
        request.facet_set.fields = fields
            .values()
            .into_iter()
            .filter(|field| !field.is_empty())
            .map(|field| field.to_string())
            .collect();
    }

    if let Some(filters) = params.get("fq") {
        for fq in filters.values() {
            match url_decode(fq).parse::<FilterQuery>() {
                Ok(fq) => request.filter_queries.push(fq),
                Err(e) => warn_rejected("fq", &e),
            }
        }
    }

    request
}

/// The `/select` HTTP parameters for a request, in the order Solr receives them.
pub fn solr_request_params(request: &SelectRequest) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = vec![
        ("q".into(), request.query.clone()),
        ("start".into(), request.start.to_string()),
        ("rows".into(), request.rows.to_string()),
        ("fl".into(), "*,score".into()),
        ("wt".into(), "json".into()),
        ("json.nl".into(), "flat".into()),
        ("omitHeader".into(), "true".into()),
        ("sort".into(), format!("{} {}", request.sort.field, request.sort.direction)),
        ("hl".into(), "true".into()),
        ("hl.fl".into(), request.highlighting.field.clone()),
        ("hl.simple.pre".into(), request.highlighting.simple_prefix.clone()),
        ("hl.simple.post".into(), request.highlighting.simple_postfix.clone()),
        (
            "hl.usePhraseHighlighter".into(),
            request.highlighting.use_phrase_highlighter.to_string(),
        ),
        ("facet".into(), "true".into()),
        ("facet.limit".into(), request.facet_set.limit.to_string()),
        ("facet.sort".into(), request.facet_set.sort.clone()),
    ];
    for field in &request.facet_set.fields {
        params.push(("facet.field".into(), field.clone()));
    }
    for fq in &request.filter_queries {
        params.push(("fq".into(), fq.query.clone()));
    }
    params
}

fn single_value<'a>(params: &'a QueryParams, key: &str) -> Option<&'a str> {
    let value = params.get(key)?;
    if value.is_multiple() {
        tracing::warn!("select query: `{}` given more than once, using the first value", key);
    }
    value.first()
}

fn integer_param<T: FromStr>(params: &QueryParams, key: &str) -> Option<T> {
    let value = single_value(params, key)?;
    match value.trim().parse::<T>() {
        Ok(n) => Some(n),
        Err(_) => {
            warn_rejected(key, &ParamError::InvalidInteger { key: key.to_string(), value: value.to_string() });
            None
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ParamError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" => Ok(true),
        "false" | "0" | "off" => Ok(false),
        _ => Err(ParamError::InvalidBoolean { key: key.to_string(), value: value.to_string() }),
    }
}

fn warn_rejected(key: &str, error: &ParamError) {
    tracing::warn!("select query: ignoring `{}`, using default: {}", key, error);
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::{query_params::parse_query_string, select_request::SortDirection};

    fn build(qs: &str) -> SelectRequest {
        build_select_request(&parse_query_string(qs))
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> Vec<&'a str> {
        params.iter().filter(|(k, _)| k == key).map(|(_, v)| v.as_str()).collect()
    }

    #[test]
    fn empty_querystring_uses_defaults() {
        assert_eq!(build(""), SelectRequest::default());
    }

    #[test]
    fn main_query_defaults_to_match_all() {
        assert_eq!(build("rows=5").query, "*");
    }

    #[test]
    fn main_query_is_url_decoded() {
        assert_eq!(build("q=%2Afoo").query, "*foo");
        assert_eq!(build("q=open+source").query, "open source");
    }

    #[test]
    fn pagination_is_parsed() {
        let request = build("start=40&rows=10");
        assert_eq!(request.start, 40);
        assert_eq!(request.rows, 10);
    }

    #[test]
    fn malformed_pagination_falls_back() {
        let request = build("start=-1&rows=0");
        assert_eq!(request.start, 0);
        assert_eq!(request.rows, 20);

        let request = build("start=abc&rows=");
        assert_eq!(request.start, 0);
        assert_eq!(request.rows, 20);
    }

    #[test]
    fn sort_is_decoded_and_split() {
        let request = build("sort=ds_changed%3Ddesc");
        assert_eq!(request.sort.field, "ds_changed");
        assert_eq!(request.sort.direction, SortDirection::Desc);

        let request = build("sort=sort_title=asc");
        assert_eq!(request.sort.field, "sort_title");
        assert_eq!(request.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_without_direction_falls_back_to_score() {
        let request = build("sort=ds_changed");
        assert_eq!(request.sort, SortField::default());
    }

    #[test]
    fn highlighting_params_are_not_decoded() {
        let request = build("hl.fl=tm_body%20x&hl.usePhraseHighlighter=false");
        assert_eq!(request.highlighting.field, "tm_body%20x");
        assert!(!request.highlighting.use_phrase_highlighter);
        assert_eq!(request.highlighting.simple_prefix, "<strong>");
        assert_eq!(request.highlighting.simple_postfix, "</strong>");
    }

    #[test]
    fn invalid_phrase_highlighter_flag_keeps_default() {
        assert!(build("hl.usePhraseHighlighter=maybe").highlighting.use_phrase_highlighter);
    }

    #[test]
    fn facet_defaults() {
        let request = build("q=x");
        assert_eq!(request.facet_set.limit, -1);
        assert_eq!(request.facet_set.sort, "index");
        assert!(request.facet_set.fields.is_empty());
    }

    #[test]
    fn facet_settings_and_fields() {
        let request = build("facet.limit=10&facet.sort=count&facet.field=sm_site_name&facet.field=ss_federated_type");
        assert_eq!(request.facet_set.limit, 10);
        assert_eq!(request.facet_set.sort, "count");
        assert_eq!(request.facet_set.fields, vec!["sm_site_name", "ss_federated_type"]);
    }

    #[test]
    fn single_facet_field_is_kept() {
        let request = build("facet.field=sm_site_name");
        assert_eq!(request.facet_set.fields, vec!["sm_site_name"]);
    }

    #[test]
    fn filter_queries_are_named_and_decoded() {
        let request = build("fq=category%3Abooks&fq=price%3A10");

        assert_eq!(
            request.filter_queries,
            vec![
                FilterQuery { key: "category=books".into(), query: "category:books".into() },
                FilterQuery { key: "price=10".into(), query: "price:10".into() },
            ]
        );
    }

    #[test]
    fn single_filter_query_is_promoted() {
        let request = build("fq=sm_site_name%3A%22My+Site%22");
        assert_eq!(request.filter_queries.len(), 1);
        assert_eq!(request.filter_queries[0].key, "sm_site_name=\"My Site\"");
        assert_eq!(request.filter_queries[0].query, "sm_site_name:\"My Site\"");
    }

    #[test]
    fn malformed_filter_queries_are_skipped() {
        let request = build("fq=nocolon&fq=type%3Apage");
        assert_eq!(request.filter_queries.len(), 1);
        assert_eq!(request.filter_queries[0].query, "type:page");
    }

    #[test]
    fn same_querystring_builds_same_request() {
        let qs = "q=drupal&fq=type%3Apage&facet.field=a&facet.field=b&sort=ds_changed%3Ddesc";
        assert_eq!(build(qs), build(qs));
    }

    #[test]
    fn repeated_scalar_uses_first_value() {
        assert_eq!(build("q=first&q=second").query, "first");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(build("foo=bar&_=123"), SelectRequest::default());
    }

    #[test]
    fn solr_params_for_default_request() {
        let params = solr_request_params(&SelectRequest::default());

        assert_eq!(param(&params, "q"), vec!["*"]);
        assert_eq!(param(&params, "start"), vec!["0"]);
        assert_eq!(param(&params, "rows"), vec!["20"]);
        assert_eq!(param(&params, "wt"), vec!["json"]);
        assert_eq!(param(&params, "sort"), vec!["score desc"]);
        assert_eq!(param(&params, "hl"), vec!["true"]);
        assert_eq!(param(&params, "hl.fl"), vec!["tm_rendered_item"]);
        assert_eq!(param(&params, "hl.simple.pre"), vec!["<strong>"]);
        assert_eq!(param(&params, "hl.simple.post"), vec!["</strong>"]);
        assert_eq!(param(&params, "hl.usePhraseHighlighter"), vec!["true"]);
        assert_eq!(param(&params, "facet"), vec!["true"]);
        assert_eq!(param(&params, "facet.limit"), vec!["-1"]);
        assert_eq!(param(&params, "facet.sort"), vec!["index"]);
        assert!(param(&params, "facet.field").is_empty());
        assert!(param(&params, "fq").is_empty());
    }

    #[test]
    fn solr_params_repeat_facet_fields_and_filters() {
        let request = build("facet.field=a&facet.field=b&fq=type%3Apage&fq=site%3Aone&sort=ds_changed%3Dasc");
        let params = solr_request_params(&request);

        assert_eq!(param(&params, "facet.field"), vec!["a", "b"]);
        assert_eq!(param(&params, "fq"), vec!["type:page", "site:one"]);
        assert_eq!(param(&params, "sort"), vec!["ds_changed asc"]);
    }
}
