//! Typed HTML page for `GET /`.
//!
//! Template slots are filled in a single pass over the template, so values are
//! never re-scanned for placeholders. Each slot has its own escaping.

use crate::chart::SerializedChart;

const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");

pub struct IndexPage<'a> {
    pub title: &'a str,
    pub chart: &'a SerializedChart,
}

impl IndexPage<'_> {
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(INDEX_TEMPLATE.len() + self.chart.as_str().len());
        let mut rest = INDEX_TEMPLATE;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                rest = &rest[start..];
                break;
            };
            match after[..end].trim() {
                "title" => out.push_str(&escape_html(self.title)),
                "chart" => out.push_str(&escape_script_json(self.chart.as_str())),
                other => {
                    out.push_str("{{");
                    out.push_str(other);
                    out.push_str("}}");
                }
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);
        out
    }
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Makes JSON text safe inside `<script type="application/json">`.
/// The output is still valid JSON that parses to the same value.
pub fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::ChartSerializer;
    use crate::models::{MetricRow, MetricTable};
    use serde_json::Value;

    #[test]
    fn metric_names_cannot_close_the_script_block() {
        let table: MetricTable = vec![MetricRow::new("</script><b>x</b>", 1.0)]
            .into_iter()
            .collect();
        let chart = ChartSerializer::default().serialize(&table);
        let html = IndexPage { title: "t", chart: &chart }.render();

        assert_eq!(html.matches("</script>").count(), 3);
        assert!(!html.contains("<b>x</b>"));
    }

    #[test]
    fn escaped_chart_parses_to_same_value() {
        let raw = r#"{"x":["a<b","c&d"]}"#;
        let original: Value = serde_json::from_str(raw).unwrap();
        let escaped: Value = serde_json::from_str(&escape_script_json(raw)).unwrap();
        assert_eq!(original, escaped);
    }

    #[test]
    fn title_is_html_escaped() {
        let chart = SerializedChart::empty();
        let html = IndexPage {
            title: "Q1 <Sales> & \"Profit\"",
            chart: &chart,
        }
        .render();
        assert!(html.contains("<title>Q1 &lt;Sales&gt; &amp; &quot;Profit&quot;</title>"));
    }

    #[test]
    fn placeholders_inside_values_are_not_expanded() {
        let chart = SerializedChart::empty();
        let html = IndexPage {
            title: "{{chart}}",
            chart: &chart,
        }
        .render();
        assert!(html.contains("<title>{{chart}}</title>"));
        assert!(html.contains(r#"<script id="chart-data" type="application/json">{}</script>"#));
    }
}
