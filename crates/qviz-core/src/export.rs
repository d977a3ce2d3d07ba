//! JSON export of chart specifications
//!
//! Charts are exported in memory only; writing the result anywhere is up to
//! the caller or the renderer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chart::ChartSpec;
use crate::error::ChartResult;

/// Text encoding of an exported chart
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    /// Compact single-line JSON
    #[default]
    Json,
    /// Indented JSON for inspection
    PrettyJson,
}

impl ExportFormat {
    /// MIME type of the exported text
    pub fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

impl ChartSpec {
    /// Convert to a JSON value tree
    pub fn to_value(&self) -> ChartResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Compact JSON string
    pub fn to_json(&self) -> ChartResult<String> {
        self.export(ExportFormat::Json)
    }

    /// Indented JSON string
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        self.export(ExportFormat::PrettyJson)
    }

    /// Encode in the given format
    pub fn export(&self, format: ExportFormat) -> ChartResult<String> {
        let text = match format {
            ExportFormat::Json => serde_json::to_string(self)?,
            ExportFormat::PrettyJson => serde_json::to_string_pretty(self)?,
        };
        Ok(text)
    }

    /// Parse a chart from JSON, e.g. a caller-edited template
    pub fn from_json(source: &str) -> ChartResult<Self> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Trace;

    #[test]
    fn test_export_format_mime() {
        assert_eq!(ExportFormat::Json.mime_type(), "application/json");
        assert_eq!(ExportFormat::default(), ExportFormat::Json);
    }

    #[test]
    fn test_top_level_keys() {
        let value = ChartSpec::bar_chart_default().to_value().unwrap();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["config", "data", "layout"]);
    }

    #[test]
    fn test_config_omitted_when_absent() {
        let value = ChartSpec::surface_skeleton().to_value().unwrap();
        assert!(value.get("config").is_none());
        assert_eq!(value["data"][0]["type"], "surface");
    }

    #[test]
    fn test_json_round_trip_preserves_template() {
        let template = ChartSpec::bar_chart_default();
        let json = template.to_json_pretty().unwrap();
        assert!(json.contains('\n'));
        assert_eq!(ChartSpec::from_json(&json).unwrap(), template);
    }

    #[test]
    fn test_from_json_user_template() {
        let source = r#"{
            "data": [{"type": "bar", "x": [], "y": []}],
            "layout": {
                "xaxis": {"title": "q[0]"},
                "annotations": [{"text": "", "x": 0, "y": 1.1, "showarrow": false}]
            }
        }"#;
        let chart = ChartSpec::from_json(source).unwrap();
        assert!(matches!(chart.data[0], Trace::Bar(_)));
        assert_eq!(chart.layout.annotations[0].y, 1.1);
        assert!(chart.config.is_none());
    }

    #[test]
    fn test_from_json_keeps_plotly_layout_keys() {
        let source = r#"{
            "data": [],
            "layout": {
                "bargap": 0.2,
                "hovermode": "closest",
                "xaxis": {"title": "q[0]", "tickfont": {"size": 10}},
                "annotations": [{"text": "", "x": 0, "y": 1, "bgcolor": "red"}]
            }
        }"#;
        let chart = ChartSpec::from_json(source).unwrap();
        assert_eq!(chart.layout.extra["bargap"], 0.2);
        assert_eq!(chart.layout.annotations[0].extra["bgcolor"], "red");

        let value = chart.to_value().unwrap();
        assert_eq!(value["layout"]["hovermode"], "closest");
        assert_eq!(value["layout"]["xaxis"]["tickfont"]["size"], 10);
        assert_eq!(ChartSpec::from_json(&chart.to_json().unwrap()).unwrap(), chart);
    }

    #[test]
    fn test_from_json_rejects_unknown_trace() {
        let source = r#"{"data": [{"type": "pie"}], "layout": {}}"#;
        assert!(ChartSpec::from_json(source).is_err());
    }
}
