use indexmap::IndexMap;
use prettytable::{format::FormatBuilder, row, Cell, Row, Table};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output format.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub(crate) enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// JSON.
    Json,
}

/// Options for rendering a list as a table.
#[derive(Debug, Clone, Default)]
pub(crate) struct DisplayOptions {
    /// Columns to show, keyed by JSON pointer, with their titles.
    projection: IndexMap<String, String>,
}

impl DisplayOptions {
    /// Show only the given `(pointer, title)` columns.
    pub(crate) fn table_projection(
        columns: impl IntoIterator<Item = (impl ToString, impl ToString)>,
    ) -> Self {
        Self {
            projection: columns
                .into_iter()
                .map(|(key, title)| (key.to_string(), title.to_string()))
                .collect(),
        }
    }
}

impl OutputFormat {
    /// Render a list of items.
    pub(crate) fn display_many(
        &self,
        items: impl IntoIterator<Item = impl Serialize>,
        options: DisplayOptions,
    ) -> eyre::Result<String> {
        let items = items
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(&items)?),
            Self::Text => {
                if items.is_empty() {
                    return Ok("(empty)".to_string());
                }
                let mut table = Table::new();
                table.set_format(FormatBuilder::new().padding(0, 2).build());
                table.set_titles(Row::new(
                    options
                        .projection
                        .values()
                        .map(|title| Cell::new(title))
                        .collect(),
                ));
                for item in &items {
                    table.add_row(Row::new(
                        options
                            .projection
                            .keys()
                            .map(|pointer| Cell::new(&display_scalar(item.pointer(pointer))))
                            .collect(),
                    ));
                }
                Ok(table.to_string())
            }
        }
    }

    /// Render a single value. Nested objects are flattened into
    /// `a.b`-style keys in text mode.
    pub(crate) fn display_value(&self, value: impl Serialize) -> eyre::Result<String> {
        let value = serde_json::to_value(value)?;
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(&value)?),
            Self::Text => {
                let mut fields = Map::new();
                flatten("", &value, &mut fields);
                let mut table = Table::new();
                table.set_format(FormatBuilder::new().padding(0, 2).build());
                for (key, value) in fields {
                    table.add_row(row![key, display_scalar(Some(&value))]);
                }
                Ok(table.to_string())
            }
        }
    }
}

fn display_scalar(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(value) => value.to_string(),
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Map<String, Value>) {
    match value {
        Value::Object(map) if !map.is_empty() => {
            for (key, value) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&key, value, out);
            }
        }
        value => {
            out.insert(prefix.to_string(), value.clone());
        }
    }
}
