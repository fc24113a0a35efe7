//! Item template for JSON records.
//!
//! List layout puts a record on one line: the title, then the remaining
//! top-level fields. Grid layout gives the title its own line and one line
//! per field below it.

use crate::model::{FieldPath, Layout, Record};
use crate::view::styles::ViewStyles;
use ratatui::text::{Line, Span, Text};
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Separator between fields on a list line.
const FIELD_SEPARATOR: &str = "  ";

/// Display columns a field value may take before it is cut.
pub const MAX_VALUE_WIDTH: usize = 40;

/// Marker appended to cut values.
const ELLIPSIS: char = '…';

/// Renders records for the data view.
#[derive(Debug, Clone)]
pub struct ItemRenderer {
    title_field: Option<FieldPath>,
    styles: ViewStyles,
}

impl ItemRenderer {
    /// Create a renderer. `title_field` picks the value shown as the title.
    pub fn new(title_field: Option<FieldPath>, styles: ViewStyles) -> Self {
        Self {
            title_field,
            styles,
        }
    }

    /// Render one record for `layout`.
    pub fn render(&self, record: &Value, layout: Layout) -> Text<'static> {
        let title = self.title(record);
        let fields = self.fields(record);

        match layout {
            Layout::List => {
                let mut spans = Vec::new();
                if let Some(title) = title {
                    spans.push(Span::styled(title, self.styles.title));
                }
                for (key, value) in fields {
                    if !spans.is_empty() {
                        spans.push(Span::raw(FIELD_SEPARATOR));
                    }
                    spans.extend(self.field_spans(key, value));
                }
                Text::from(Line::from(spans))
            }
            Layout::Grid => {
                let mut lines = Vec::new();
                if let Some(title) = title {
                    lines.push(Line::from(Span::styled(title, self.styles.title)));
                }
                lines.extend(
                    fields
                        .into_iter()
                        .map(|(key, value)| Line::from(self.field_spans(key, value))),
                );
                Text::from(lines)
            }
        }
    }

    /// Turn the renderer into a data view item template.
    pub fn into_template(self) -> impl Fn(&Value, Layout) -> Text<'static> {
        move |record, layout| self.render(record, layout)
    }

    fn title(&self, record: &Value) -> Option<String> {
        let path = self.title_field.as_ref()?;
        record.resolve_key(path)
    }

    /// Fields shown besides the title. Non-object records show as one
    /// unnamed field.
    fn fields<'v>(&self, record: &'v Value) -> Vec<(Option<&'v str>, &'v Value)> {
        match record {
            Value::Object(map) => map
                .iter()
                .filter(|(key, _)| !self.is_title_key(key))
                .map(|(key, value)| (Some(key.as_str()), value))
                .collect(),
            other => vec![(None, other)],
        }
    }

    fn is_title_key(&self, key: &str) -> bool {
        self.title_field
            .as_ref()
            .is_some_and(|path| path.as_str() == key)
    }

    fn field_spans(&self, key: Option<&str>, value: &Value) -> Vec<Span<'static>> {
        let value = Span::raw(truncate_to_width(&display_value(value), MAX_VALUE_WIDTH));
        match key {
            Some(key) => vec![Span::styled(format!("{key}: "), self.styles.muted), value],
            None => vec![value],
        }
    }
}

/// Plain text for a JSON value. Strings lose their quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Cut `text` to at most `max_width` display columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let budget = max_width.saturating_sub(1);
    let mut cut = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        cut.push(ch);
        width += ch_width;
    }
    cut.push(ELLIPSIS);
    cut
}
