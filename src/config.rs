use serde::{Deserialize, Serialize};

pub const CUSTOM_LINKS_KEY: &str = "quicklinks-custom";
pub const CUSTOM_ORDER_KEY: &str = "quicklinks-custom-order";
pub const COMPANY_ORDER_KEY: &str = "quicklinks-company-order";
pub const LAYOUT_KEY: &str = "quicklinks-layout";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresentationMode {
    #[default]
    List,
    Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ColumnCount {
    #[default]
    One,
    Two,
    Three,
}

impl ColumnCount {
    pub const ALL: [ColumnCount; 3] = [ColumnCount::One, ColumnCount::Two, ColumnCount::Three];

    pub fn get(self) -> usize {
        u8::from(self) as usize
    }
}

#[derive(Debug, thiserror::Error)]
#[error("column count must be 1, 2 or 3, got {0}")]
pub struct InvalidColumnCount(pub u8);

impl TryFrom<u8> for ColumnCount {
    type Error = InvalidColumnCount;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ColumnCount::One),
            2 => Ok(ColumnCount::Two),
            3 => Ok(ColumnCount::Three),
            other => Err(InvalidColumnCount(other)),
        }
    }
}

impl From<ColumnCount> for u8 {
    fn from(value: ColumnCount) -> Self {
        match value {
            ColumnCount::One => 1,
            ColumnCount::Two => 2,
            ColumnCount::Three => 3,
        }
    }
}

/// How the host lays out the link lists. Opaque to the ordering core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutPreference {
    #[serde(rename = "viewMode", default)]
    pub presentation_mode: PresentationMode,
    #[serde(rename = "columns", default)]
    pub column_count: ColumnCount,
}

impl LayoutPreference {
    /// Columns actually used; list mode always renders one.
    pub fn effective_columns(&self) -> usize {
        match self.presentation_mode {
            PresentationMode::List => 1,
            PresentationMode::Grid => self.column_count.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_uses_host_field_names() {
        let layout = LayoutPreference {
            presentation_mode: PresentationMode::Grid,
            column_count: ColumnCount::Three,
        };
        let json = serde_json::to_string(&layout).unwrap();
        assert_eq!(json, r#"{"viewMode":"grid","columns":3}"#);
    }

    #[test]
    fn default_layout_is_single_column_list() {
        let layout = LayoutPreference::default();
        assert_eq!(layout.presentation_mode, PresentationMode::List);
        assert_eq!(layout.column_count, ColumnCount::One);
        assert_eq!(layout.effective_columns(), 1);
    }

    #[test]
    fn out_of_range_columns_are_rejected() {
        assert!(serde_json::from_str::<LayoutPreference>(r#"{"viewMode":"grid","columns":4}"#).is_err());
        assert!(serde_json::from_str::<LayoutPreference>(r#"{"viewMode":"tiles","columns":1}"#).is_err());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let layout: LayoutPreference = serde_json::from_str(r#"{"columns":2}"#).unwrap();
        assert_eq!(layout.presentation_mode, PresentationMode::List);
        assert_eq!(layout.column_count, ColumnCount::Two);
        assert_eq!(layout.effective_columns(), 1);
    }
}
