use anyhow::{anyhow, Result};
use serde_json::Value;

/// Cell value used to mark a missing entry. Rows whose grouping keys are
/// missing are dropped by the grouping step.
pub const MISSING: &str = "";

/// An in-memory tabular dataset: a header row plus string-valued data rows.
/// Read-only once constructed; the renderer never mutates it.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Create a Dataset from a JSON array of objects. Fields absent from a
    /// record (or explicitly null) become missing values.
    pub fn from_json(value: &Value) -> Result<Self> {
        let array = value
            .as_array()
            .ok_or_else(|| anyhow!("Input data must be a JSON array of objects"))?;

        if array.is_empty() {
            return Err(anyhow!("Input data array is empty"));
        }

        let first_obj = array[0]
            .as_object()
            .ok_or_else(|| anyhow!("Items in array must be objects"))?;
        let headers: Vec<String> = first_obj.keys().cloned().collect();

        let mut rows = Vec::new();
        for item in array {
            let obj = item
                .as_object()
                .ok_or_else(|| anyhow!("Items in array must be objects"))?;

            let mut row = Vec::new();
            for header in &headers {
                let cell = match obj.get(header) {
                    Some(Value::String(s)) => s.clone(),
                    Some(Value::Number(n)) => n.to_string(),
                    Some(Value::Bool(b)) => b.to_string(),
                    Some(Value::Null) | None => MISSING.to_string(),
                    _ => return Err(anyhow!("Unsupported value type for field '{}'", header)),
                };
                row.push(cell);
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Case-insensitive header lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Like `column_index` but fails with a missing-column error.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| anyhow!("Column '{}' not found", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_basic() {
        let value = json!([
            {"Ano": 2020, "C_IFDM": "Alto"},
            {"Ano": 2021, "C_IFDM": "Baixo"}
        ]);
        let data = Dataset::from_json(&value).unwrap();
        assert_eq!(data.headers, vec!["Ano", "C_IFDM"]);
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0], vec!["2020", "Alto"]);
    }

    #[test]
    fn test_from_json_null_becomes_missing() {
        let value = json!([
            {"Ano": 2020, "C_IFDM": null},
            {"Ano": 2021}
        ]);
        let data = Dataset::from_json(&value).unwrap();
        assert_eq!(data.rows[0][1], MISSING);
        assert_eq!(data.rows[1][1], MISSING);
    }

    #[test]
    fn test_from_json_not_an_array() {
        let value = json!({"Ano": 2020});
        assert!(Dataset::from_json(&value).is_err());
    }

    #[test]
    fn test_column_index_case_insensitive() {
        let data = Dataset::new(vec!["Ano".to_string(), "C_IFDM".to_string()], vec![]);
        assert_eq!(data.column_index("ano"), Some(0));
        assert_eq!(data.column_index("c_ifdm"), Some(1));
        assert_eq!(data.column_index("Regiao"), None);
    }

    #[test]
    fn test_require_column_missing() {
        let data = Dataset::new(vec!["Ano".to_string()], vec![]);
        let err = data.require_column("C_IFDM").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
