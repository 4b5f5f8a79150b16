//! Table file format.
//!
//! A table file is a JSON array. The first record is the schema header, a
//! list of `[column_name, type]` pairs with type `"int"` or `"str"`. Every
//! following record is a data row with one value per header column. Column
//! names may repeat; a reference to a repeated name is ambiguous.
//!
//! ```json
//! [
//!   [["id", "int"], ["label", "str"]],
//!   [1, "a"],
//!   [2, "b"]
//! ]
//! ```

use rq_core::{ColumnName, ColumnType, Relation, Row, TableName, Value};
use serde_json::Value as JsonValue;

/// A decoded table file, not yet bound to a table name.
#[derive(Debug, Clone, PartialEq)]
pub struct TableFile {
    pub schema: Vec<(ColumnName, ColumnType)>,
    pub rows: Vec<Row>,
}

impl TableFile {
    /// Decode table file text. Errors are human-readable descriptions.
    pub fn parse(content: &str) -> Result<Self, String> {
        let records: Vec<JsonValue> =
            serde_json::from_str(content).map_err(|e| format!("not a JSON array: {e}"))?;
        let mut records = records.into_iter();
        let header = records
            .next()
            .ok_or_else(|| "missing schema header".to_string())?;
        let schema = parse_header(header)?;
        let rows = records
            .enumerate()
            .map(|(index, record)| parse_row(&schema, index, record))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { schema, rows })
    }

    /// Build the relation for this table, qualified with `name`.
    pub fn into_relation(self, name: &TableName) -> rq_core::CoreResult<Relation> {
        Relation::from_schema(name, self.schema, self.rows)
    }
}

fn parse_header(header: JsonValue) -> Result<Vec<(ColumnName, ColumnType)>, String> {
    let pairs: Vec<(String, String)> = serde_json::from_value(header)
        .map_err(|e| format!("schema header must be a list of [name, type] pairs: {e}"))?;
    let mut schema = Vec::with_capacity(pairs.len());
    for (name, token) in pairs {
        let column_type = ColumnType::from_token(&token)
            .ok_or_else(|| format!("column:{name} has unsupported type:{token} (expected int or str)"))?;
        let name = ColumnName::try_new(name)
            .ok_or_else(|| "schema header contains an empty column name".to_string())?;
        schema.push((name, column_type));
    }
    Ok(schema)
}

fn parse_row(
    schema: &[(ColumnName, ColumnType)],
    index: usize,
    record: JsonValue,
) -> Result<Row, String> {
    let JsonValue::Array(cells) = record else {
        return Err(format!("row {index} is not a list"));
    };
    if cells.len() != schema.len() {
        return Err(format!(
            "row {index} has {} values but the header declares {} columns",
            cells.len(),
            schema.len()
        ));
    }
    let values = schema
        .iter()
        .zip(cells)
        .map(|((name, column_type), cell)| match (column_type, cell) {
            (ColumnType::Int, JsonValue::Number(n)) => n
                .as_i64()
                .map(Value::Int)
                .ok_or_else(|| format!("row {index} column:{name}: {n} is not a 64-bit integer")),
            (ColumnType::Str, JsonValue::String(s)) => Ok(Value::Str(s)),
            (column_type, cell) => Err(format!(
                "row {index} column:{name}: expected {column_type}, found {cell}"
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Row::new(values))
}

#[cfg(test)]
#[path = "table_file_test.rs"]
mod tests;
