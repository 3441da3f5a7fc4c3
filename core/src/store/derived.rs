//! Store methods for derived summary tables.
//!
//! Derived tables are always replaced whole: drop, create, insert, all in
//! one transaction.

use crate::{
    error::{ReportError, ReportResult},
    table::{is_valid_table_name, CellValue, Column, ColumnKind, DerivedTable},
};
use rusqlite::types::{Value, ValueRef};

use super::SqliteStore;

impl SqliteStore {
    pub(super) fn write_derived_table(&self, name: &str, table: &DerivedTable) -> ReportResult<()> {
        if !is_valid_table_name(name) {
            return Err(ReportError::InvalidTableName { name: name.into() });
        }
        if let Some(bad) = table.columns.iter().find(|c| !is_valid_table_name(&c.name)) {
            return Err(ReportError::InvalidTableName {
                name: format!("{name}.{}", bad.name),
            });
        }

        let write_err = |e| ReportError::write(name, e);
        let column_defs = table
            .columns
            .iter()
            .map(|c| format!("{} {}", c.name, c.kind.sql_type()))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = (1..=table.columns.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");

        let tx = self.conn.unchecked_transaction().map_err(write_err)?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {name}; CREATE TABLE {name} ({column_defs});"
        ))
        .map_err(write_err)?;
        {
            let mut stmt = tx
                .prepare(&format!("INSERT INTO {name} VALUES ({placeholders})"))
                .map_err(write_err)?;
            for row in &table.rows {
                let values: Vec<Value> = row.iter().map(to_sql_value).collect();
                stmt.execute(rusqlite::params_from_iter(values))
                    .map_err(write_err)?;
            }
        }
        tx.commit().map_err(write_err)?;

        log::info!("replaced table '{name}' with {} rows", table.rows.len());
        Ok(())
    }

    /// Read a derived table back with its stored column order and types.
    pub fn fetch_table(&self, name: &str) -> ReportResult<DerivedTable> {
        if !is_valid_table_name(name) {
            return Err(ReportError::InvalidTableName { name: name.into() });
        }

        let mut info = self
            .conn
            .prepare(&format!("PRAGMA table_info({name})"))
            .map_err(ReportError::unavailable)?;
        let columns = info
            .query_map([], |row| {
                let col_name: String = row.get(1)?;
                let decl: String = row.get(2)?;
                Ok(Column {
                    name: col_name,
                    kind: ColumnKind::from_sql_type(&decl),
                })
            })
            .map_err(ReportError::unavailable)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(ReportError::unavailable)?;

        let mut stmt = self
            .conn
            .prepare(&format!("SELECT * FROM {name} ORDER BY rowid ASC"))
            .map_err(ReportError::unavailable)?;
        let width = columns.len();
        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|i| row.get_ref(i).map(from_sql_value))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })
            .map_err(ReportError::unavailable)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(ReportError::unavailable)?;

        Ok(DerivedTable { columns, rows })
    }
}

fn to_sql_value(cell: &CellValue) -> Value {
    match cell {
        CellValue::Null => Value::Null,
        CellValue::Integer(v) => Value::Integer(*v),
        CellValue::Real(v) => Value::Real(*v),
        CellValue::Text(v) => Value::Text(v.clone()),
    }
}

fn from_sql_value(value: ValueRef<'_>) -> CellValue {
    match value {
        ValueRef::Null => CellValue::Null,
        ValueRef::Integer(v) => CellValue::Integer(v),
        ValueRef::Real(v) => CellValue::Real(v),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            CellValue::Text(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
