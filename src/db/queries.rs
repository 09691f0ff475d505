use crate::errors::AppResult;
use crate::export::model::JoinedInstanceRow;
use rusqlite::{Connection, Row};

const JOINED_INSTANCES_SQL: &str = r#"
    SELECT instances.id     AS instance_id,
           instances.task_id AS task_id,
           instances.start  AS start,
           instances."end"  AS "end",
           tasks.name       AS task_name
    FROM instances
    INNER JOIN tasks ON instances.task_id = tasks.id
    ORDER BY instances.id ASC"#;

/// Every instance joined with the name of its task.
pub fn load_joined_instances(conn: &Connection) -> AppResult<Vec<JoinedInstanceRow>> {
    let mut stmt = conn.prepare(JOINED_INSTANCES_SQL)?;
    let rows = stmt.query_map([], map_joined_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Mapping DB → JoinedInstanceRow, by column name.
fn map_joined_row(row: &Row<'_>) -> rusqlite::Result<JoinedInstanceRow> {
    Ok(JoinedInstanceRow {
        instance_id: row.get("instance_id")?,
        task_id: row.get("task_id")?,
        start: row.get("start")?,
        end: row.get("end")?,
        task_name: row.get("task_name")?,
    })
}
