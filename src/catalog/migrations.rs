use rusqlite::Connection;

use super::CatalogError;

struct Migration {
    version: i64,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: r#"
CREATE TABLE models (
    id                TEXT PRIMARY KEY,
    name              TEXT NOT NULL UNIQUE,
    category          TEXT,
    description       TEXT NOT NULL,
    features_json     TEXT NOT NULL DEFAULT '[]',
    pros_json         TEXT NOT NULL DEFAULT '[]',
    cons_json         TEXT NOT NULL DEFAULT '[]',
    use_cases_json    TEXT NOT NULL DEFAULT '[]',
    alternatives_json TEXT NOT NULL DEFAULT '[]',
    pricing_json      TEXT NOT NULL DEFAULT '{}',
    source_date       TEXT,
    created_at        TEXT NOT NULL,
    updated_at        TEXT NOT NULL
);
"#,
    },
    Migration {
        version: 2,
        sql: r#"
CREATE INDEX idx_models_category ON models(category, updated_at);
CREATE INDEX idx_models_updated ON models(updated_at);
"#,
    },
];

pub(super) fn run_migrations(conn: &Connection) -> Result<(), CatalogError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS _migrations (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL
        );",
    )?;

    let applied: Vec<i64> = {
        let mut stmt = conn.prepare("SELECT version FROM _migrations ORDER BY version")?;
        let result = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        result
    };

    for migration in MIGRATIONS {
        if applied.contains(&migration.version) {
            continue;
        }

        tracing::info!("applying migration v{}", migration.version);

        let tx = conn.unchecked_transaction()?;
        tx.execute_batch(migration.sql)
            .map_err(|e| CatalogError::Migration(format!("v{}: {e}", migration.version)))?;
        tx.execute(
            "INSERT INTO _migrations (version, applied_at) VALUES (?1, datetime('now'))",
            rusqlite::params![migration.version],
        )?;
        tx.commit()?;
    }

    Ok(())
}
