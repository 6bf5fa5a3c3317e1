use rusqlite::params;
use serde::Serialize;
use uuid::Uuid;

use super::{CatalogError, Database};
use crate::draft::{ModelInfoDraft, Pricing};

// ---------------------------------------------------------------------------
// Row type — flat struct that maps directly to table columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ModelRow {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub description: String,
    pub features_json: String,
    pub pros_json: String,
    pub cons_json: String,
    pub use_cases_json: String,
    pub alternatives_json: String,
    pub pricing_json: String,
    pub source_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl ModelRow {
    /// Build a fresh row from a draft. `name` falls back to the draft's own
    /// name field when the caller passes an empty string.
    pub fn from_draft(name: &str, draft: &ModelInfoDraft) -> Result<Self, CatalogError> {
        let now = chrono::Utc::now().to_rfc3339();
        let name = if name.is_empty() {
            draft.name.clone().unwrap_or_default()
        } else {
            name.to_string()
        };
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            category: draft.category.clone(),
            description: draft.description.clone(),
            features_json: serde_json::to_string(&draft.features)?,
            pros_json: serde_json::to_string(&draft.pros)?,
            cons_json: serde_json::to_string(&draft.cons)?,
            use_cases_json: serde_json::to_string(&draft.use_cases)?,
            alternatives_json: serde_json::to_string(&draft.alternatives)?,
            pricing_json: serde_json::to_string(&draft.pricing)?,
            source_date: draft.source_date.clone(),
            created_at: now.clone(),
            updated_at: now,
        })
    }

    pub fn to_draft(&self) -> Result<ModelInfoDraft, CatalogError> {
        Ok(ModelInfoDraft {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            category: self.category.clone(),
            features: serde_json::from_str(&self.features_json)?,
            pros: serde_json::from_str(&self.pros_json)?,
            cons: serde_json::from_str(&self.cons_json)?,
            use_cases: serde_json::from_str(&self.use_cases_json)?,
            alternatives: serde_json::from_str(&self.alternatives_json)?,
            pricing: serde_json::from_str::<Pricing>(&self.pricing_json)?,
            source_date: self.source_date.clone(),
        })
    }
}

const MODEL_COLUMNS: &str = "id, name, category, description, features_json, pros_json, \
     cons_json, use_cases_json, alternatives_json, pricing_json, source_date, \
     created_at, updated_at";

fn row_to_model(row: &rusqlite::Row<'_>) -> rusqlite::Result<ModelRow> {
    Ok(ModelRow {
        id: row.get(0)?,
        name: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        features_json: row.get(4)?,
        pros_json: row.get(5)?,
        cons_json: row.get(6)?,
        use_cases_json: row.get(7)?,
        alternatives_json: row.get(8)?,
        pricing_json: row.get(9)?,
        source_date: row.get(10)?,
        created_at: row.get(11)?,
        updated_at: row.get(12)?,
    })
}

// ---------------------------------------------------------------------------
// Model queries
// ---------------------------------------------------------------------------

pub fn insert_model(db: &Database, row: &ModelRow) -> Result<(), CatalogError> {
    let conn = db.conn();
    conn.execute(
        "INSERT INTO models (id, name, category, description, features_json, pros_json, \
         cons_json, use_cases_json, alternatives_json, pricing_json, source_date, \
         created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            row.id,
            row.name,
            row.category,
            row.description,
            row.features_json,
            row.pros_json,
            row.cons_json,
            row.use_cases_json,
            row.alternatives_json,
            row.pricing_json,
            row.source_date,
            row.created_at,
            row.updated_at
        ],
    )?;
    Ok(())
}

pub fn get_model(db: &Database, id: &str) -> Result<Option<ModelRow>, CatalogError> {
    let conn = db.conn();
    let mut stmt = conn.prepare(&format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = ?1"))?;
    let mut rows = stmt.query_map(params![id], row_to_model)?;
    rows.next().transpose().map_err(CatalogError::from)
}

pub fn get_model_by_name(db: &Database, name: &str) -> Result<Option<ModelRow>, CatalogError> {
    let conn = db.conn();
    let mut stmt = conn.prepare(&format!(
        "SELECT {MODEL_COLUMNS} FROM models WHERE name = ?1"
    ))?;
    let mut rows = stmt.query_map(params![name], row_to_model)?;
    rows.next().transpose().map_err(CatalogError::from)
}

pub fn list_models(db: &Database) -> Result<Vec<ModelRow>, CatalogError> {
    let conn = db.conn();
    let mut stmt = conn.prepare(&format!(
        "SELECT {MODEL_COLUMNS} FROM models ORDER BY updated_at DESC"
    ))?;
    let rows = stmt
        .query_map([], row_to_model)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn list_models_by_category(
    db: &Database,
    category: &str,
) -> Result<Vec<ModelRow>, CatalogError> {
    let conn = db.conn();
    let mut stmt = conn.prepare(&format!(
        "SELECT {MODEL_COLUMNS} FROM models WHERE category = ?1 ORDER BY updated_at DESC"
    ))?;
    let rows = stmt
        .query_map(params![category], row_to_model)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Overwrite the content columns of an existing record; `id` and
/// `created_at` are preserved.
pub fn update_model(db: &Database, row: &ModelRow) -> Result<(), CatalogError> {
    let conn = db.conn();
    let changed = conn.execute(
        "UPDATE models SET name = ?2, category = ?3, description = ?4, features_json = ?5, \
         pros_json = ?6, cons_json = ?7, use_cases_json = ?8, alternatives_json = ?9, \
         pricing_json = ?10, source_date = ?11, updated_at = ?12 WHERE id = ?1",
        params![
            row.id,
            row.name,
            row.category,
            row.description,
            row.features_json,
            row.pros_json,
            row.cons_json,
            row.use_cases_json,
            row.alternatives_json,
            row.pricing_json,
            row.source_date,
            chrono::Utc::now().to_rfc3339()
        ],
    )?;
    if changed == 0 {
        return Err(CatalogError::NotFound(format!("model {}", row.id)));
    }
    Ok(())
}

pub fn delete_model(db: &Database, id: &str) -> Result<(), CatalogError> {
    let conn = db.conn();
    let changed = conn.execute("DELETE FROM models WHERE id = ?1", params![id])?;
    if changed == 0 {
        return Err(CatalogError::NotFound(format!("model {id}")));
    }
    Ok(())
}

/// Create or update the record for `name` from a generated draft. Returns
/// the stored row. Updates keep the original id and created_at.
pub fn upsert_draft(
    db: &Database,
    name: &str,
    draft: &ModelInfoDraft,
) -> Result<ModelRow, CatalogError> {
    let mut row = ModelRow::from_draft(name, draft)?;
    match get_model_by_name(db, &row.name)? {
        Some(existing) => {
            row.id = existing.id;
            row.created_at = existing.created_at;
            update_model(db, &row)?;
        }
        None => insert_model(db, &row)?,
    }
    // Re-read so updated_at reflects what was stored.
    get_model(db, &row.id)?.ok_or_else(|| CatalogError::NotFound(format!("model {}", row.id)))
}
