// NOTE: keep operations minimal and async to avoid blocking request paths.

use anyhow::Result;
use nyaya_db::SqlitePool;

pub mod laws {
    use super::*;
    use sqlx::Row;

    /// Law fields as accepted from the admin surface and the seed tool.
    #[derive(Debug, Clone, Default)]
    pub struct NewLaw {
        pub title: String,
        pub section: Option<String>,
        pub act: Option<String>,
        pub text: Option<String>,
        pub summary_en: Option<String>,
        pub summary_hi: Option<String>,
        pub summary_mr: Option<String>,
    }

    /// Law row as stored.
    #[derive(Debug, Clone)]
    pub struct LawRecord {
        pub id: i64,
        pub title: String,
        pub section: Option<String>,
        pub act: Option<String>,
        pub text: Option<String>,
        pub summary_en: Option<String>,
        pub summary_hi: Option<String>,
        pub summary_mr: Option<String>,
    }

    fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<LawRecord> {
        Ok(LawRecord {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            section: row.try_get("section")?,
            act: row.try_get("act")?,
            text: row.try_get("text")?,
            summary_en: row.try_get("summary_en")?,
            summary_hi: row.try_get("summary_hi")?,
            summary_mr: row.try_get("summary_mr")?,
        })
    }

    // Insert a law and return its id.
    pub async fn insert_law(pool: &SqlitePool, law: &NewLaw) -> Result<i64> {
        let title = law.title.trim();
        if title.is_empty() {
            anyhow::bail!("empty title");
        }
        let row = sqlx::query(
            "INSERT INTO laws (title, section, act, text, summary_en, summary_hi, summary_mr)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(title)
        .bind(&law.section)
        .bind(&law.act)
        .bind(&law.text)
        .bind(&law.summary_en)
        .bind(&law.summary_hi)
        .bind(&law.summary_mr)
        .fetch_one(pool)
        .await?;
        let id: i64 = row.try_get("id")?;
        Ok(id)
    }

    pub async fn get_law(pool: &SqlitePool, id: i64) -> Result<Option<LawRecord>> {
        let row = sqlx::query(
            "SELECT id, title, section, act, text, summary_en, summary_hi, summary_mr
               FROM laws
              WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        match row {
            Some(r) => Ok(Some(row_to_record(&r)?)),
            None => Ok(None),
        }
    }

    // Full corpus in id order, used by the startup reindex.
    pub async fn list_laws(pool: &SqlitePool, limit: i64) -> Result<Vec<LawRecord>> {
        let limit = if limit <= 0 { 0 } else { limit.min(100_000) }; // cap hard to avoid surprise load
        if limit == 0 {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            "SELECT id, title, section, act, text, summary_en, summary_hi, summary_mr
               FROM laws
              ORDER BY id ASC
              LIMIT ?",
        )
        .bind(limit)
        .fetch_all(pool)
        .await?;
        let mut out = Vec::with_capacity(rows.len());
        for r in rows {
            out.push(row_to_record(&r)?);
        }
        Ok(out)
    }

    pub async fn count_laws(pool: &SqlitePool) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM laws")
            .fetch_one(pool)
            .await?;
        let n: i64 = row.try_get("n")?;
        Ok(n)
    }
}
