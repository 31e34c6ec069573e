//! Item repository: inserts, counts, and the filtered `find_many` read.

use chrono::SecondsFormat;

use cerebro_core::entities::{Audio, FileItem, Link, Note, Photo, SearchableItem, Video};
use cerebro_core::enums::{ItemField, ItemKind, ItemStatus};
use cerebro_core::store::{Contains, FindQuery, ItemStore, SortOrder};
use cerebro_core::text::normalize;

use crate::CerebroDb;
use crate::error::DatabaseError;
use crate::helpers::{escape_like, get_opt_string, kind_to_table, parse_datetime, parse_enum};

/// Columns every item table shares, read first so per-kind columns start at [`OWN_START`].
const COMMON_COLUMNS: [&str; 6] = [
    "id",
    "status",
    "processed_path",
    "topic",
    "ai_data",
    "created_at",
];
const OWN_START: i32 = 6;

struct CommonRow {
    id: String,
    status: ItemStatus,
    processed_path: Option<String>,
    topic: Option<String>,
    enrichment: Option<String>,
    created_at: chrono::DateTime<chrono::Utc>,
}

fn read_common(row: &libsql::Row) -> Result<CommonRow, DatabaseError> {
    Ok(CommonRow {
        id: row.get::<String>(0)?,
        status: parse_enum(&row.get::<String>(1)?)?,
        processed_path: get_opt_string(row, 2)?,
        topic: get_opt_string(row, 3)?,
        enrichment: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

/// Column list for `kind`: the shared columns, then the kind's own text columns
/// in [`ItemKind::text_fields`] order.
fn select_columns(kind: ItemKind) -> String {
    COMMON_COLUMNS
        .iter()
        .copied()
        .chain(kind.text_fields().iter().map(|f| f.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn row_to_item(kind: ItemKind, row: &libsql::Row) -> Result<SearchableItem, DatabaseError> {
    let c = read_common(row)?;
    let own = OWN_START;
    let item = match kind {
        ItemKind::Note => SearchableItem::Note(Note {
            id: c.id,
            content: row.get::<String>(own)?,
            status: c.status,
            processed_path: c.processed_path,
            topic: c.topic,
            enrichment: c.enrichment,
            created_at: c.created_at,
        }),
        ItemKind::Link => SearchableItem::Link(Link {
            id: c.id,
            url: row.get::<String>(own)?,
            title: get_opt_string(row, own + 1)?,
            metadata: get_opt_string(row, own + 2)?,
            status: c.status,
            processed_path: c.processed_path,
            topic: c.topic,
            enrichment: c.enrichment,
            created_at: c.created_at,
        }),
        ItemKind::File => SearchableItem::File(FileItem {
            id: c.id,
            filename: row.get::<String>(own)?,
            file_path: row.get::<String>(own + 1)?,
            status: c.status,
            processed_path: c.processed_path,
            topic: c.topic,
            enrichment: c.enrichment,
            created_at: c.created_at,
        }),
        ItemKind::Photo => SearchableItem::Photo(Photo {
            id: c.id,
            filename: row.get::<String>(own)?,
            file_path: row.get::<String>(own + 1)?,
            status: c.status,
            processed_path: c.processed_path,
            topic: c.topic,
            enrichment: c.enrichment,
            created_at: c.created_at,
        }),
        ItemKind::Audio => SearchableItem::Audio(Audio {
            id: c.id,
            file_path: row.get::<String>(own)?,
            transcription: get_opt_string(row, own + 1)?,
            status: c.status,
            processed_path: c.processed_path,
            topic: c.topic,
            enrichment: c.enrichment,
            created_at: c.created_at,
        }),
        ItemKind::Video => SearchableItem::Video(Video {
            id: c.id,
            title: get_opt_string(row, own)?,
            file_path: row.get::<String>(own + 1)?,
            status: c.status,
            processed_path: c.processed_path,
            topic: c.topic,
            enrichment: c.enrichment,
            created_at: c.created_at,
        }),
    };
    Ok(item)
}

/// Fields with a `<column>_folded` twin: the kind's own text columns, then the
/// enrichment payload.
fn searchable_fields(kind: ItemKind) -> impl Iterator<Item = ItemField> {
    kind.text_fields()
        .iter()
        .copied()
        .chain(std::iter::once(ItemField::Enrichment))
}

fn folded_column(field: ItemField) -> String {
    format!("{}_folded", field.as_str())
}

/// Folded copies of every searchable field, in [`searchable_fields`] order.
fn folded_values(item: &SearchableItem) -> Vec<libsql::Value> {
    searchable_fields(item.kind())
        .map(|field| item.field_text(field).map(normalize).into())
        .collect()
}

/// Values for the kind's own columns, in [`ItemKind::text_fields`] order.
fn own_values(item: &SearchableItem) -> Vec<libsql::Value> {
    match item {
        SearchableItem::Note(n) => vec![n.content.as_str().into()],
        SearchableItem::Link(l) => vec![
            l.url.as_str().into(),
            l.title.as_deref().into(),
            l.metadata.as_deref().into(),
        ],
        SearchableItem::File(FileItem {
            filename,
            file_path,
            ..
        })
        | SearchableItem::Photo(Photo {
            filename,
            file_path,
            ..
        }) => vec![filename.as_str().into(), file_path.as_str().into()],
        SearchableItem::Audio(a) => vec![
            a.file_path.as_str().into(),
            a.transcription.as_deref().into(),
        ],
        SearchableItem::Video(v) => vec![v.title.as_deref().into(), v.file_path.as_str().into()],
    }
}

/// A containment clause is only valid on the enrichment column or one of the
/// kind's own text columns.
fn clause_applies(kind: ItemKind, clause: &Contains) -> bool {
    clause.field == ItemField::Enrichment || kind.text_fields().contains(&clause.field)
}

impl CerebroDb {
    /// Insert an item into its kind's table.
    ///
    /// Returns `false` when an item with the same id already exists; the
    /// stored row is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails.
    pub async fn insert_item(&self, item: &SearchableItem) -> Result<bool, DatabaseError> {
        let kind = item.kind();
        let folded = searchable_fields(kind).map(folded_column).collect::<Vec<_>>();
        let columns = format!("{}, {}", select_columns(kind), folded.join(", "));
        let column_count = COMMON_COLUMNS.len() + kind.text_fields().len() + folded.len();
        let placeholders = (1..=column_count)
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT OR IGNORE INTO {} ({columns}) VALUES ({placeholders})",
            kind_to_table(kind)
        );

        let mut params: Vec<libsql::Value> = vec![
            item.id().into(),
            item.status().as_str().into(),
            item.processed_path().into(),
            item.topic().into(),
            item.enrichment().into(),
            item.created_at()
                .to_rfc3339_opts(SecondsFormat::Micros, true)
                .into(),
        ];
        params.extend(own_values(item));
        params.extend(folded_values(item));

        let changed = self
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;
        Ok(changed > 0)
    }

    /// Count items of `kind`, optionally restricted to one status.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_items(
        &self,
        kind: ItemKind,
        status: Option<ItemStatus>,
    ) -> Result<u64, DatabaseError> {
        let table = kind_to_table(kind);
        let mut rows = match status {
            Some(status) => {
                self.conn()
                    .query(
                        &format!("SELECT COUNT(*) FROM {table} WHERE status = ?1"),
                        [status.as_str()],
                    )
                    .await?
            }
            None => {
                self.conn()
                    .query(&format!("SELECT COUNT(*) FROM {table}"), ())
                    .await?
            }
        };
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let count = row.get::<i64>(0)?;
        u64::try_from(count).map_err(|e| DatabaseError::Query(format!("negative count: {e}")))
    }

    /// Run a [`FindQuery`] against the kind's table.
    ///
    /// Containment runs against each column's `_folded` twin with a folded
    /// needle, so it ignores case and diacritics. Wildcards in the needle are
    /// escaped; needles that fold to nothing are dropped.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row cannot be parsed.
    pub async fn find_items(&self, query: &FindQuery) -> Result<Vec<SearchableItem>, DatabaseError> {
        let kind = query.kind;
        let mut sql = format!(
            "SELECT {} FROM {} WHERE status = ?1",
            select_columns(kind),
            kind_to_table(kind)
        );
        let mut params: Vec<libsql::Value> = vec![query.status.as_str().into()];

        if query.is_filtered() {
            let mut clauses = Vec::with_capacity(query.any_of.len());
            for clause in query.any_of.iter().filter(|c| clause_applies(kind, c)) {
                let needle = normalize(&clause.needle);
                if needle.is_empty() {
                    continue;
                }
                params.push(format!("%{}%", escape_like(&needle)).into());
                clauses.push(format!(
                    "{} LIKE ?{} ESCAPE '\\'",
                    folded_column(clause.field),
                    params.len()
                ));
            }
            if clauses.is_empty() {
                tracing::debug!(%kind, "no containment clause applies to this kind");
                return Ok(Vec::new());
            }
            sql.push_str(&format!(" AND ({})", clauses.join(" OR ")));
        }

        match query.order {
            SortOrder::CreatedDesc => sql.push_str(" ORDER BY created_at DESC, rowid DESC"),
        }
        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let mut rows = self
            .conn()
            .query(&sql, libsql::params_from_iter(params))
            .await?;
        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(kind, &row)?);
        }
        tracing::debug!(%kind, found = items.len(), filtered = query.is_filtered(), "find_items");
        Ok(items)
    }
}

impl ItemStore for CerebroDb {
    type Error = DatabaseError;

    async fn find_many(&self, query: &FindQuery) -> Result<Vec<SearchableItem>, Self::Error> {
        self.find_items(query).await
    }
}
