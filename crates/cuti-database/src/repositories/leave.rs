//! Leave request repository implementation.
//!
//! Every state transition is a single conditional `UPDATE` guarded by the
//! expected current status, so two racing callers cannot both succeed.

use sqlx::PgPool;
use uuid::Uuid;

use cuti_core::error::{AppError, ErrorKind};
use cuti_core::result::AppResult;
use cuti_core::types::pagination::{PageRequest, PageResponse};
use cuti_entity::leave::{
    CreateLeave, LeaveFilter, LeaveRecord, LeaveRequest, LeaveScope, LeaveStatus, UpdateLeave,
};

const RECORD_COLUMNS: &str = "l.id, l.account_username, a.name AS owner_name, \
     a.department_id AS owner_department_id, d.name AS owner_department_name, \
     l.manager_username, l.start_date, l.end_date, l.reason, l.status, \
     l.created_at, l.updated_at";

const RECORD_JOIN: &str = "leave_requests l \
     JOIN accounts a ON a.username = l.account_username \
     JOIN departments d ON d.id = a.department_id";

const SCOPE_PREDICATE: &str = "($1::text IS NULL OR l.account_username = $1) \
     AND ($2::uuid IS NULL OR (a.department_id = $2 \
          AND (l.status <> 'DRAFT' OR l.account_username = $3))) \
     AND ($4::leave_status IS NULL OR l.status = $4)";

/// Repository for leave requests.
#[derive(Debug, Clone)]
pub struct LeaveRepository {
    pool: PgPool,
}

impl LeaveRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new request in DRAFT.
    pub async fn create(&self, data: &CreateLeave) -> AppResult<LeaveRequest> {
        sqlx::query_as::<_, LeaveRequest>(
            "INSERT INTO leave_requests (id, account_username, start_date, end_date, reason, status) \
             VALUES ($1, $2, $3, $4, $5, 'DRAFT') RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.account_username)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.reason)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create leave draft"))
    }

    /// Find a request together with its owner's department.
    pub async fn find_record(&self, id: Uuid) -> AppResult<Option<LeaveRecord>> {
        let sql = format!("SELECT {RECORD_COLUMNS} FROM {RECORD_JOIN} WHERE l.id = $1");
        sqlx::query_as::<_, LeaveRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find leave request", e))
    }

    /// DRAFT -> TERKIRIM for the owner. `None` when no owned draft matched.
    pub async fn submit(&self, id: Uuid, owner: &str) -> AppResult<Option<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>(
            "UPDATE leave_requests SET status = 'TERKIRIM', updated_at = NOW() \
             WHERE id = $1 AND account_username = $2 AND status = 'DRAFT' RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to submit leave draft", e))
    }

    /// TERKIRIM -> `decision`, recording the manager.
    pub async fn verify(
        &self,
        id: Uuid,
        manager: &str,
        decision: LeaveStatus,
    ) -> AppResult<Option<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>(
            "UPDATE leave_requests SET status = $3, manager_username = $2, updated_at = NOW() \
             WHERE id = $1 AND status = 'TERKIRIM' RETURNING *",
        )
        .bind(id)
        .bind(manager)
        .bind(decision)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to verify leave request", e))
    }

    /// Edit an owned draft; absent fields keep their value.
    pub async fn update_draft(
        &self,
        id: Uuid,
        owner: &str,
        data: &UpdateLeave,
    ) -> AppResult<Option<LeaveRequest>> {
        sqlx::query_as::<_, LeaveRequest>(
            "UPDATE leave_requests SET start_date = COALESCE($3, start_date), \
                                       end_date = COALESCE($4, end_date), \
                                       reason = COALESCE($5, reason), \
                                       updated_at = NOW() \
             WHERE id = $1 AND account_username = $2 AND status = 'DRAFT' RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .bind(data.start_date)
        .bind(data.end_date)
        .bind(&data.reason)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update leave draft"))
    }

    /// Delete an owned draft. Returns `false` when nothing matched.
    pub async fn delete_draft(&self, id: Uuid, owner: &str) -> AppResult<bool> {
        let result = sqlx::query(
            "DELETE FROM leave_requests \
             WHERE id = $1 AND account_username = $2 AND status = 'DRAFT'",
        )
        .bind(id)
        .bind(owner)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete leave draft", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Scoped, paginated search, newest first.
    pub async fn search(
        &self,
        filter: &LeaveFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<LeaveRecord>> {
        let (owner, department_id, viewer) = match &filter.scope {
            LeaveScope::Owner(username) => (Some(username.as_str()), None, None),
            LeaveScope::Department {
                department_id,
                viewer,
            } => (None, Some(*department_id), Some(viewer.as_str())),
            LeaveScope::All => (None, None, None),
        };

        let count_sql = format!("SELECT COUNT(*) FROM {RECORD_JOIN} WHERE {SCOPE_PREDICATE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(owner)
            .bind(department_id)
            .bind(viewer)
            .bind(filter.status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count leave requests", e)
            })?;

        let sql = format!(
            "SELECT {RECORD_COLUMNS} FROM {RECORD_JOIN} WHERE {SCOPE_PREDICATE} \
             ORDER BY l.created_at DESC LIMIT $5 OFFSET $6"
        );
        let records = sqlx::query_as::<_, LeaveRecord>(&sql)
            .bind(owner)
            .bind(department_id)
            .bind(viewer)
            .bind(filter.status)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search leave requests", e)
            })?;

        Ok(PageResponse::new(records, page, total as u64))
    }
}

fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("leave_requests_date_range_check") =>
        {
            AppError::validation("Tanggal selesai harus lebih besar atau sama dengan tanggal mulai")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}
