//! Department repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use cuti_core::error::{AppError, ErrorKind};
use cuti_core::result::AppResult;
use cuti_core::types::pagination::{PageRequest, PageResponse};
use cuti_entity::department::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};

const DUPLICATE_NAME: &str = "Nama departement sudah terdaftar";
const DUPLICATE_EMAIL: &str = "Email departement sudah terdaftar";
const STILL_REFERENCED: &str = "Departemen masih digunakan oleh pengguna";

/// Repository for department CRUD and search.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    pool: PgPool,
}

impl DepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a department by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>("SELECT * FROM departments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find department by id", e)
            })
    }

    /// Find another department already holding `name` or `email`.
    ///
    /// `exclude` skips the row being updated.
    pub async fn find_conflicting(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        exclude: Option<Uuid>,
    ) -> AppResult<Option<Department>> {
        sqlx::query_as::<_, Department>(
            "SELECT * FROM departments \
             WHERE (name = $1 OR email = $2) \
               AND ($3::uuid IS NULL OR id <> $3) \
             ORDER BY name ASC LIMIT 1",
        )
        .bind(name)
        .bind(email)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check department uniqueness", e)
        })
    }

    /// Paginated search with optional case-insensitive substring filters.
    pub async fn search(
        &self,
        filter: &DepartmentFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Department>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM departments \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
               AND ($2::text IS NULL OR email ILIKE '%' || $2 || '%')",
        )
        .bind(&filter.name)
        .bind(&filter.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count departments", e))?;

        let departments = sqlx::query_as::<_, Department>(
            "SELECT * FROM departments \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
               AND ($2::text IS NULL OR email ILIKE '%' || $2 || '%') \
             ORDER BY name ASC LIMIT $3 OFFSET $4",
        )
        .bind(&filter.name)
        .bind(&filter.email)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search departments", e))?;

        Ok(PageResponse::new(departments, page, total as u64))
    }

    /// Insert a new department.
    pub async fn create(&self, data: &CreateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "INSERT INTO departments (id, name, email) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create department"))
    }

    /// Apply the provided fields; absent fields keep their value.
    pub async fn update(&self, id: Uuid, data: &UpdateDepartment) -> AppResult<Department> {
        sqlx::query_as::<_, Department>(
            "UPDATE departments SET name = COALESCE($2, name), \
                                    email = COALESCE($3, email), \
                                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update department"))?
        .ok_or_else(|| AppError::not_found(format!("Departemen dengan ID {id} tidak ditemukan")))
    }

    /// Number of accounts that belong to the department.
    pub async fn count_members(&self, id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM accounts WHERE department_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count department members", e)
            })
    }

    /// Delete a department. Returns `false` when no row matched.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to delete department"))?;

        Ok(result.rows_affected() > 0)
    }
}

fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("departments_name_key") =>
        {
            AppError::conflict(DUPLICATE_NAME)
        }
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("departments_email_key") =>
        {
            AppError::conflict(DUPLICATE_EMAIL)
        }
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("accounts_department_id_fkey") =>
        {
            AppError::conflict(STILL_REFERENCED)
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}
