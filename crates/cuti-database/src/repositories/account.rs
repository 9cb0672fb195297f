//! Account repository implementation.

use sqlx::PgPool;

use cuti_core::error::{AppError, ErrorKind};
use cuti_core::result::AppResult;
use cuti_core::types::pagination::{PageRequest, PageResponse};
use cuti_entity::account::{Account, AccountFilter, CreateAccount, UpdateAccount};

/// Projection shared by every query; joins the owning department.
const ACCOUNT_COLUMNS: &str = "a.username, a.name, a.email, a.password_hash, \
     a.password_expired_at, a.flag_active, a.role, a.department_id, \
     d.name AS department_name, d.email AS department_email, \
     a.created_at, a.updated_at";

const SEARCH_PREDICATE: &str = "($1::text IS NULL OR a.name ILIKE '%' || $1 || '%') \
     AND ($2::text IS NULL OR a.email ILIKE '%' || $2 || '%') \
     AND ($3::account_role IS NULL OR a.role = $3) \
     AND ($4::boolean IS NULL OR a.flag_active = $4)";

/// Repository for account persistence and search.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by its username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts a \
             JOIN departments d ON d.id = a.department_id \
             WHERE a.username = $1"
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by username", e)
            })
    }

    /// Find an account already holding `username` or `email`.
    pub async fn find_conflicting(&self, username: &str, email: &str) -> AppResult<Option<Account>> {
        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts a \
             JOIN departments d ON d.id = a.department_id \
             WHERE a.username = $1 OR a.email = $2 \
             ORDER BY (a.username = $1) DESC LIMIT 1"
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(username)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check account uniqueness", e)
            })
    }

    /// Paginated search, ordered by username.
    pub async fn search(
        &self,
        filter: &AccountFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Account>> {
        let count_sql = format!("SELECT COUNT(*) FROM accounts a WHERE {SEARCH_PREDICATE}");
        let total: i64 = sqlx::query_scalar(&count_sql)
            .bind(&filter.name)
            .bind(&filter.email)
            .bind(filter.role)
            .bind(filter.flag_active)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count accounts", e))?;

        let sql = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts a \
             JOIN departments d ON d.id = a.department_id \
             WHERE {SEARCH_PREDICATE} \
             ORDER BY a.username ASC LIMIT $5 OFFSET $6"
        );
        let accounts = sqlx::query_as::<_, Account>(&sql)
            .bind(&filter.name)
            .bind(&filter.email)
            .bind(filter.role)
            .bind(filter.flag_active)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search accounts", e))?;

        Ok(PageResponse::new(accounts, page, total as u64))
    }

    /// Insert a new account and return it joined with its department.
    pub async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        let sql = format!(
            "WITH a AS ( \
                 INSERT INTO accounts (username, name, email, password_hash, \
                                       password_expired_at, flag_active, role, department_id) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING * \
             ) \
             SELECT {ACCOUNT_COLUMNS} FROM a JOIN departments d ON d.id = a.department_id"
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(&data.username)
            .bind(&data.name)
            .bind(&data.email)
            .bind(&data.password_hash)
            .bind(data.password_expired_at)
            .bind(data.flag_active)
            .bind(data.role)
            .bind(data.department_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to create account"))
    }

    /// Apply a partial update; absent fields keep their value.
    pub async fn update(&self, username: &str, data: &UpdateAccount) -> AppResult<Account> {
        let (password_hash, password_expired_at) = match &data.credential {
            Some(c) => (Some(c.password_hash.as_str()), Some(c.password_expired_at)),
            None => (None, None),
        };

        let sql = format!(
            "WITH a AS ( \
                 UPDATE accounts SET name = COALESCE($2, name), \
                                     department_id = COALESCE($3, department_id), \
                                     role = COALESCE($4, role), \
                                     flag_active = COALESCE($5, flag_active), \
                                     password_hash = COALESCE($6, password_hash), \
                                     password_expired_at = COALESCE($7, password_expired_at), \
                                     updated_at = NOW() \
                 WHERE username = $1 RETURNING * \
             ) \
             SELECT {ACCOUNT_COLUMNS} FROM a JOIN departments d ON d.id = a.department_id"
        );
        sqlx::query_as::<_, Account>(&sql)
            .bind(username)
            .bind(&data.name)
            .bind(data.department_id)
            .bind(data.role)
            .bind(data.flag_active)
            .bind(password_hash)
            .bind(password_expired_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_write_error(e, "Failed to update account"))?
            .ok_or_else(|| AppError::not_found("User tidak ditemukan"))
    }
}

fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("accounts_pkey") => {
            AppError::conflict("Username sudah terdaftar")
        }
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("accounts_email_key") => {
            AppError::conflict("Email sudah terdaftar")
        }
        sqlx::Error::Database(ref db_err)
            if db_err.constraint() == Some("accounts_department_id_fkey") =>
        {
            AppError::validation("Departemen tidak ditemukan")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}
