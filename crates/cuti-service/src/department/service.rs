//! Department CRUD and search.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use cuti_auth::rbac::{Permission, RbacEnforcer};
use cuti_core::error::AppError;
use cuti_core::types::pagination::{PageRequest, PageResponse};
use cuti_database::repositories::DepartmentRepository;
use cuti_entity::department::{CreateDepartment, Department, DepartmentFilter, UpdateDepartment};

use crate::context::RequestContext;

/// Manages departments. Mutations are restricted to admins.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    departments: Arc<DepartmentRepository>,
    rbac: Arc<RbacEnforcer>,
}

impl DepartmentService {
    pub fn new(departments: Arc<DepartmentRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { departments, rbac }
    }

    /// Creates a department with a unique name and email.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateDepartment,
    ) -> Result<Department, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::DepartmentManage)?;

        self.ensure_unique(Some(&data.name), Some(&data.email), None)
            .await?;
        let department = self.departments.create(&data).await?;

        info!(
            admin = %ctx.username,
            department_id = %department.id,
            name = %department.name,
            "Department created"
        );
        Ok(department)
    }

    /// Fetches one department.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Department, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::DepartmentRead)?;

        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Departement tidak ditemukan"))
    }

    /// Changes the provided fields of a department.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        data: UpdateDepartment,
    ) -> Result<Department, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::DepartmentManage)?;

        if self.departments.find_by_id(id).await?.is_none() {
            return Err(missing(id));
        }
        if !data.is_empty() {
            self.ensure_unique(data.name.as_deref(), data.email.as_deref(), Some(id))
                .await?;
        }

        let department = self.departments.update(id, &data).await?;
        info!(admin = %ctx.username, department_id = %id, "Department updated");
        Ok(department)
    }

    /// Deletes a department that no account belongs to.
    pub async fn remove(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::DepartmentManage)?;

        if self.departments.find_by_id(id).await?.is_none() {
            return Err(missing(id));
        }
        if self.departments.count_members(id).await? > 0 {
            return Err(AppError::conflict("Departemen masih digunakan oleh pengguna"));
        }
        if !self.departments.delete(id).await? {
            return Err(missing(id));
        }

        info!(admin = %ctx.username, department_id = %id, "Department deleted");
        Ok(())
    }

    /// Public paginated search.
    pub async fn search(
        &self,
        filter: DepartmentFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Department>, AppError> {
        self.departments.search(&filter, &page).await
    }

    /// Reports which of name or email another department already holds.
    async fn ensure_unique(
        &self,
        name: Option<&str>,
        email: Option<&str>,
        exclude: Option<Uuid>,
    ) -> Result<(), AppError> {
        let Some(existing) = self
            .departments
            .find_conflicting(name, email, exclude)
            .await?
        else {
            return Ok(());
        };

        if name == Some(existing.name.as_str()) {
            Err(AppError::conflict("Nama departement sudah terdaftar"))
        } else {
            Err(AppError::conflict("Email departement sudah terdaftar"))
        }
    }
}

fn missing(id: Uuid) -> AppError {
    AppError::not_found(format!("Departemen dengan ID {id} tidak ditemukan"))
}
