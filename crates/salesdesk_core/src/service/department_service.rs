//! Department use-case service.

use crate::model::department::{Department, DepartmentId};
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::ServiceResult;
use log::info;

pub struct DepartmentService<R: DepartmentRepository> {
    repo: R,
}

impl<R: DepartmentRepository> DepartmentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Department>> {
        self.repo.find_all()
    }

    pub fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        self.repo.find_by_id(id)
    }

    /// Inserts a transient department or updates a persisted one.
    ///
    /// # Contract
    /// - Validation failures are returned before any SQL runs.
    /// - On insert, `department.id` is set to the generated id.
    pub fn save_or_update(&self, department: &mut Department) -> ServiceResult<DepartmentId> {
        department.validate()?;

        match department.id {
            None => {
                let id = self.repo.insert(department)?;
                info!("event=department_save module=service status=ok op=insert id={id}");
                Ok(id)
            }
            Some(id) => {
                self.repo.update(department)?;
                info!("event=department_save module=service status=ok op=update id={id}");
                Ok(id)
            }
        }
    }

    /// Deletes a persisted department.
    ///
    /// Returns `RepoError::IntegrityViolation` while sellers still belong to
    /// it.
    pub fn remove(&self, department: &Department) -> RepoResult<()> {
        let id = department.id.ok_or(RepoError::Unpersisted("department"))?;
        self.repo.delete_by_id(id)?;
        info!("event=department_remove module=service status=ok id={id}");
        Ok(())
    }
}
