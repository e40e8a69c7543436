//! Seller use-case service.

use crate::model::department::Department;
use crate::model::seller::{Seller, SellerId};
use crate::repo::seller_repo::SellerRepository;
use crate::repo::{RepoError, RepoResult};
use crate::service::ServiceResult;
use log::info;

pub struct SellerService<R: SellerRepository> {
    repo: R,
}

impl<R: SellerRepository> SellerService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn find_all(&self) -> RepoResult<Vec<Seller>> {
        self.repo.find_all()
    }

    pub fn find_by_id(&self, id: SellerId) -> RepoResult<Option<Seller>> {
        self.repo.find_by_id(id)
    }

    pub fn find_by_department(&self, department: &Department) -> RepoResult<Vec<Seller>> {
        self.repo.find_by_department(department)
    }

    /// Inserts a transient seller or replaces a persisted one.
    pub fn save_or_update(&self, seller: &mut Seller) -> ServiceResult<SellerId> {
        seller.validate()?;

        let op = if seller.is_persisted() { "update" } else { "insert" };
        let id = match seller.id {
            None => self.repo.insert(seller)?,
            Some(id) => {
                self.repo.update(seller)?;
                id
            }
        };
        info!(
            "event=seller_save module=service status=ok op={op} id={id} department_id={}",
            seller.department.id.unwrap_or_default()
        );
        Ok(id)
    }

    pub fn remove(&self, seller: &Seller) -> RepoResult<()> {
        let id = seller.id.ok_or(RepoError::Unpersisted("seller"))?;
        self.repo.delete_by_id(id)?;
        info!("event=seller_remove module=service status=ok id={id}");
        Ok(())
    }
}
