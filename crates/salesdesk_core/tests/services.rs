use chrono::NaiveDate;
use salesdesk_core::db::open_db_in_memory;
use salesdesk_core::{
    Department, DepartmentService, RepoError, Salary, Seller, SellerService, ServiceError,
    SqliteDepartmentRepository, SqliteSellerRepository,
};
use std::rc::Rc;

#[test]
fn department_save_or_update_inserts_then_updates() {
    let conn = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    let mut department = Department::new("Books");
    let id = service.save_or_update(&mut department).unwrap();
    assert_eq!(department.id, Some(id));

    department.name = "Rare Books".to_string();
    assert_eq!(service.save_or_update(&mut department).unwrap(), id);

    let all = service.find_all().unwrap();
    assert_eq!(all, vec![Department::with_id(id, "Rare Books")]);
}

#[test]
fn blank_department_name_is_rejected_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let service = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    let mut department = Department::new("   ");
    match service.save_or_update(&mut department) {
        Err(ServiceError::Validation(errors)) => {
            assert_eq!(errors.field("name"), Some("Field can't be empty"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(department.id, None);
    assert!(service.find_all().unwrap().is_empty());
}

#[test]
fn removing_department_in_use_reports_integrity_violation() {
    let conn = open_db_in_memory().unwrap();
    let departments = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());
    let sellers = SellerService::new(SqliteSellerRepository::try_new(&conn).unwrap());

    let mut department = Department::new("Computers");
    departments.save_or_update(&mut department).unwrap();
    let department = Rc::new(department);

    let mut seller = Seller::new(
        "Donald Blue",
        "donald@gmail.com",
        NaiveDate::from_ymd_opt(1988, 3, 4).unwrap(),
        Salary::from_cents(200_000),
        Rc::clone(&department),
    );
    sellers.save_or_update(&mut seller).unwrap();

    let err = departments.remove(&department).unwrap_err();
    assert!(err.is_integrity_violation());
    assert!(ServiceError::from(err).is_integrity_violation());
    assert!(departments
        .find_by_id(department.id.unwrap())
        .unwrap()
        .is_some());

    sellers.remove(&seller).unwrap();
    departments.remove(&department).unwrap();
    assert!(departments.find_all().unwrap().is_empty());
}

#[test]
fn removing_transient_entities_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let departments = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());

    let err = departments.remove(&Department::new("Transient")).unwrap_err();
    assert!(matches!(err, RepoError::Unpersisted("department")));
}

#[test]
fn seller_service_validates_and_dispatches() {
    let conn = open_db_in_memory().unwrap();
    let departments = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn).unwrap());
    let sellers = SellerService::new(SqliteSellerRepository::try_new(&conn).unwrap());

    let mut department = Department::new("Electronics");
    departments.save_or_update(&mut department).unwrap();
    let department = Rc::new(department);

    let mut seller = Seller::new(
        "Martha Red",
        "martha-at-gmail",
        NaiveDate::from_ymd_opt(1993, 11, 30).unwrap(),
        Salary::from_cents(300_000),
        Rc::clone(&department),
    );
    let err = sellers.save_or_update(&mut seller).unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref errors) if errors.field("email").is_some()));

    seller.email = "martha@gmail.com".to_string();
    let id = sellers.save_or_update(&mut seller).unwrap();

    seller.base_salary = Salary::from_cents(320_000);
    assert_eq!(sellers.save_or_update(&mut seller).unwrap(), id);

    let listed = sellers.find_by_department(&department).unwrap();
    assert_eq!(listed, vec![seller.clone()]);
    assert_eq!(sellers.find_by_id(id).unwrap(), Some(seller));
}

#[test]
fn seller_with_unsaved_department_is_rejected_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let sellers = SellerService::new(SqliteSellerRepository::try_new(&conn).unwrap());

    let mut seller = Seller::new(
        "Donald Blue",
        "donald@gmail.com",
        NaiveDate::from_ymd_opt(2000, 1, 9).unwrap(),
        Salary::from_cents(150_000),
        Rc::new(Department::new("Unsaved")),
    );
    let err = sellers.save_or_update(&mut seller).unwrap_err();

    assert!(matches!(
        err,
        ServiceError::Validation(ref errors) if errors.field("department").is_some()
    ));
    assert_eq!(seller.id, None);
    assert!(sellers.find_all().unwrap().is_empty());
}
