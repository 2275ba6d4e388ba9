pub mod expense_repository;
pub mod maintenance_repository;
pub mod notification_repository;
pub mod spending_limit_repository;
pub mod user_repository;
pub mod vehicle_repository;
