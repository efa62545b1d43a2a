//! Application services - Orchestration of domain logic

pub mod dispatch_service;
pub mod view_service;

pub use dispatch_service::DispatchService;
pub use view_service::ViewService;
