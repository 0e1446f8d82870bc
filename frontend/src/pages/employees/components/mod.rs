pub mod detail;
pub mod form;
pub mod list;

pub use detail::EmployeeDetail;
pub use form::EmployeeFormModal;
pub use list::{DirectoryToolbar, EmployeeTable, Pagination};
