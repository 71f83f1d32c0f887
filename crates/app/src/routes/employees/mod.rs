mod detail;
mod form_sheet;
mod list;

pub use detail::EmployeeDetail;
pub use list::EmployeeList;
