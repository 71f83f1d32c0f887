#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod employee_create_tests;

#[cfg(test)]
mod employee_get_tests;

#[cfg(test)]
mod employee_update_tests;

#[cfg(test)]
mod employee_delete_tests;

#[cfg(test)]
mod employee_list_tests;

#[cfg(test)]
mod employee_repo_tests;
