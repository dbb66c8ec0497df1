pub mod employee;
pub mod error;
pub mod organisation;

#[cfg(test)]
pub(crate) mod test_utilities;
