use serde::{Deserialize, Serialize};

use crate::macros::impls_for_integer_newtype;

/// Store-assigned identifier of an employee.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct EmployeeId(i32);

impls_for_integer_newtype!(EmployeeId);

#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_newtype;

#[cfg(feature = "sea-orm")]
impls_for_seaorm_newtype!(EmployeeId);
