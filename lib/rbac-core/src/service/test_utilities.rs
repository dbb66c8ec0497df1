use std::sync::Arc;

use crate::config::core_config::{CoreConfig, ValidationConfig};
use crate::model::employee::Employee;
use crate::model::organisation::Organisation;

pub fn generic_config() -> Arc<CoreConfig> {
    Arc::new(CoreConfig {
        validation: ValidationConfig {
            max_name_length: 20,
        },
    })
}

pub fn dummy_organisation(id: i32) -> Organisation {
    Organisation {
        id: id.into(),
        name: format!("organisation {id}"),
    }
}

pub fn dummy_employee(id: i32, organisation_id: i32) -> Employee {
    Employee {
        id: id.into(),
        name: format!("employee {id}"),
        organisation_id: organisation_id.into(),
    }
}
