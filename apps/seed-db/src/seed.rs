use anyhow::{Context, bail};
use rand::Rng;
use rand::seq::SliceRandom;
use rbac_core::model::employee::CreateEmployeeRequest;
use rbac_core::model::organisation::CreateOrganisationRequest;
use rbac_core::repository::DataRepository;

use crate::names::{company_name, person_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SeedSummary {
    pub organisations_created: usize,
    pub employees_created: usize,
    pub organisations_total: usize,
}

/// Inserts `organisations` random organisations, then `employees` random
/// employees each assigned to a uniformly chosen organisation of the store.
pub(crate) async fn seed(
    data: &dyn DataRepository,
    organisations: usize,
    employees: usize,
    rng: &mut impl Rng,
) -> anyhow::Result<SeedSummary> {
    let organisation_repository = data.get_organisation_repository();
    let employee_repository = data.get_employee_repository();

    for _ in 0..organisations {
        let organisation = organisation_repository
            .create_organisation(CreateOrganisationRequest {
                name: company_name(rng),
            })
            .await
            .context("failed to insert organisation")?;
        tracing::debug!(id = %organisation.id, name = %organisation.name, "Organisation inserted");
    }

    // includes organisations present before this run
    let organisation_ids: Vec<_> = organisation_repository
        .get_organisation_list()
        .await
        .context("failed to list organisations")?
        .into_iter()
        .map(|organisation| organisation.id)
        .collect();

    if employees > 0 && organisation_ids.is_empty() {
        bail!("cannot insert employees: the store has no organisations");
    }

    for _ in 0..employees {
        let Some(organisation_id) = organisation_ids.choose(rng).copied() else {
            break;
        };

        let employee = employee_repository
            .create_employee(CreateEmployeeRequest {
                name: person_name(rng),
                organisation_id,
            })
            .await
            .context("failed to insert employee")?;
        tracing::debug!(id = %employee.id, name = %employee.name, %organisation_id, "Employee inserted");
    }

    Ok(SeedSummary {
        organisations_created: organisations,
        employees_created: employees,
        organisations_total: organisation_ids.len(),
    })
}
