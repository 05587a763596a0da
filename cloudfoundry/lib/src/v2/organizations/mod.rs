//! Organization operations.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | `associate_auditor` | PUT | `/v2/organizations/{organization_id}/auditors/{auditor_id}` |
//! | `remove_auditor` | DELETE | `/v2/organizations/{organization_id}/auditors/{auditor_id}` |
//! | `associate_billing_manager` | PUT | `/v2/organizations/{id}/billing_managers/{billing_manager_id}` |
//! | `associate_manager` | PUT | `/v2/organizations/{id}/managers/{manager_id}` |
//! | `get` | GET | `/v2/organizations/{id}` |
//! | `list` | GET | `/v2/organizations` |

mod types;

pub use types::{
    AssociateAuditorRequest, AssociateAuditorRequestBuilder, AssociateBillingManagerRequest,
    AssociateBillingManagerRequestBuilder, AssociateManagerRequest,
    AssociateManagerRequestBuilder, GetOrganizationRequest, GetOrganizationRequestBuilder,
    ListOrganizationsRequest, ListOrganizationsRequestBuilder, OrganizationEntity,
    RemoveAuditorRequest, RemoveAuditorRequestBuilder,
};

use crate::client::{CloudFoundryClient, OperationOutput};
use crate::error::InvocationError;
use crate::transport::Transport;

/// Organization operations bound to a client.
#[derive(Debug)]
pub struct Organizations<'a, T: Transport> {
    client: &'a CloudFoundryClient<T>,
}

impl<'a, T: Transport> Organizations<'a, T> {
    pub(crate) fn new(client: &'a CloudFoundryClient<T>) -> Self {
        Self { client }
    }

    /// Adds a user to the organization's auditors.
    pub async fn associate_auditor(
        &self,
        request: AssociateAuditorRequest,
    ) -> Result<OperationOutput<AssociateAuditorRequest>, InvocationError> {
        self.client.invoke(request).await
    }

    /// Removes a user from the organization's auditors.
    pub async fn remove_auditor(
        &self,
        request: RemoveAuditorRequest,
    ) -> Result<(), InvocationError> {
        self.client.invoke(request).await
    }

    /// Adds a user to the organization's billing managers.
    pub async fn associate_billing_manager(
        &self,
        request: AssociateBillingManagerRequest,
    ) -> Result<OperationOutput<AssociateBillingManagerRequest>, InvocationError> {
        self.client.invoke(request).await
    }

    /// Adds a user to the organization's managers.
    pub async fn associate_manager(
        &self,
        request: AssociateManagerRequest,
    ) -> Result<OperationOutput<AssociateManagerRequest>, InvocationError> {
        self.client.invoke(request).await
    }

    /// Retrieves one organization.
    pub async fn get(
        &self,
        request: GetOrganizationRequest,
    ) -> Result<OperationOutput<GetOrganizationRequest>, InvocationError> {
        self.client.invoke(request).await
    }

    /// Lists one page of organizations.
    pub async fn list(
        &self,
        request: ListOrganizationsRequest,
    ) -> Result<OperationOutput<ListOrganizationsRequest>, InvocationError> {
        self.client.invoke(request).await
    }
}
