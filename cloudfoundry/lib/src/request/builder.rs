//! Call descriptor construction.

use percent_encoding::utf8_percent_encode;
use url::Url;

use super::descriptor::CallDescriptor;
use super::query::COMPONENT_ENCODE_SET;
use super::Operation;
use crate::error::BuildError;

/// Builds the call descriptor for a validated request.
///
/// Path placeholders are replaced with the request's values, encoded as path
/// segments. The query string holds only the parameters the request has set,
/// in declaration order.
///
/// ## Errors
///
/// Returns an error if a placeholder has no value, the resulting URL is
/// invalid, or the body cannot be serialized.
pub fn build<O: Operation>(base_url: &Url, request: &O) -> Result<CallDescriptor, BuildError> {
    let endpoint = O::endpoint();
    let supplied = request.path_params();

    let mut encoded = Vec::new();
    for name in endpoint.path_params() {
        let value = supplied
            .iter()
            .find(|(param, _)| *param == name)
            .and_then(|(_, value)| *value)
            .ok_or_else(|| BuildError::MissingPathParameter {
                name: name.to_string(),
            })?;
        encoded.push((name, utf8_percent_encode(value, COMPONENT_ENCODE_SET).to_string()));
    }

    let params: Vec<(&str, &str)> = encoded
        .iter()
        .map(|(name, value)| (*name, value.as_str()))
        .collect();
    let path = endpoint.substitute_params(&params);
    if path.contains('{') {
        return Err(BuildError::UnresolvedPlaceholder { path });
    }

    let mut url = Url::parse(&format!(
        "{}{}",
        base_url.as_str().trim_end_matches('/'),
        path
    ))?;

    let query = request.query();
    if !query.is_empty() {
        url.set_query(Some(&query.encode()));
    }

    let body = request.body()?;

    Ok(CallDescriptor::new(endpoint.method(), url, body))
}
