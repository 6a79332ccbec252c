//! Wire-level request and response types.

pub mod request;
pub mod response;

use validator::Validate;

use autoserve_core::AppError;

use crate::error::ApiResult;

/// Run derive-generated validation, mapping failures onto the wire
/// error taxonomy.
pub fn validated<T: Validate>(req: &T) -> ApiResult<()> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()).into())
}
