use actix_web::{HttpResponse, web};

use crate::attendance;
use crate::errors::AppError;
use crate::store::AttendanceStore;
use crate::templates_structs::{CheckInRequest, CheckInResponse};

/// POST /checkin - Append one check-in row for `name`.
///
/// The name is not checked against the roster here; any non-blank name is accepted.
pub async fn create(
    store: web::Data<dyn AttendanceStore>,
    body: web::Json<CheckInRequest>,
) -> Result<HttpResponse, AppError> {
    let name = attendance::validate_name(body.name.as_deref())?;
    attendance::append_check_in(store.get_ref(), name).await?;
    Ok(HttpResponse::Ok().json(CheckInResponse { success: true }))
}
