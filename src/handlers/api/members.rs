use actix_web::{HttpResponse, web};

use crate::attendance;
use crate::errors::AppError;
use crate::store::AttendanceStore;

/// GET /members - The full roster as `[{ name, role }]`.
pub async fn list(store: web::Data<dyn AttendanceStore>) -> Result<HttpResponse, AppError> {
    let members = attendance::fetch_members(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(members))
}
