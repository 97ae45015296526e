use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::auth::csrf;
use crate::controller::FormController;
use crate::errors::{AppError, render};
use crate::store::AttendanceStore;
use crate::templates_structs::CheckInTemplate;

#[derive(Deserialize)]
pub struct CheckInForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub csrf_token: String,
}

/// GET / - Mount the form: load the roster and render the selection list.
pub async fn index(
    store: web::Data<dyn AttendanceStore>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let controller = FormController::load(store.get_ref()).await;
    let csrf_token = csrf::get_or_create_token(&session);
    render(CheckInTemplate::from_state(controller.into_state(), csrf_token))
}

/// POST / - Submit the selected member and render the outcome.
pub async fn submit(
    store: web::Data<dyn AttendanceStore>,
    session: Session,
    form: web::Form<CheckInForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let mut controller = FormController::load(store.get_ref()).await;
    controller.submit_name(store.get_ref(), &form.name).await;

    let csrf_token = csrf::get_or_create_token(&session);
    render(CheckInTemplate::from_state(controller.into_state(), csrf_token))
}
