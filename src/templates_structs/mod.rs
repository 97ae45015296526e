// Template and API payload structures, organized by surface.

mod api;
mod checkin;

pub use self::api::{ApiErrorResponse, CheckInRequest, CheckInResponse};
pub use self::checkin::{APP_NAME, CheckInTemplate, MemberOption, SuccessView};
