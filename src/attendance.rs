//! The two store-facing operations: reading the roster and writing a check-in.

use crate::errors::{AppError, NAME_REQUIRED};
use crate::models::{CheckInRecord, Member};
use crate::store::AttendanceStore;

/// Fetch the whole roster. No retry; any store failure becomes `UpstreamRead`.
pub async fn fetch_members(store: &dyn AttendanceStore) -> Result<Vec<Member>, AppError> {
    store.fetch_members().await.map_err(|e| {
        log::error!("Error fetching members: {e}");
        AppError::UpstreamRead(e)
    })
}

/// Append one check-in row for `name`, stamped now in the log timezone.
///
/// Not idempotent: two calls with the same name append two rows.
pub async fn append_check_in(
    store: &dyn AttendanceStore,
    name: &str,
) -> Result<CheckInRecord, AppError> {
    let name = validate_name(Some(name))?;
    let record = CheckInRecord::now(name);
    store.append_check_in(&record).await.map_err(|e| {
        log::error!("Error appending check-in for {name}: {e}");
        AppError::UpstreamWrite(e)
    })?;
    log::info!("Checked in {} at {} {}", record.name, record.date, record.time);
    Ok(record)
}

/// A submitted name must be present and not blank. Returns the trimmed name.
pub fn validate_name(name: Option<&str>) -> Result<&str, AppError> {
    match name.map(str::trim) {
        Some(n) if !n.is_empty() => Ok(n),
        _ => Err(AppError::Validation(NAME_REQUIRED.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(Some(" Alice ")).unwrap(), "Alice");
        assert!(matches!(validate_name(None), Err(AppError::Validation(_))));
        assert!(matches!(validate_name(Some("")), Err(AppError::Validation(_))));
        assert!(matches!(validate_name(Some("   ")), Err(AppError::Validation(_))));
    }
}
