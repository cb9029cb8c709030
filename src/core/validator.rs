//! Booking form checks. Rules run in a fixed order and the first failure wins.

use crate::domain::model::{parse_date, parse_time, BookingForm};
use chrono::{NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

/// Opening window, inclusive at both ends, compared at minute resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub opening: NaiveTime,
    pub closing: NaiveTime,
}

impl BusinessHours {
    pub fn new(opening: NaiveTime, closing: NaiveTime) -> Self {
        Self { opening, closing }
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        // Seconds never push a slot out of the window.
        let minute_of = |t: NaiveTime| t.hour() * 60 + t.minute();
        let slot = minute_of(time);
        slot >= minute_of(self.opening) && slot <= minute_of(self.closing)
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            opening: NaiveTime::from_hms_opt(9, 0, 0).expect("09:00 is a valid time"),
            closing: NaiveTime::from_hms_opt(20, 0, 0).expect("20:00 is a valid time"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Ingresá un nombre válido.")]
    ClientName,

    #[error("Seleccioná un servicio.")]
    ServiceMissing,

    #[error("Elegí una fecha.")]
    DateMissing,

    #[error("Elegí un horario.")]
    TimeMissing,

    #[error("Horario fuera de atención ({} a {}).", .opening.format("%H:%M"), .closing.format("%H:%M"))]
    OutsideBusinessHours {
        opening: NaiveTime,
        closing: NaiveTime,
    },

    #[error("No se pueden reservar turnos en el pasado.")]
    InThePast,
}

pub fn validate(
    form: &BookingForm,
    hours: &BusinessHours,
    now: NaiveDateTime,
) -> Result<(), ValidationError> {
    if form.client_name.trim().chars().count() < 2 {
        return Err(ValidationError::ClientName);
    }
    if form.service_id.trim().is_empty() {
        return Err(ValidationError::ServiceMissing);
    }
    if form.date.trim().is_empty() {
        return Err(ValidationError::DateMissing);
    }
    let date = parse_date(&form.date).ok_or(ValidationError::DateMissing)?;
    if form.time.trim().is_empty() {
        return Err(ValidationError::TimeMissing);
    }

    let outside = ValidationError::OutsideBusinessHours {
        opening: hours.opening,
        closing: hours.closing,
    };
    let time = parse_time(&form.time).ok_or_else(|| outside.clone())?;
    if !hours.contains(time) {
        return Err(outside);
    }

    if date.and_time(time) < now {
        return Err(ValidationError::InThePast);
    }

    Ok(())
}

/// Same checks as [`validate`], reported as the message shown next to the
/// form. Empty when the form is acceptable.
pub fn validation_message(form: &BookingForm, hours: &BusinessHours, now: NaiveDateTime) -> String {
    match validate(form, hours, now) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn form(time: &str) -> BookingForm {
        BookingForm::new("Ana", "1", "2099-01-01", time)
    }

    fn check(form: &BookingForm) -> Result<(), ValidationError> {
        validate(form, &BusinessHours::default(), now())
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(check(&form("10:00")), Ok(()));
        assert_eq!(
            validation_message(&form("10:00"), &BusinessHours::default(), now()),
            ""
        );
    }

    #[test]
    fn test_client_name_is_trimmed() {
        let mut f = form("10:00");
        f.client_name = "  A  ".to_string();
        assert_eq!(check(&f), Err(ValidationError::ClientName));

        f.client_name = " Al ".to_string();
        assert_eq!(check(&f), Ok(()));
    }

    #[test]
    fn test_rules_short_circuit_in_order() {
        let empty = BookingForm::default();
        assert_eq!(check(&empty), Err(ValidationError::ClientName));

        let f = BookingForm::new("Ana", "", "", "");
        assert_eq!(check(&f), Err(ValidationError::ServiceMissing));

        let f = BookingForm::new("Ana", "2", "", "");
        assert_eq!(check(&f), Err(ValidationError::DateMissing));

        let f = BookingForm::new("Ana", "2", "2099-01-01", "");
        assert_eq!(check(&f), Err(ValidationError::TimeMissing));

        // A garbled date is reported as missing before the time is looked at.
        let f = BookingForm::new("Ana", "2", "01/01/2099", "07:00");
        assert_eq!(check(&f), Err(ValidationError::DateMissing));

        // Out of hours is reported before the past-date check.
        let f = BookingForm::new("Ana", "2", "2000-01-01", "07:00");
        assert!(matches!(
            check(&f),
            Err(ValidationError::OutsideBusinessHours { .. })
        ));
    }

    #[test]
    fn test_business_hours_boundaries() {
        assert_eq!(check(&form("09:00")), Ok(()));
        assert_eq!(check(&form("20:00")), Ok(()));
        assert_eq!(check(&form("20:00:45")), Ok(()));
        assert!(check(&form("08:59")).is_err());
        assert!(check(&form("20:01")).is_err());
        assert!(check(&form("21:00")).is_err());
    }

    #[test]
    fn test_out_of_hours_message() {
        assert_eq!(
            validation_message(&form("08:59"), &BusinessHours::default(), now()),
            "Horario fuera de atención (09:00 a 20:00)."
        );
    }

    #[test]
    fn test_unparseable_time_is_out_of_hours() {
        assert!(matches!(
            check(&form("diez")),
            Err(ValidationError::OutsideBusinessHours { .. })
        ));
    }

    #[test]
    fn test_unparseable_date_counts_as_missing() {
        let f = BookingForm::new("Ana", "1", "01/01/2099", "10:00");
        assert_eq!(check(&f), Err(ValidationError::DateMissing));
    }

    #[test]
    fn test_past_boundary() {
        let slot = NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let f = BookingForm::new("Ana", "1", "2030-06-15", "10:00");
        let hours = BusinessHours::default();

        assert_eq!(validate(&f, &hours, slot), Ok(()));
        assert_eq!(
            validate(&f, &hours, slot + Duration::seconds(1)),
            Err(ValidationError::InThePast)
        );
        assert_eq!(
            validation_message(&f, &hours, slot + Duration::seconds(1)),
            "No se pueden reservar turnos en el pasado."
        );
    }

    #[test]
    fn test_custom_hours_appear_in_message() {
        let hours = BusinessHours::new(
            NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(18, 30, 0).unwrap(),
        );
        assert_eq!(validate(&form("18:30"), &hours, now()), Ok(()));
        assert_eq!(
            validation_message(&form("18:31"), &hours, now()),
            "Horario fuera de atención (10:00 a 18:30)."
        );
    }
}
