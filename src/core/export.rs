use crate::core::Booking;
use crate::domain::model::format_time;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    n: usize,
    cliente: &'a str,
    servicio: &'a str,
    fecha: String,
    hora: String,
    precio: u64,
}

/// Writes the bookings as CSV, numbered from 1 in creation order.
pub fn export_csv<W: Write>(bookings: &[Booking], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for (i, booking) in bookings.iter().enumerate() {
        wtr.serialize(ExportRow {
            n: i + 1,
            cliente: &booking.client_name,
            servicio: &booking.service_name,
            fecha: booking.date.to_string(),
            hora: format_time(&booking.time),
            precio: booking.price,
        })?;
    }

    // Header-only output for an empty book.
    if bookings.is_empty() {
        wtr.write_record(["n", "cliente", "servicio", "fecha", "hora", "precio"])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn booking(id: &str, client: &str, service: &str, price: u64) -> Booking {
        Booking {
            id: id.to_string(),
            client_name: client.to_string(),
            service_name: service.to_string(),
            price,
            date: NaiveDate::from_ymd_opt(2099, 3, 4).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_export_numbers_rows_in_order() {
        let bookings = vec![
            booking("a", "Ana", "Corte de pelo", 7500),
            booking("b", "Beto, hijo", "Corte + Barba", 11500),
        ];
        let mut out = Vec::new();
        export_csv(&bookings, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "n,cliente,servicio,fecha,hora,precio",
                "1,Ana,Corte de pelo,2099-03-04,09:30,7500",
                "2,\"Beto, hijo\",Corte + Barba,2099-03-04,09:30,11500",
            ]
        );
    }

    #[test]
    fn test_export_empty_has_header() {
        let mut out = Vec::new();
        export_csv(&[], &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "n,cliente,servicio,fecha,hora,precio\n"
        );
    }
}
