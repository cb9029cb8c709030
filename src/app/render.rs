use crate::core::catalog::CatalogLoad;
use crate::core::{Booking, Service};
use crate::domain::model::format_time;
use std::fmt::Write;

/// Whole pesos with a dot as thousands separator: `$ 11.500`.
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("$ {}", grouped)
}

pub fn render_catalog(load: &CatalogLoad) -> String {
    let mut out = String::new();
    if load.is_fallback() {
        out.push_str("(usando servicios por defecto)\n");
    }
    out.push_str(&render_services(load.services()));
    out
}

pub fn render_services(services: &[Service]) -> String {
    if services.is_empty() {
        return "No hay servicios disponibles.\n".to_string();
    }

    let name_width = column_width("Servicio", services.iter().map(|s| s.name.as_str()));
    let mut out = String::new();
    let _ = writeln!(out, "{:>3}  {:<name_width$}  {:>10}", "Id", "Servicio", "Precio");
    for service in services {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>10}",
            service.id,
            service.name,
            format_currency(service.price)
        );
    }
    out
}

/// Booking table followed by the given `total`.
pub fn render_bookings(bookings: &[Booking], total: u64) -> String {
    if bookings.is_empty() {
        return format!("No hay turnos.\nTotal: {}\n", format_currency(total));
    }

    let client_width = column_width("Cliente", bookings.iter().map(|b| b.client_name.as_str()));
    let service_width =
        column_width("Servicio", bookings.iter().map(|b| b.service_name.as_str()));

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<client_width$}  {:<service_width$}  {:<10}  {:<5}  {:>10}  Id",
        "#", "Cliente", "Servicio", "Fecha", "Hora", "Precio"
    );
    for (i, booking) in bookings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<client_width$}  {:<service_width$}  {:<10}  {:<5}  {:>10}  {}",
            i + 1,
            booking.client_name,
            booking.service_name,
            booking.date,
            format_time(&booking.time),
            format_currency(booking.price),
            booking.id
        );
    }
    let _ = writeln!(out, "Total: {}", format_currency(total));
    out
}

pub fn render_booking_confirmation(booking: &Booking) -> String {
    format!(
        "Turno agregado correctamente: {} - {} el {} a las {} ({}) [id {}]",
        booking.client_name,
        booking.service_name,
        booking.date,
        format_time(&booking.time),
        format_currency(booking.price),
        booking.id
    )
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.chars().count())
        .chain(std::iter::once(header.chars().count()))
        .max()
        .unwrap_or(0)
}
