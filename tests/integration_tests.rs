use barber_booking::{
    catalog_source_for, fallback_services, load_catalog, Barbershop, BookingError, BookingForm,
    BookingStore, CatalogLoad, FileStore, HttpCatalogSource, Service,
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use httpmock::prelude::*;
use std::time::Duration;
use tempfile::TempDir;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2030, 5, 20)
        .unwrap()
        .and_hms_opt(11, 0, 0)
        .unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

#[tokio::test]
async fn test_unreachable_catalog_uses_fallback() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/data/servicios.json");
        then.status(503);
    });

    let source = HttpCatalogSource::new(
        server.url("/data/servicios.json"),
        Duration::from_secs(2),
    )
    .unwrap();
    let load = load_catalog(&source).await;

    api_mock.assert();
    assert!(load.is_fallback());
    let ids: Vec<u32> = load.services().iter().map(|s| s.id).collect();
    let prices: Vec<u64> = load.services().iter().map(|s| s.price).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(prices, vec![7500, 6000, 11500]);
}

#[tokio::test]
async fn test_refused_connection_uses_fallback() {
    // Discard port; nothing answers HTTP there.
    let source = catalog_source_for("http://127.0.0.1:9/servicios.json", Duration::from_secs(2))
        .unwrap();
    let load = load_catalog(source.as_ref()).await;

    assert!(matches!(load, CatalogLoad::Fallback { .. }));
    assert_eq!(load.into_services(), fallback_services());
}

#[tokio::test]
async fn test_book_against_fallback_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let source = catalog_source_for(
        temp_dir.path().join("missing.json").to_str().unwrap(),
        Duration::from_secs(1),
    )
    .unwrap();
    let load = load_catalog(source.as_ref()).await;
    assert!(load.is_fallback());

    let store = BookingStore::load(FileStore::new(temp_dir.path()), "turnos");
    let mut shop = Barbershop::new(load.into_services(), store);

    let booking = shop
        .create("Ana", 1, date("2099-01-01"), time("10:00"))
        .unwrap();
    assert_eq!(booking.service_name, "Corte de pelo");
    assert_eq!(booking.price, 7500);

    let err = shop
        .create("Ana", 99, date("2099-01-01"), time("10:00"))
        .unwrap_err();
    assert!(matches!(err, BookingError::ServiceNotFound { .. }));
    assert_eq!(err.user_friendly_message(), "Servicio no encontrado");

    let reloaded = BookingStore::load(FileStore::new(temp_dir.path()), "turnos");
    assert_eq!(reloaded.bookings(), &[booking]);
}

#[tokio::test]
async fn test_end_to_end_with_remote_catalog() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/servicios.json");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"id": 1, "nombre": "Corte de pelo", "precio": 8000},
                {"id": 2, "nombre": "Barba", "precio": 6500},
                {"id": 5, "nombre": "Perfilado de cejas", "precio": 3000}
            ]));
    });

    let source = catalog_source_for(&server.url("/servicios.json"), Duration::from_secs(2))?;
    let load = load_catalog(source.as_ref()).await;
    api_mock.assert();
    assert!(!load.is_fallback());

    let store = BookingStore::load(FileStore::new(temp_dir.path()), "turnos");
    let mut shop = Barbershop::new(load.into_services(), store);

    let form = BookingForm::new("Ana", "5", "2030-05-20", "11:00");
    let booking = shop.book(&form, now())?;
    assert_eq!(booking.service_name, "Perfilado de cejas");
    assert_eq!(booking.price, 3000);

    let late = BookingForm::new("Beto", "2", "2030-05-20", "20:01");
    let err = shop.book(&late, now()).unwrap_err();
    assert_eq!(err.to_string(), "Horario fuera de atención (09:00 a 20:00).");

    let past = BookingForm::new("Beto", "2", "2030-05-20", "10:59");
    let err = shop.book(&past, now()).unwrap_err();
    assert_eq!(err.to_string(), "No se pueden reservar turnos en el pasado.");

    shop.book(&BookingForm::new("Beto", "2", "2030-05-21", "09:00"), now())?;
    assert_eq!(shop.total(), 9500);

    // A later catalog refresh does not reprice what is already booked.
    shop.set_catalog(vec![Service::new(2, "Barba", 9999)]);
    assert_eq!(shop.total(), 9500);

    Ok(())
}
