use barber_booking::app::render;
use barber_booking::core::export::export_csv;
use barber_booking::utils::{logger, validation::Validate};
use barber_booking::{
    catalog_source_for, load_catalog, AppConfig, Barbershop, BookingForm,
    BookingStore, Cli, Command, FileStore, Result,
};
use clap::Parser;
use std::io::{BufRead, Write};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {}", e);
        tracing::debug!("💡 {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = if e.is_config_error() { 2 } else { 1 };
        std::process::exit(exit_code);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    let hours = config.business_hours()?;

    let storage = FileStore::new(&config.storage.data_dir);
    let store = BookingStore::load(storage, config.storage.key.clone());
    let mut shop = Barbershop::new(Vec::new(), store).with_hours(hours);

    let catalog = if cli.needs_catalog() {
        let source = catalog_source_for(&config.catalog.source, config.catalog_timeout())?;
        let load = load_catalog(source.as_ref()).await;
        shop.set_catalog(load.services().to_vec());
        Some(load)
    } else {
        None
    };

    match cli.command {
        Command::Services => {
            if let Some(load) = &catalog {
                print!("{}", render::render_catalog(load));
            }
        }
        Command::Book {
            name,
            service,
            date,
            time,
        } => {
            let form = BookingForm::new(name, service, date, time);
            let now = chrono::Local::now().naive_local();
            let booking = shop.book(&form, now)?;
            println!("✅ {}", render::render_booking_confirmation(&booking));
        }
        Command::List => {
            print!("{}", render::render_bookings(shop.bookings(), shop.total()));
        }
        Command::Remove { id } => {
            if shop.remove(&id)? {
                println!("🗑️ Turno eliminado");
            } else {
                println!("No existe un turno con id {}", id);
            }
        }
        Command::Clear { yes } => {
            if shop.bookings().is_empty() {
                println!("No hay turnos para vaciar.");
            } else if yes || confirm(&format!("¿Vaciar los {} turnos?", shop.bookings().len()))? {
                shop.clear()?;
                println!("Se vaciaron los turnos.");
            } else {
                println!("Operación cancelada.");
            }
        }
        Command::Total => {
            println!("{}", render::format_currency(shop.total()));
        }
        Command::Export { output } => match output {
            Some(path) => {
                let file = std::fs::File::create(&path)?;
                export_csv(shop.bookings(), file)?;
                println!("📁 {} turnos exportados a {}", shop.bookings().len(), path.display());
            }
            None => export_csv(shop.bookings(), std::io::stdout().lock())?,
        },
    }

    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [s/N] ", question);
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    ))
}
