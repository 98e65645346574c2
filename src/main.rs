mod app;

use anyhow::Context as _;
use app::LexiquestApp;
use lexiquest::config::AppConfig;
use lexiquest::database::db;
use lexiquest::models::Deck;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn sample_deck() -> Deck {
    Deck::from_pairs(
        "English - Uzbek",
        [
            ("apple", "olma"),
            ("book", "kitob"),
            ("water", "suv"),
            ("house", "uy"),
            ("friend", "do'st"),
            ("bread", "non"),
            ("school", "maktab"),
            ("sun", "quyosh"),
            ("window", "deraza"),
            ("tree", "daraxt"),
            ("bird", "qush"),
            ("city", "shahar"),
        ],
    )
}

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load(None).context("failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let conn = db::init_database(&config.database_path).context("failed to initialize database")?;

    if db::get_all_decks(&conn)?.is_empty() {
        db::save_deck(&sample_deck(), &conn).context("failed to create sample deck")?;
        info!("sample data created");
    }

    let deck_set = db::load_all_decks(&conn).context("failed to load decks from database")?;
    info!(decks = deck_set.decks.len(), "decks loaded");
    for deck in &deck_set.decks {
        debug!(deck = %deck.name, cards = deck.len(), "deck");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([560.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Lexiquest",
        options,
        Box::new(move |_cc| Ok(Box::new(LexiquestApp::new(deck_set, conn, config)))),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))
}
