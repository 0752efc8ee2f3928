//! Interactive product listing.
//!
//! ```text
//! cargo run --example product_listing -- products.json
//! ```
//!
//! The file holds a JSON array of products (`id`, `nome`/`name`,
//! `loginuser`/`owner`, `qtde`/`quantity`, `preco`/`price`). Without an
//! argument a built-in sample is used. Press `d` to delete the selected
//! product; the listing asks for confirmation in place. Set `RUST_LOG=debug`
//! to write a trace to `product_listing.log`.

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg, Program};
use crossterm::event::{KeyCode, KeyModifiers};
use product_table::prelude::*;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

// `init` takes no arguments, so the listing built in `main` is handed over here.
static LISTING: Mutex<Option<Listing>> = Mutex::new(None);

const SAMPLE: &str = r#"[
    {"id": 1, "nome": "Arroz integral", "loginuser": "ana", "qtde": 12, "preco": 8.9},
    {"id": 2, "nome": "Feijao preto", "loginuser": "ana", "qtde": 30, "preco": 7.5},
    {"id": 3, "nome": "Azeite", "loginuser": "bruno", "qtde": 4, "preco": 32.0},
    {"id": 4, "nome": "Cafe torrado", "loginuser": "carla", "qtde": 9, "preco": 18.75},
    {"id": 5, "nome": "Acucar mascavo", "loginuser": "bruno", "qtde": 15, "preco": 9.3},
    {"id": 6, "nome": "Macarrao", "loginuser": "carla", "qtde": 22, "preco": 5.2},
    {"id": 7, "nome": "Farinha de mandioca", "loginuser": "ana", "qtde": 7, "preco": 6.4},
    {"id": 8, "nome": "Leite", "loginuser": "davi", "qtde": 40, "preco": 4.99}
]"#;

struct App {
    listing: Listing,
    status: String,
}

impl BubbleTeaModel for App {
    fn init() -> (Self, Option<Cmd>) {
        let listing = LISTING
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .expect("listing is prepared before the program starts");
        (
            Self {
                listing,
                status: String::new(),
            },
            None,
        )
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(DeleteMsg(action)) = msg.downcast_ref::<DeleteMsg>() {
            self.status = format!(
                "Deleted {} (id {})",
                action.name,
                action.key.as_deref().unwrap_or("?")
            );
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let idle = !self.listing.focused() && self.listing.pending_delete().is_none();
            let quit = (key.key == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL)
                || (idle && key.key == KeyCode::Char('q'));
            if quit {
                return Some(bubbletea_rs::quit());
            }
            self.status.clear();
        }

        self.listing.update(&msg)
    }

    fn view(&self) -> String {
        format!(
            "Products\n\n{}\n{}\nq quit\n",
            self.listing.view(),
            self.listing.styles.status.render(&self.status)
        )
    }
}

fn read_listing(path: Option<String>) -> Result<Table> {
    match path {
        Some(path) => product::table_from_file(path),
        None => product::table_from_json(SAMPLE),
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    if std::env::var_os("RUST_LOG").is_some() {
        let log = std::fs::File::create("product_listing.log")?;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(Mutex::new(log))
            .with_ansi(false)
            .init();
    }

    let table = read_listing(std::env::args().nth(1))?;
    tracing::info!(rows = table.len(), "loaded products");
    let listing = Listing::new(table, Config::default())?;
    if let Ok(mut slot) = LISTING.lock() {
        *slot = Some(listing);
    }

    let program = Program::<App>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
