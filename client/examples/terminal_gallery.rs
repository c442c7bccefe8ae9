use std::io::{self, Write};

use anyhow::Result;
use pokedex_client::{
    ApiConfig, BattleView, CardView, CryPlayer, DetailView, Gallery, Notice, PokeApi, Renderer,
    UiEvent,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Prints everything the gallery renders to stdout
#[derive(Default)]
struct Terminal {
    cards: Vec<CardView>,
    selected: Vec<usize>,
}

impl Terminal {
    fn print_cards(&self) {
        for card in &self.cards {
            let marker = if self.selected.contains(&card.index) {
                "*"
            } else {
                " "
            };
            println!("  {}[{:>2}] {}", marker, card.index, card.name);
        }
    }
}

impl Renderer for Terminal {
    fn render_loading(&mut self) {
        println!("Loading catalog...");
    }

    fn render_gallery(&mut self, cards: &[CardView]) {
        self.cards = cards.to_vec();
        println!("{} creatures loaded:", cards.len());
        self.print_cards();
    }

    fn render_load_error(&mut self, message: &str) {
        println!("!! {}", message);
    }

    fn set_card_selected(&mut self, index: usize, selected: bool) {
        if selected {
            self.selected.push(index);
        } else {
            self.selected.retain(|&i| i != index);
        }
        let names: Vec<_> = self
            .selected
            .iter()
            .filter_map(|&i| self.cards.get(i))
            .map(|c| c.name.as_str())
            .collect();
        println!("Selected: [{}]", names.join(", "));
    }

    fn set_battle_enabled(&mut self, enabled: bool) {
        if enabled {
            println!("Ready to battle. Type 'battle'.");
        }
    }

    fn show_notice(&mut self, notice: Notice) {
        println!("** {}", notice.message());
    }

    fn show_detail(&mut self, detail: &DetailView) {
        println!("== {} ==", detail.title);
        if let Some(sprite) = &detail.sprite_url {
            println!("  Sprite: {}", sprite);
        }
        for (label, value) in detail.rows() {
            println!("  {}: {}", label, value);
        }
        println!("(type 'close' to dismiss)");
    }

    fn hide_detail(&mut self) {
        println!("Details closed.");
    }

    fn render_battle(&mut self, battle: &BattleView) {
        println!("== Battle Results ==");
        println!("  Winner: {}", battle.winner);
        println!("  Moves Used:");
        for line in &battle.moves_used {
            println!("    {}", line);
        }
        println!("  Damage Caused:");
        for line in &battle.damage_caused {
            println!("    {}", line);
        }
    }

    fn show_error(&mut self, message: &str) {
        println!("!! {}", message);
    }
}

/// No audio backend here, so cries are just announced
struct AnnounceCry;

impl CryPlayer for AnnounceCry {
    fn play(&mut self, url: &str) -> Result<()> {
        println!("♪ {}", url);
        Ok(())
    }
}

fn print_help() {
    println!("Commands:");
    println!("  select <n>  - Select or deselect a creature");
    println!("  info <n>    - Show details for a creature");
    println!("  cry <n>     - Play a creature's cry");
    println!("  battle      - Battle the two selected creatures");
    println!("  close       - Close the detail view");
    println!("  list        - List the catalog");
    println!("  quit        - Exit");
}

fn parse_event(line: &str) -> Option<Result<UiEvent, String>> {
    let mut parts = line.split_whitespace();
    let cmd = parts.next()?;
    let index = parts.next().map(|s| s.parse::<usize>());

    let event = match (cmd, index) {
        ("select", Some(Ok(i))) => UiEvent::CardClicked(i),
        ("info", Some(Ok(i))) => UiEvent::InfoClicked(i),
        ("cry", Some(Ok(i))) => UiEvent::CryClicked(i),
        ("battle", None) => UiEvent::BattleClicked,
        ("close", None) => UiEvent::ModalCloseClicked,
        ("select" | "info" | "cry", _) => return Some(Err(format!("Usage: {} <n>", cmd))),
        _ => return Some(Err(format!("Unknown command: {}. Type help.", cmd))),
    };
    Some(Ok(event))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Pokedex Battle Gallery");
    println!("======================");

    let config = ApiConfig::default();
    let api = PokeApi::new(config.clone())?;
    let mut gallery = Gallery::new(&config, api, Terminal::default(), AnnounceCry);

    gallery.start().await?;
    if !gallery.session().is_ready() {
        return Ok(());
    }
    print_help();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => print_help(),
            "list" => gallery.renderer().print_cards(),
            _ => match parse_event(line) {
                Some(Ok(event)) => {
                    if let Err(e) = gallery.dispatch(event).await {
                        println!("Error: {:#}", e);
                    }
                }
                Some(Err(usage)) => println!("{}", usage),
                None => {}
            },
        }
    }

    Ok(())
}
