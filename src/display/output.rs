use colored::*;
use lol_data_fetcher::ChampionSkin;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tabled::{settings::Style, Table, Tabled};

const WRAP_WIDTH: usize = 78;

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

#[derive(Tabled)]
struct ChampionRow {
    name: String,
    title: String,
}

#[derive(Tabled)]
struct ItemRow {
    name: String,
    gold: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

pub fn print_champion_list(champions: &[Value]) {
    let rows: Vec<ChampionRow> = champions
        .iter()
        .map(|champion| ChampionRow {
            name: text_field(champion, "name"),
            title: text_field(champion, "title"),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\nTotal: {} champions", champions.len());
}

pub fn print_champion_detail(champion: &Value, show_skills: bool) {
    println!(
        "\n{} - {}",
        text_field(champion, "name").bold().cyan(),
        text_field(champion, "title")
    );
    println!("{}", "=".repeat(50).cyan());

    if let Some(lore) = champion.get("lore").and_then(Value::as_str) {
        println!("\nLore:");
        println!("{}", word_wrap(lore, 0));
    }

    if !show_skills {
        return;
    }

    if let Some(passive) = champion.get("passive") {
        println!("\n{} {}", "Passive:".bold(), text_field(passive, "name"));
        println!(
            "{}",
            word_wrap(&strip_html(&text_field(passive, "description")), 3)
        );
    }

    if let Some(spells) = champion.get("spells").and_then(Value::as_array) {
        println!("\n{}'s Skills:", text_field(champion, "name"));
        println!("{}", "-".repeat(50));
        for (idx, spell) in spells.iter().enumerate() {
            println!("\n{}. {}", idx + 1, text_field(spell, "name").bold());
            println!(
                "{}",
                word_wrap(&strip_html(&text_field(spell, "description")), 3)
            );
        }
    }
}

pub fn print_item_list(items: &[Value]) {
    let rows: Vec<ItemRow> = items
        .iter()
        .map(|item| ItemRow {
            name: text_field(item, "name"),
            gold: format!("{}g", gold_total(item)),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\nTotal: {} items", items.len());
}

pub fn print_spell_list(spells: &[Value]) {
    for spell in spells {
        println!(
            "{:<20} - {}",
            text_field(spell, "name"),
            strip_html(&text_field(spell, "description"))
        );
    }

    println!("\nTotal: {} summoner spells", spells.len());
}

pub fn print_skin_list(champion: &str, skins: &[ChampionSkin], show_urls: bool) {
    println!("\n{}'s Skins:", champion.bold().cyan());
    println!("{}", "=".repeat(50).cyan());

    for skin in skins {
        println!("\n{}", skin.name);
        if show_urls {
            println!("  Splash: {}", skin.splash_url);
            println!("  Loading: {}", skin.loading_url);
        }
    }

    println!("\nTotal: {} skins", skins.len());
}

fn text_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn gold_total(item: &Value) -> i64 {
    item.get("gold")
        .and_then(|gold| gold.get("total"))
        .and_then(Value::as_i64)
        .unwrap_or(0)
}

fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Wrap `text` to `WRAP_WIDTH` columns, indenting every line by `indent`
/// spaces.
fn word_wrap(text: &str, indent: usize) -> String {
    let prefix = " ".repeat(indent);
    let width = WRAP_WIDTH.saturating_sub(indent).max(1);

    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(format!("{}{}", prefix, line));
            line.clear();
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(format!("{}{}", prefix, line));
    }

    lines.join("\n")
}
