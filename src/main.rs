//! DC20 Forge - Entry Point
//!
//! Interactive shell around one `CharacterSheet` aggregate. The shell owns
//! no rules: every command calls an aggregate or store method and re-polls
//! the query methods for display.

use clap::Parser;
use dc20_forge::core::error::Result;
use dc20_forge::core::types::{Attribute, TrainingTier};
use dc20_forge::display::render_sheet;
use dc20_forge::equipment::presets::inventory_preset;
use dc20_forge::sheet::character::CharacterSheet;
use dc20_forge::spells::book::available_spells;
use dc20_forge::store::CharacterStore;

use std::io::{self, Write};
use std::path::PathBuf;

/// DC20 character creator
#[derive(Parser, Debug)]
#[command(name = "dc20-forge")]
#[command(about = "Build DC20 characters and export their sheets")]
struct Args {
    /// Directory holding saved character files
    #[arg(long, default_value = "characters")]
    characters_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dc20_forge=info")
        .init();

    let args = Args::parse();
    let store = CharacterStore::open(&args.characters_dir)?;
    let mut sheet = CharacterSheet::new();

    println!("\n=== DC20 FORGE ===");
    println!("Character build calculator for the DC20 ruleset");
    println!();
    print_help();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "help" || input == "h" {
            print_help();
            continue;
        }

        if input == "show" || input == "s" {
            print!("{}", render_sheet(&sheet.derive_sheet()));
            println!("\nPoints remaining: {}", sheet.points_remaining());
            let budget = sheet.budget_status();
            print!(
                "Skill slots: {} used of {}",
                budget.used_slots, budget.max_slots
            );
            if budget.is_overspent() {
                println!("  (OVER-ALLOCATED by {})", -budget.remaining);
            } else {
                println!();
            }
            continue;
        }

        if let Some(rest) = input.strip_prefix("set ") {
            handle_set(&mut sheet, rest);
            continue;
        }

        if let Some(rest) = input.strip_prefix("inv ") {
            sheet.inventory = rest.to_string();
            println!("Inventory set.");
            continue;
        }

        if let Some(rest) = input.strip_prefix("attr ") {
            handle_attr(&mut sheet, rest);
            continue;
        }

        if let Some(rest) = input.strip_prefix("train ") {
            handle_train(&mut sheet, rest);
            continue;
        }

        if input == "reset-skills" {
            sheet.reset_all_trainings();
            println!("All skill trainings reset.");
            continue;
        }

        if input == "spells" {
            let spells = available_spells(&sheet.class_name, sheet.level);
            if spells.is_empty() {
                println!("No spells available for this class.");
            } else {
                for spell in spells {
                    println!("  {} (Lvl {}, {})", spell.name, spell.level, spell.school.name());
                }
            }
            continue;
        }

        if let Some(name) = input.strip_prefix("learn ") {
            sheet.add_spell(name.trim());
            println!("Known spells: {}", sheet.selected_spells().join(", "));
            continue;
        }

        if let Some(name) = input.strip_prefix("forget ") {
            sheet.remove_spell(name.trim());
            println!("Known spells: {}", sheet.selected_spells().join(", "));
            continue;
        }

        if input == "save" {
            match store.save(&sheet.derive_sheet()) {
                Ok(path) => println!("Saved to {}", path.display()),
                Err(e) => println!("Save failed: {}", e),
            }
            continue;
        }

        if let Some(name) = input.strip_prefix("load ") {
            match store.load(name.trim()) {
                Ok(record) => {
                    sheet.load_from_record(&record);
                    println!("Loaded {}.", record.name);
                }
                Err(e) => println!("Load failed: {}", e),
            }
            continue;
        }

        if input == "list" {
            let characters = store.list();
            if characters.is_empty() {
                println!("No saved characters.");
            } else {
                for (name, path) in characters {
                    println!("  {} ({})", name, path.display());
                }
            }
            continue;
        }

        if let Some(name) = input.strip_prefix("delete ") {
            match store.delete(name.trim()) {
                Ok(true) => println!("Deleted."),
                Ok(false) => println!("No such character."),
                Err(e) => println!("Delete failed: {}", e),
            }
            continue;
        }

        println!("Unknown command. Type 'help' for the command list.");
    }

    println!("\nGoodbye!");
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  show / s               - Render the current sheet");
    println!("  set <field> <value>    - name, player, ancestry, background, class, subclass, level");
    println!("  inv <text>             - Set the inventory line");
    println!("  attr <name> +|-        - Spend or refund a point-buy point");
    println!("  train <skill> <tier>   - None, Trained, or Expert");
    println!("  reset-skills           - Clear all skill trainings");
    println!("  spells / learn / forget - Spell selection (casters only)");
    println!("  save / load <name>     - Persist or restore a character");
    println!("  list / delete <name>   - Manage saved characters");
    println!("  quit / q               - Exit");
}

fn handle_set(sheet: &mut CharacterSheet, rest: &str) {
    let Some((field, value)) = rest.split_once(' ') else {
        println!("Usage: set <field> <value>");
        return;
    };
    let value = value.trim().to_string();
    match field {
        "name" => sheet.name = value,
        "player" => sheet.player_name = value,
        "ancestry" => sheet.ancestry = value,
        "background" => sheet.background = value,
        "subclass" => sheet.subclass = value,
        "class" => {
            // Class change refills the inventory line with the class preset.
            if let Some(preset) = inventory_preset(&value) {
                sheet.inventory = preset.to_string();
            }
            sheet.class_name = value;
        }
        "level" => match value.parse::<i32>() {
            Ok(level) if level >= 1 => sheet.level = level,
            _ => println!("Level must be a positive integer."),
        },
        _ => println!("Unknown field '{}'.", field),
    }
}

fn handle_attr(sheet: &mut CharacterSheet, rest: &str) {
    let Some((name, sign)) = rest.split_once(' ') else {
        println!("Usage: attr <name> +|-");
        return;
    };
    let Some(attr) = Attribute::parse(name) else {
        println!("Unknown attribute '{}'.", name);
        return;
    };
    let delta = match sign.trim() {
        "+" => 1,
        "-" => -1,
        _ => {
            println!("Usage: attr <name> +|-");
            return;
        }
    };
    if sheet.adjust_attribute(attr, delta) {
        println!(
            "{} is now {} ({} points remaining).",
            attr.name(),
            sheet.attribute(attr),
            sheet.points_remaining()
        );
    } else {
        println!("No points for that adjustment.");
    }
}

fn handle_train(sheet: &mut CharacterSheet, rest: &str) {
    let Some((skill, tier_name)) = rest.rsplit_once(' ') else {
        println!("Usage: train <skill> <tier>");
        return;
    };
    let Some(tier) = TrainingTier::parse(tier_name.trim()) else {
        println!("Tier must be None, Trained, or Expert.");
        return;
    };
    if sheet.set_training(skill.trim(), tier) {
        let budget = sheet.budget_status();
        println!(
            "{} -> {} ({} of {} slots used).",
            skill.trim(),
            tier.name(),
            budget.used_slots,
            budget.max_slots
        );
        if budget.is_overspent() {
            println!("Warning: skill slots over-allocated by {}.", -budget.remaining);
        }
    } else {
        println!("Unknown skill '{}'.", skill.trim());
    }
}
