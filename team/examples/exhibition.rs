//! Exhibition Battle Example
//!
//! Builds a player team from the starter catalog, generates an enemy team
//! for the chosen difficulty, and plays the battle turn by turn, printing
//! every event and the cumulative record at the end.
//!
//! ```text
//! cargo run -p skirmish-team --example exhibition -- [seed] [difficulty] [terrain]
//! RUST_LOG=skirmish_battle=debug cargo run -p skirmish-team --example exhibition
//! ```

use anyhow::{Context, Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use skirmish_battle::query::weaknesses;
use skirmish_battle::{
    Battle, BattleConfig, DecisionProvider, GreedyProvider, RecordLog, SideId, Terrain,
};
use skirmish_team::{Catalog, Difficulty, TeamBuilder, generate_enemy_team};

fn parse_terrain(name: &str) -> Option<Terrain> {
    Terrain::ALL
        .into_iter()
        .find(|t| t.as_str().eq_ignore_ascii_case(name) || format!("{t:?}").eq_ignore_ascii_case(name))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(raw) => raw.parse().context("seed must be an unsigned integer")?,
        None => 2024,
    };
    let difficulty = match args.next() {
        Some(raw) => match Difficulty::from_name(&raw) {
            Some(d) => d,
            None => bail!("unknown difficulty: {raw}"),
        },
        None => Difficulty::Normal,
    };
    let terrain = match args.next() {
        Some(raw) => parse_terrain(&raw).with_context(|| format!("unknown terrain: {raw}"))?,
        None => Terrain::ElectricTerrain,
    };

    let catalog = Catalog::starter();
    println!("Available species:");
    for (i, species) in catalog.species.iter().enumerate() {
        println!("  {}. {species}", i + 1);
    }

    let mut builder = TeamBuilder::new(&catalog).at_level(8);
    builder.pick_named("Pikachu")?;
    builder.pick_named("Charmander")?;
    builder.pick_named("Squirtle")?;
    builder.add_item("Super Potion")?;
    builder.add_item("Full Heal")?;
    let mut player = builder.build()?;

    let mut rng = StdRng::seed_from_u64(seed);
    let mut enemy = generate_enemy_team(&catalog, &player, difficulty, &mut rng)?;
    enemy.add_item(catalog.item("Potion")?);

    println!("\nDifficulty: {difficulty}");
    println!("Terrain: {}", terrain.description());
    for member in enemy.members() {
        let elements: Vec<_> = member.elements().collect();
        let weak: Vec<String> = weaknesses(&elements).iter().map(ToString::to_string).collect();
        println!("Enemy {} (Lv. {}) is weak to: {}", member.name, member.level, weak.join(", "));
    }

    let config = BattleConfig::default().with_seed(seed);
    let mut record = RecordLog::new();
    let mut player_ai = GreedyProvider::new();
    let mut enemy_ai = GreedyProvider::default();

    let result = {
        let mut battle = Battle::new(&mut player, &mut enemy, terrain.environment(), config);
        battle.start()?;

        while !battle.state().is_concluded() {
            let player_action = player_ai.choose(&battle.view(SideId::Player));
            let enemy_action = enemy_ai.choose(&battle.view(SideId::Enemy));
            let report = battle.play_turn(player_action, enemy_action)?;

            println!("\n-- Turn {} --", report.turn);
            for message in report.messages() {
                println!("{message}");
            }
        }
        battle.result()
    };

    record.record(&result);
    println!("\n{record}");

    player.reset();
    println!("\nYour team after the battle:");
    for member in player.members() {
        println!(
            "  {} Lv. {} ({}/{} XP)",
            member.name, member.level, member.experience, member.experience_to_next
        );
    }
    Ok(())
}
