use holdem_engine::api::{build_table_view, execute_on, Command, CommandResponse};
use holdem_engine::domain::{TableConfig, TableId};
use holdem_engine::engine::TableManager;
use holdem_engine::eval::{describe_hand, evaluate_best_hand, StandardEvaluator};
use holdem_engine::infra::{DeterministicRng, ShuffledDecks};
use holdem_engine::TableEngine;

/// Один шаг сценария: команда и подпись для вывода.
struct Step {
    label: String,
    command: Command,
}

fn action(label: impl Into<String>, name: &str, amount: u64) -> Step {
    Step {
        label: label.into(),
        command: Command::PerformAction {
            action: name.to_string(),
            amount,
        },
    }
}

fn main() {
    env_logger::builder().format_target(false).init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(42);
    println!("holdem_dev_cli: seed = {seed}");

    let manager = TableManager::new();
    let showdown_table = manager.add_table(new_table(seed));
    let fold_table = manager.add_table(new_table(seed + 1));

    println!();
    println!("================ HAND TO SHOWDOWN ================");
    let mut steps = seat_and_start();
    steps.push(action("alice raises to 3", "raise", 3));
    steps.push(action("bob calls", "call", 0));
    for street in ["flop", "turn", "river"] {
        steps.push(action(format!("alice checks on the {street}"), "check", 0));
        steps.push(action(format!("bob checks on the {street}"), "check", 0));
    }
    run(&manager, showdown_table, steps);

    println!();
    println!("================ HAND WON BY FOLD ================");
    let mut steps = seat_and_start();
    steps.push(action("alice raises to 10", "raise", 10));
    steps.push(action("bob folds", "fold", 0));
    run(&manager, fold_table, steps);

    println!();
    println!("================ REJECTED ACTION ================");
    run(
        &manager,
        fold_table,
        vec![action("check after the hand ended", "check", 0)],
    );
}

fn new_table(seed: u64) -> TableEngine {
    TableEngine::new(
        TableConfig::default(),
        ShuffledDecks::new(DeterministicRng::from_seed(seed)),
        StandardEvaluator,
    )
}

fn seat_and_start() -> Vec<Step> {
    vec![
        Step {
            label: "seat alice".into(),
            command: Command::AddPlayer {
                player_id: "al-capone".into(),
                name: "alice".into(),
            },
        },
        Step {
            label: "seat bob".into(),
            command: Command::AddPlayer {
                player_id: "bob-marley".into(),
                name: "bob".into(),
            },
        },
        Step {
            label: "start".into(),
            command: Command::Start,
        },
    ]
}

fn run(manager: &TableManager, table_id: TableId, steps: Vec<Step>) {
    for step in steps {
        print!("[table {table_id}] {:<28} -> ", step.label);
        match execute_on(manager, table_id, step.command) {
            Ok(CommandResponse::HandFinished { winner, pot, .. }) => {
                println!("hand finished, {} wins {}", winner.name, pot);
            }
            Ok(CommandResponse::TableState(view)) => {
                println!("state {:?}, pot {}", view.state, view.pot);
            }
            Err(err) => println!("rejected: {err}"),
        }
    }

    let result = manager.with_table(table_id, |engine| {
        let cards = engine.winner_hand();
        if cards.is_empty() {
            println!("no showdown");
        } else if let Some(best) = evaluate_best_hand(cards) {
            println!("winning hand: {}", describe_hand(best.rank));
        }
        Ok(build_table_view(engine, Some("al-capone")))
    });

    match result.map(|view| serde_json::to_string_pretty(&view)) {
        Ok(Ok(json)) => println!("{json}"),
        Ok(Err(err)) => eprintln!("failed to serialize table view: {err}"),
        Err(err) => eprintln!("table {table_id} unavailable: {err}"),
    }
}
