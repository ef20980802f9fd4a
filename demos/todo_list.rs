//! A to-do list that indexes its tasks in a prefix tree.
//!
//! Tasks are upper-cased before they reach the tree, the same way the list's
//! input box treats them. Set `PREFIX_TREE_REMOVAL=corrected` to keep sibling
//! tasks around when a task is closed.
use prefix_tree::{PrefixTree, TrieConfig};
use tracing::{info, Level};

const SAMPLE_TASKS: [&str; 4] = ["HIT THE GYM", "PAY BILLS", "MEET GEORGE", "READ A BOOK"];

fn add_task(tree: &mut PrefixTree, input: &str) {
    let task = input.to_uppercase();
    if task.is_empty() {
        info!("ignoring empty task");
        return;
    }
    tree.insert(&task);
    info!(%task, "added task");
}

fn search(tree: &PrefixTree, input: &str) -> Vec<String> {
    let matches = tree.find_by_prefix(&input.to_uppercase());
    info!(query = input, matches = matches.len(), "searched tasks");
    matches
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    let config = TrieConfig::from_env()?;
    let mut tree = PrefixTree::with_config(config);
    tree.extend(SAMPLE_TASKS);

    add_task(&mut tree, "pay rent");
    add_task(&mut tree, "");

    println!("All tasks:");
    for task in tree.find_by_prefix("") {
        println!("  {}", task);
    }

    println!("\nTasks starting with \"pay\":");
    for task in search(&tree, "pay") {
        println!("  {}", task);
    }

    // Closing a task removes it from the index
    tree.remove("PAY BILLS");

    println!("\nAfter closing \"PAY BILLS\":");
    for task in search(&tree, "pay") {
        println!("  {}", task);
    }
    println!("  PAY RENT indexed: {}", tree.contains_word("PAY RENT"));

    Ok(())
}
