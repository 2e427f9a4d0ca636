//! Simple CLI demo playing the role of the UI layer.
//!
//! Enters a store scope, reads the list through the state accessor,
//! creates an item with an id from the next-id accessor, toggles and
//! removes items, and shows what happens to an accessor once the scope
//! has ended.

use reducible_runtime::{Scope, Store};
use std::sync::Arc;
use todo::types::TodoId;
use todo::{TodoAction, TodoEnvironment, TodoItem, TodoList, TodoReducer};

fn print_list(list: &TodoList) {
    for item in list {
        let mark = if item.done { "✓" } else { " " };
        println!("  [{mark}] {} {}", item.id, item.text);
    }
    println!("  {}/{} done", list.done_count(), list.len());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Todo Demo ===\n");

    let seed = TodoList::seed();
    let env = TodoEnvironment::seeded(&seed);
    let store = Arc::new(Store::new(seed, TodoReducer::new(), env));

    let scope = Scope::new();

    {
        let _guard = scope.enter(Arc::clone(&store));

        let list = scope.state().await?;
        println!("Seeded list:");
        print_list(&list);

        // Create: fresh id from the sequence, then dispatch
        let id = TodoId::new(scope.next_id()?);
        let dispatch = scope.dispatcher()?;
        println!("\nCreating 'write tests' with id {id}...");
        dispatch
            .send(TodoAction::Create {
                todo: TodoItem::new(id, "write tests"),
            })
            .await?;

        println!("Toggling item 3...");
        dispatch
            .send(TodoAction::Toggle { id: TodoId::new(3) })
            .await?;

        println!("Removing item 1...");
        dispatch
            .send(TodoAction::Remove { id: TodoId::new(1) })
            .await?;

        let list = scope.state().await?;
        println!("\nCurrent list:");
        print_list(&list);
    }

    // The guard is gone, so the scope is inactive again.
    match scope.state().await {
        Err(err) => println!("\nAfter the scope ends: {err}"),
        Ok(_) => unreachable!("scope must be inactive after its guard drops"),
    }

    println!("\n=== Demo Complete ===");
    Ok(())
}
