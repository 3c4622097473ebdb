//! Multiselect example
//!
//! Demonstrates:
//! - Toggling items on and off by picking them repeatedly
//! - Finishing with the "Done" entry at the top of the list
//!
//! Run with: cargo run -p promptkit-dialoguer --example multiselect

use promptkit::Prompt;
use promptkit_dialoguer::DialoguerBackend;

fn main() -> anyhow::Result<()> {
    let prompt = Prompt::new(DialoguerBackend::new()).with_multi_select_label("Toppings");
    let toppings = prompt.select_multiple(["cheese", "ham", "mushrooms", "pineapple", "olives"])?;
    println!("{toppings:#?}");
    Ok(())
}
