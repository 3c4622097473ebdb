//! Basic fields example
//!
//! Demonstrates:
//! - Strings with and without defaults
//! - Integers, floats and yes/no questions
//! - Picking one entry of a list
//!
//! Run with: cargo run -p promptkit-dialoguer --example basic_fields

use promptkit::Prompt;
use promptkit_dialoguer::DialoguerBackend;

fn main() -> anyhow::Result<()> {
    let prompt = Prompt::new(DialoguerBackend::new());

    let name = prompt.ask_string(&["What is your name?"])?;
    let city = prompt.ask_string(&["Where do you live?", "Berlin"])?;
    let age = prompt.ask_int("How old are you?", 30)?;
    let height = prompt.ask_float("How tall are you (m)?", 1.75)?;
    let student = prompt.ask_bool("Are you a student?")?;
    let editor = prompt.ask_from_list_string("Favourite editor", &["vim", "emacs", "helix"])?;
    let port = prompt.ask_from_list_int("Preferred port", &[80, 443, 8080])?;

    println!("{name} ({age}, {height} m) from {city}");
    println!("student: {student}, editor: {editor}, port: {port}");
    Ok(())
}
