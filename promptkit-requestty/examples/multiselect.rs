//! Multiselect example for the requestty backend.
//!
//! Run with: cargo run -p promptkit-requestty --example multiselect

use promptkit::Prompt;
use promptkit_requestty::RequesttyBackend;

fn main() -> anyhow::Result<()> {
    let prompt = Prompt::new(RequesttyBackend::new());
    let name = prompt.ask_string(&["Project name", "demo"])?;
    let features = prompt.ask_from_list_string_multiple(
        "Features",
        ["logging", "metrics", "tracing", "tls"],
    )?;
    println!("{name}: {features:?}");
    Ok(())
}
