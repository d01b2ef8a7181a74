pub fn run() -> anyhow::Result<()> {
    println!("sessiondisplay {}", env!("CARGO_PKG_VERSION"));
    println!("Folds logged LLM sessions into display groups");
    Ok(())
}
