pub fn run() -> anyhow::Result<()> {
    println!("airwise {}", env!("CARGO_PKG_VERSION"));
    println!("Air-quality readings and outdoor-activity assistant");
    Ok(())
}
