use airwise_core::best_hours;
use airwise_feed::Session;

pub fn run(session: &Session) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&session.forecast())?);
    Ok(())
}

pub fn run_best_hours(session: &Session, count: usize) -> anyhow::Result<()> {
    let windows = best_hours(&session.forecast(), count);
    println!("{}", serde_json::to_string_pretty(&windows)?);
    Ok(())
}
