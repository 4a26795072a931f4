use airwise_feed::Session;

pub fn run(session: &Session) -> anyhow::Result<()> {
    let days: Vec<serde_json::Value> = session
        .history()
        .iter()
        .map(|snapshot| {
            serde_json::json!({
                "date": snapshot.timestamp().date_naive().to_string(),
                "category": snapshot.category(),
                "snapshot": snapshot,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&days)?);
    Ok(())
}
