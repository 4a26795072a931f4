use airwise_core::AqiCategory;

pub fn run(aqi: i64) -> anyhow::Result<()> {
    let category = AqiCategory::try_from_index(aqi)?;
    let output = serde_json::json!({
        "aqi": aqi,
        "category": category,
        "info": category.info(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
