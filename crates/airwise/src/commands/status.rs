use airwise_core::{AirQualitySnapshot, AqiCategory, CategoryInfo};
use airwise_feed::Session;
use serde::Serialize;

#[derive(Serialize)]
struct StatusReport {
    snapshot: Option<AirQualitySnapshot>,
    category: Option<AqiCategory>,
    info: Option<CategoryInfo>,
    refreshed_at: Option<String>,
}

fn report(session: &Session) -> StatusReport {
    let snapshot = session.snapshot();
    let category = snapshot.as_ref().map(|s| s.category());

    StatusReport {
        category,
        info: category.map(AqiCategory::info),
        snapshot,
        refreshed_at: session.refreshed_at().map(|t| t.to_rfc3339()),
    }
}

pub fn run(session: &Session) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&report(session))?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use airwise_feed::SyntheticFeed;

    #[test]
    fn test_report_includes_category_metadata() {
        let session = Session::new(SyntheticFeed::seeded(12));
        let json = serde_json::to_value(report(&session)).unwrap();

        let aqi = json["snapshot"]["aqi"].as_u64().unwrap() as u32;
        let category = airwise_core::classify(aqi);
        assert_eq!(json["info"]["label"], category.label());
        assert_eq!(json["info"]["color_token"], category.color_token());
        assert_eq!(json["snapshot"]["source"], "sensor-fusion");
        assert!(json["refreshed_at"].is_string());
    }

    #[test]
    fn test_report_without_snapshot() {
        let session = Session::empty(SyntheticFeed::seeded(12));
        let json = serde_json::to_value(report(&session)).unwrap();
        assert!(json["snapshot"].is_null());
        assert!(json["category"].is_null());
    }
}
