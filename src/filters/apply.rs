use crate::models::{SearchOptions, WorkItem};

/// Check an item against the source, project, and date filters in `options`
///
/// All present filters must pass:
/// - sources: item source is one of the listed sources
/// - projects: item project contains any listed value (case-insensitive)
/// - start/end date: inclusive bounds on the item timestamp
///
/// Noise classification happens before this and is not repeated here.
pub fn passes_filters(item: &WorkItem, options: &SearchOptions) -> bool {
    if !options.sources.is_empty() && !options.sources.contains(&item.source) {
        return false;
    }

    if !options.projects.is_empty() && !match_project(item, &options.projects) {
        return false;
    }

    if let Some(start) = options.start_date
        && item.timestamp < start
    {
        return false;
    }

    if let Some(end) = options.end_date
        && item.timestamp > end
    {
        return false;
    }

    true
}

/// Match project name (case-insensitive substring match against any value)
fn match_project(item: &WorkItem, values: &[String]) -> bool {
    let Some(project) = item.project.as_deref() else {
        return false;
    };
    let lower_project = project.to_lowercase();

    values.iter().any(|value| lower_project.contains(&value.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;
    use crate::models::SourceType;

    fn create_test_item(
        source: SourceType,
        project: Option<&str>,
        timestamp: DateTime<Utc>,
    ) -> WorkItem {
        WorkItem {
            source,
            timestamp,
            title: "test".to_string(),
            description: None,
            project: project.map(String::from),
            metadata: None,
        }
    }

    #[test]
    fn test_no_filters_passes() {
        let item = create_test_item(SourceType::Git, None, Utc::now());
        assert!(passes_filters(&item, &SearchOptions::new("q")));
    }

    #[test]
    fn test_source_filter() {
        let git = create_test_item(SourceType::Git, None, Utc::now());
        let claude = create_test_item(SourceType::Claude, None, Utc::now());
        let options =
            SearchOptions { sources: vec![SourceType::Claude], ..SearchOptions::new("q") };

        assert!(!passes_filters(&git, &options));
        assert!(passes_filters(&claude, &options));
    }

    #[test]
    fn test_project_filter_case_insensitive_substring() {
        let item = create_test_item(SourceType::Git, Some("My-API-Server"), Utc::now());

        let options =
            SearchOptions { projects: vec!["api".to_string()], ..SearchOptions::new("q") };
        assert!(passes_filters(&item, &options));

        let options =
            SearchOptions { projects: vec!["web".to_string()], ..SearchOptions::new("q") };
        assert!(!passes_filters(&item, &options));
    }

    #[test]
    fn test_project_filter_any_of() {
        let item = create_test_item(SourceType::Git, Some("frontend"), Utc::now());
        let options = SearchOptions {
            projects: vec!["backend".to_string(), "FRONT".to_string()],
            ..SearchOptions::new("q")
        };
        assert!(passes_filters(&item, &options));
    }

    #[test]
    fn test_project_filter_requires_project() {
        let item = create_test_item(SourceType::Git, None, Utc::now());
        let options =
            SearchOptions { projects: vec!["api".to_string()], ..SearchOptions::new("q") };
        assert!(!passes_filters(&item, &options));
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let item = create_test_item(SourceType::Git, None, ts);

        let exact = SearchOptions {
            start_date: Some(ts),
            end_date: Some(ts),
            ..SearchOptions::new("q")
        };
        assert!(passes_filters(&item, &exact));

        let after = SearchOptions {
            start_date: Some(Utc.with_ymd_and_hms(2025, 1, 16, 0, 0, 0).unwrap()),
            ..SearchOptions::new("q")
        };
        assert!(!passes_filters(&item, &after));

        let before = SearchOptions {
            end_date: Some(Utc.with_ymd_and_hms(2025, 1, 14, 0, 0, 0).unwrap()),
            ..SearchOptions::new("q")
        };
        assert!(!passes_filters(&item, &before));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let ts = Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap();
        let item = create_test_item(SourceType::Git, Some("api"), ts);
        let options = SearchOptions {
            sources: vec![SourceType::Git],
            projects: vec!["api".to_string()],
            start_date: Some(Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()),
            ..SearchOptions::new("q")
        };

        assert!(!passes_filters(&item, &options)); // Date fails
    }
}
