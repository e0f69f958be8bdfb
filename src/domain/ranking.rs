//! Ordering and truncation of an aggregated website collection.

use thiserror::Error;

use crate::domain::entities::{SortKey, WebsiteCollection};

/// Requested limit exceeds the number of records actually gathered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("limit {limit} can't be greater than the total records {total}")]
pub struct LimitExceeded {
    pub limit: usize,
    pub total: usize,
}

/// Sorts websites ascending by `key`.
///
/// The sort is stable: records with equal keys keep their relative order.
pub fn sort_websites(key: SortKey, websites: &mut WebsiteCollection) {
    websites
        .as_mut_slice()
        .sort_by(|a, b| key.compare(a, b));
}

/// Keeps the first `limit` websites of an already sorted collection.
///
/// # Errors
///
/// Returns [`LimitExceeded`] when `limit` is larger than the collection; the
/// collection is never clamped.
pub fn limit_websites(
    limit: usize,
    mut websites: WebsiteCollection,
) -> Result<WebsiteCollection, LimitExceeded> {
    if limit > websites.len() {
        return Err(LimitExceeded {
            limit,
            total: websites.len(),
        });
    }

    websites.truncate(limit);
    Ok(websites)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Website;

    fn sample() -> WebsiteCollection {
        WebsiteCollection::new(vec![
            Website::new("www.example.com/c", 3000, 0.2),
            Website::new("www.example.com/a", 1000, 0.9),
            Website::new("www.example.com/d", 500, 0.5),
            Website::new("www.example.com/b", 2000, 0.1),
        ])
    }

    #[test]
    fn test_sort_by_views() {
        let mut websites = WebsiteCollection::new(vec![
            Website::new("http://localhost:8080/getData", 2000, 0.1),
            Website::new("http://localhost:8080/getData", 1000, 0.2),
        ]);

        sort_websites(SortKey::Views, &mut websites);

        assert_eq!(
            websites.into_vec(),
            vec![
                Website::new("http://localhost:8080/getData", 1000, 0.2),
                Website::new("http://localhost:8080/getData", 2000, 0.1),
            ]
        );
    }

    #[test]
    fn test_sort_by_relevance_score() {
        let mut websites = WebsiteCollection::new(vec![
            Website::new("http://localhost:8080/getData", 1000, 0.2),
            Website::new("http://localhost:8080/getData", 2000, 0.1),
        ]);

        sort_websites(SortKey::RelevanceScore, &mut websites);

        assert_eq!(
            websites.into_vec(),
            vec![
                Website::new("http://localhost:8080/getData", 2000, 0.1),
                Website::new("http://localhost:8080/getData", 1000, 0.2),
            ]
        );
    }

    #[test]
    fn test_sorted_output_is_non_decreasing() {
        for key in [SortKey::Views, SortKey::RelevanceScore] {
            let mut websites = sample();
            sort_websites(key, &mut websites);

            for pair in websites.as_slice().windows(2) {
                assert_ne!(
                    key.compare(&pair[0], &pair[1]),
                    std::cmp::Ordering::Greater,
                    "{key} out of order: {:?}",
                    pair
                );
            }
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut websites = WebsiteCollection::new(vec![
            Website::new("first", 10, 0.3),
            Website::new("second", 10, 0.1),
            Website::new("third", 5, 0.2),
        ]);

        sort_websites(SortKey::Views, &mut websites);

        let urls: Vec<_> = websites.as_slice().iter().map(|w| w.url.as_str()).collect();
        assert_eq!(urls, vec!["third", "first", "second"]);
    }

    #[test]
    fn test_sort_empty_collection() {
        let mut websites = WebsiteCollection::default();
        sort_websites(SortKey::Views, &mut websites);
        assert!(websites.is_empty());
    }

    #[test]
    fn test_limit_returns_prefix() {
        let mut websites = sample();
        sort_websites(SortKey::Views, &mut websites);

        let limited = limit_websites(2, websites).unwrap();

        let urls: Vec<_> = limited.as_slice().iter().map(|w| w.url.as_str()).collect();
        assert_eq!(urls, vec!["www.example.com/d", "www.example.com/a"]);
    }

    #[test]
    fn test_limit_equal_to_size_keeps_everything() {
        let limited = limit_websites(4, sample()).unwrap();
        assert_eq!(limited, sample());
    }

    #[test]
    fn test_limit_greater_than_size_is_rejected() {
        let websites = WebsiteCollection::new(vec![
            Website::new("http://localhost:8080/getData", 1000, 0.2),
            Website::new("http://localhost:8080/getData", 2000, 0.1),
        ]);

        let err = limit_websites(10, websites).unwrap_err();

        assert_eq!(err, LimitExceeded { limit: 10, total: 2 });
        assert_eq!(
            err.to_string(),
            "limit 10 can't be greater than the total records 2"
        );
    }

    #[test]
    fn test_limit_does_not_reorder() {
        let limited = limit_websites(3, sample()).unwrap();

        let urls: Vec<_> = limited.as_slice().iter().map(|w| w.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["www.example.com/c", "www.example.com/a", "www.example.com/d"]
        );
    }
}
