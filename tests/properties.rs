//! Property tests for domain extraction, aggregation and report ordering.
use customer_domains::{aggregate, extract_domain, CustomerRecord, SortedDomainReport};
use proptest::prelude::*;

fn customer(email: String) -> CustomerRecord {
    CustomerRecord {
        first_name: "First".into(),
        last_name: "Last".into(),
        email,
        gender: "F".into(),
        ip_address: "10.0.0.1".into(),
    }
}

fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,4}@[a-c]{1,2}\\.(com|org)",
        "[a-z@.]{0,8}",
    ]
}

proptest! {
    #[test]
    fn extraction_is_total(email in ".*") {
        let at_count = email.matches('@').count();
        match extract_domain(&email) {
            Some(domain) => {
                prop_assert_eq!(at_count, 1);
                prop_assert!(!domain.is_empty());
                let suffix = format!("@{}", domain);
                prop_assert!(email.ends_with(&suffix));
            }
            None => {
                prop_assert!(at_count != 1 || email.ends_with('@'));
            }
        }
    }

    #[test]
    fn aggregation_ignores_record_order(
        (emails, shuffled) in prop::collection::vec(email_strategy(), 0..40)
            .prop_flat_map(|emails| {
                let shuffled = Just(emails.clone()).prop_shuffle();
                (Just(emails), shuffled)
            })
    ) {
        let records: Vec<_> = emails.into_iter().map(customer).collect();
        let permuted: Vec<_> = shuffled.into_iter().map(customer).collect();

        prop_assert_eq!(aggregate(&records), aggregate(&permuted));
    }

    #[test]
    fn report_is_sorted_and_counts_match(emails in prop::collection::vec(email_strategy(), 0..40)) {
        let records: Vec<_> = emails.iter().cloned().map(customer).collect();
        let report = SortedDomainReport::from_counts(&aggregate(&records));

        for pair in report.entries().windows(2) {
            prop_assert!(pair[0].domain < pair[1].domain);
        }
        for entry in report.entries() {
            let expected = emails
                .iter()
                .filter(|email| extract_domain(email) == Some(entry.domain.as_str()))
                .count() as u64;
            prop_assert_eq!(entry.count, expected);
        }
    }
}
