#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorCode};
    use crate::models::{Candidate, CandidatePayload};
    use crate::statistics::{average_length, compute_statistics, format_percentage, length_extremes, to_fixed_tenths};
    use crate::validation::{missing_fields, validate_candidate, ValidationError, REQUIRED_FIELDS_MESSAGE};

    fn candidate(id: u64, name: &str, description: &str, party: &str) -> Candidate {
        Candidate {
            id,
            name: name.into(),
            description: description.into(),
            image: format!("https://picsum.photos/200/200?random={id}"),
            party: party.into(),
        }
    }

    fn by_party(parties: &[&str]) -> Vec<Candidate> {
        parties.iter().enumerate()
            .map(|(i, p)| candidate(i as u64 + 1, &format!("Name {i}"), "Some description.", p))
            .collect()
    }

    #[test]
    fn test_empty_input() {
        let report = compute_statistics(&[]);
        assert_eq!(report.total_candidates, 0);
        assert_eq!(report.party_count, 0);
        assert_eq!(report.most_common_party, "None");
        assert_eq!(report.most_common_party_count, 0);
        assert_eq!(report.avg_description_length, 0);
        assert!(report.party_distribution.is_empty());
        assert_eq!(report.longest_description, "");
        assert_eq!(report.shortest_description, "");
        assert_eq!(report.longest_name, "");
        assert_eq!(report.shortest_name, "");
        assert!(report.recent_candidates.is_empty());
    }

    #[test]
    fn test_distribution_counts_and_percentages() {
        let report = compute_statistics(&by_party(&["PSD", "PNL", "PSD", "USR", "PSD", "PNL"]));
        let shares: Vec<_> = report.party_distribution.iter()
            .map(|s| (s.party.as_str(), s.count, s.percentage.as_str()))
            .collect();

        assert_eq!(shares, vec![("PSD", 3, "50.0"), ("PNL", 2, "33.3"), ("USR", 1, "16.7")]);
        assert_eq!(report.party_count, 3);
        assert_eq!(report.most_common_party, "PSD");
        assert_eq!(report.most_common_party_count, 3);

        let counted: usize = report.party_distribution.iter().map(|s| s.count).sum();
        assert_eq!(counted, report.total_candidates);

        let percent: f64 = report.party_distribution.iter()
            .map(|s| s.percentage.parse::<f64>().unwrap())
            .sum();
        assert!((percent - 100.0).abs() <= 0.1 * report.party_count as f64);
    }

    #[test]
    fn test_equal_counts_keep_first_seen_order() {
        let report = compute_statistics(&by_party(&["AUR", "REPER", "PMP", "REPER", "AUR", "PMP", "UDMR"]));
        let order: Vec<_> = report.party_distribution.iter().map(|s| s.party.as_str()).collect();
        assert_eq!(order, vec!["AUR", "REPER", "PMP", "UDMR"]);
        assert_eq!(report.most_common_party, "AUR");

        let report = compute_statistics(&by_party(&["B", "A", "A"]));
        let order: Vec<_> = report.party_distribution.iter().map(|s| s.party.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_distribution_sorted_descending() {
        let report = compute_statistics(&by_party(&["X", "Y", "Y", "Z", "Z", "Z", "W", "W"]));
        assert!(report.party_distribution.windows(2).all(|w| w[0].count >= w[1].count));
        assert_eq!(report.party_distribution[0].party, "Z");
    }

    #[test]
    fn test_first_occurrence_wins_ties() {
        let candidates = vec![
            candidate(1, "Ann", "abc", "PSD"),
            candidate(2, "Bob", "xyz", "PNL"),
        ];
        let report = compute_statistics(&candidates);
        assert_eq!(report.longest_description, "abc");
        assert_eq!(report.shortest_description, "abc");
        assert_eq!(report.longest_name, "Ann");
        assert_eq!(report.shortest_name, "Ann");
    }

    #[test]
    fn test_longest_and_shortest() {
        let candidates = vec![
            candidate(1, "Maria Popescu", "Technology expert.", "PSD"),
            candidate(2, "Ion Ionescu", "Former Minister of Health.", "PNL"),
            candidate(3, "Ana Vasilescu", "University professor.", "USR"),
            candidate(4, "Vlad Stoica", "Experienced lawyer.", "AUR"),
        ];
        let report = compute_statistics(&candidates);
        assert_eq!(report.longest_description, "Former Minister of Health.");
        assert_eq!(report.shortest_description, "Technology expert.");
        assert_eq!(report.longest_name, "Maria Popescu");
        assert_eq!(report.shortest_name, "Ion Ionescu");
    }

    #[test]
    fn test_lengths_count_characters() {
        let (longest, shortest) = length_extremes(["Forța", "PSDxx", "Ab"].into_iter());
        assert_eq!(longest, "Forța");
        assert_eq!(shortest, "Ab");
        assert_eq!(average_length(["ăîș"].into_iter()), 3);
    }

    #[test]
    fn test_average_rounds_half_up() {
        assert_eq!(average_length(["a", "bb"].into_iter()), 2);
        assert_eq!(average_length(["a", "b", "cc"].into_iter()), 1);
        assert_eq!(average_length(["abc", "abcd", "abcd"].into_iter()), 4);
        assert_eq!(average_length(std::iter::empty()), 0);

        let candidates = vec![candidate(1, "A", "a", "P"), candidate(2, "B", "bb", "P")];
        assert_eq!(compute_statistics(&candidates).avg_description_length, 2);
    }

    #[test]
    fn test_percentage_formatting() {
        assert_eq!(format_percentage(1, 3), "33.3");
        assert_eq!(format_percentage(2, 3), "66.7");
        assert_eq!(format_percentage(1, 1), "100.0");
        assert_eq!(format_percentage(1, 8), "12.5");
        assert_eq!(format_percentage(0, 0), "0.0");
    }

    #[test]
    fn test_percentage_follows_float_value() {
        // 23 / 80 * 100 lands just below 28.75 in binary.
        assert_eq!(format_percentage(23, 80), "28.7");
        assert_eq!(to_fixed_tenths(0.25), "0.3");
        assert_eq!(to_fixed_tenths(0.75), "0.8");
        assert_eq!(to_fixed_tenths(12.5), "12.5");
        assert_eq!(to_fixed_tenths(28.749999999999996), "28.7");
    }

    #[test]
    fn test_recent_candidates() {
        let candidates = by_party(&["A", "B", "C", "D", "E", "F", "G"]);
        let recent: Vec<_> = compute_statistics(&candidates).recent_candidates.iter().map(|c| c.id).collect();
        assert_eq!(recent, vec![7, 6, 5, 4, 3]);

        let candidates = by_party(&["A", "B"]);
        let recent: Vec<_> = compute_statistics(&candidates).recent_candidates.iter().map(|c| c.id).collect();
        assert_eq!(recent, vec![2, 1]);
    }

    #[test]
    fn test_idempotent() {
        let candidates = by_party(&["PSD", "PNL", "PSD"]);
        assert_eq!(compute_statistics(&candidates), compute_statistics(&candidates));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let json = serde_json::to_value(compute_statistics(&by_party(&["PSD"]))).unwrap();
        assert_eq!(json["totalCandidates"], 1);
        assert_eq!(json["mostCommonParty"], "PSD");
        assert_eq!(json["partyDistribution"][0]["percentage"], "100.0");
        assert!(json["recentCandidates"].is_array());
    }

    #[test]
    fn test_validation() {
        let payload = CandidatePayload {
            name: Some("Ana".into()),
            description: Some("Doctor.".into()),
            party: Some("USR".into()),
            image: Some("".into()),
        };
        let draft = validate_candidate(&payload).unwrap();
        assert_eq!(draft.name, "Ana");
        assert_eq!(draft.image, None);

        let payload = CandidatePayload { name: Some("Ana".into()), party: Some("".into()), ..Default::default() };
        assert_eq!(missing_fields(&payload), vec!["description", "party"]);
        let err = validate_candidate(&payload).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec!["description", "party"]));
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let payload = CandidatePayload {
            name: Some(" ".into()),
            description: Some("d".into()),
            party: Some("PSD".into()),
            image: Some(" ".into()),
        };
        assert!(missing_fields(&payload).is_empty());
        let draft = validate_candidate(&payload).unwrap();
        assert_eq!(draft.name, " ");
        assert_eq!(draft.image.as_deref(), Some(" "));
    }

    #[test]
    fn test_payload_accepts_missing_fields() {
        let payload: CandidatePayload = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ana"));
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_error_codes_map_to_http_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), 404);
        assert_eq!(ErrorCode::ValidationFailed.http_status(), 400);
        assert_eq!(ErrorCode::SystemError.http_status(), 500);

        let err = Error::with_details(ErrorCode::SystemError, "Internal server error", "lock poisoned");
        assert_eq!(err.to_response().message, "Internal server error");
        assert!(err.to_string().contains("lock poisoned"));
    }
}
