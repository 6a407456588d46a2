//! Partition properties of the splitter, exercised through the public API.

use csvpart::analyzer;
use csvpart::splitter::{self, SplitError, SplitOptions};

/// Builds a CSV with a header and `rows` numbered data rows.
fn numbered_csv(rows: usize) -> String {
    let mut content = String::from("id,value\n");
    for i in 0..rows {
        content.push_str(&format!("{},{}\n", i, i * 2));
    }
    content
}

#[test]
fn file_count_is_ceiling_of_rows_over_chunk() {
    for (rows, per_file, expected) in [(10, 3, 4), (10, 5, 2), (1, 500, 1), (7, 7, 1)] {
        let result = splitter::split(&numbered_csv(rows), &SplitOptions::new(per_file, true)).unwrap();
        assert_eq!(result.files.len(), expected, "{} rows / {} per file", rows, per_file);
    }
}

#[test]
fn every_part_but_the_last_is_full() {
    let result = splitter::split(&numbered_csv(10), &SplitOptions::new(3, true)).unwrap();

    let counts: Vec<usize> = result
        .files
        .iter()
        .map(|f| f.content.lines().count() - 1) // minus the repeated header
        .collect();
    assert_eq!(counts, vec![3, 3, 3, 1]);
}

#[test]
fn concatenated_parts_reconstruct_the_data_rows() {
    let content = numbered_csv(25);
    let original: Vec<&str> = content.lines().skip(1).collect();

    let result = splitter::split(&content, &SplitOptions::new(4, true)).unwrap();
    let mut reassembled = Vec::new();
    for file in &result.files {
        reassembled.extend(file.content.lines().skip(1));
    }

    assert_eq!(reassembled, original);
}

#[test]
fn header_is_verbatim_first_line_of_every_part() {
    let result = splitter::split(&numbered_csv(9), &SplitOptions::new(2, true)).unwrap();

    for file in &result.files {
        assert_eq!(file.content.lines().next(), Some("id,value"));
    }
}

#[test]
fn without_header_the_first_line_is_not_repeated() {
    let content = "first,row\nsecond,row\nthird,row\n";
    let result = splitter::split(content, &SplitOptions::new(1, false)).unwrap();

    assert_eq!(result.files.len(), 3);
    let firsts: Vec<&str> = result
        .files
        .iter()
        .filter(|f| f.content.contains("first,row"))
        .map(|f| f.name.as_str())
        .collect();
    assert_eq!(firsts, vec!["part_1_of_3.csv"]);
}

#[test]
fn header_only_document_fails_with_no_data_rows() {
    let result = splitter::split("id,value\n", &SplitOptions::new(2, true));
    assert_eq!(result, Err(SplitError::NoDataRows));
}

#[test]
fn all_blank_document_fails_with_empty_document() {
    let result = splitter::split("\n\n   \n", &SplitOptions::new(2, true));
    assert_eq!(result, Err(SplitError::EmptyDocument));
}

#[test]
fn documented_example_scenario() {
    let result = splitter::split("a,b\n1,2\n3,4\n5,6\n", &SplitOptions::new(2, true)).unwrap();

    assert_eq!(result.files.len(), 2);
    assert_eq!(result.files[0].name, "part_1_of_2.csv");
    assert_eq!(result.files[0].content, "a,b\n1,2\n3,4");
    assert_eq!(result.files[1].name, "part_2_of_2.csv");
    assert_eq!(result.files[1].content, "a,b\n5,6");
}

#[test]
fn analyzer_and_splitter_agree_on_row_counts() {
    let content = "h\n1\n\n2\n  \n3\n";
    let analysis = analyzer::analyze(content);
    let result = splitter::split(content, &SplitOptions::new(10, true)).unwrap();

    assert_eq!(analysis.total_rows, 4);
    assert_eq!(result.total_rows, analysis.total_rows);
}

#[test]
fn estimate_matches_split_across_option_combinations() {
    let content = numbered_csv(13);
    let analysis = analyzer::analyze(&content);

    for include_header in [true, false] {
        for per_file in [1, 2, 5, 13, 100] {
            let options = SplitOptions::new(per_file, include_header);
            let estimated = splitter::estimate_file_count(analysis.total_rows, &options);
            let actual = splitter::split(&content, &options).unwrap().files.len();
            assert_eq!(estimated, actual, "per_file={} header={}", per_file, include_header);
        }
    }
}
