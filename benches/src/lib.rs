//! Synthetic feed documents for the kursd benchmarks.

/// Builds a feed document with `count` currency blocks.
///
/// Values carry the feed's comma decimal separator so parsing exercises the
/// same normalization as real documents.
#[must_use]
pub fn synthetic_feed(count: usize) -> String {
    let mut doc = String::from(
        r#"<?xml version="1.0" encoding="windows-1251"?><ValCurs Date="15.01.2024" name="Foreign Currency Market">"#,
    );

    for index in 0..count {
        let value = format!("{:.4}", 50.0 + index as f64 * 0.25).replace('.', ",");
        doc.push_str(&format!(
            "<Valute ID=\"R{index:05}\"><NumCode>{index:03}</NumCode><CharCode>C{index:02}</CharCode><Nominal>1</Nominal><Name>Валюта {index}</Name><Value>{value}</Value></Valute>"
        ));
    }

    doc.push_str("</ValCurs>");
    doc
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use kursd_feed::parse_snapshot;

    use super::*;

    #[test]
    fn test_synthetic_feed_parses_fully() {
        let doc = synthetic_feed(25);
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();

        let snapshot = parse_snapshot(&doc, date);
        assert_eq!(snapshot.records.len(), 25);
        assert_eq!(snapshot.records[0].code, "C00");
        assert_eq!(snapshot.records[0].value, 50.0);
    }
}
