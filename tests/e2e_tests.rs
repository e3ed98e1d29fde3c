//! End-to-end integration tests
//!
//! These tests run the complete pipeline against sales logs written to a
//! temporary directory. Each test:
//! 1. Writes the input log
//! 2. Runs every stage with a fixed catalog (or the offline one)
//! 3. Inspects the returned outcome and the files written
//!
//! Scenarios cover:
//! - Happy path enrichment and report generation
//! - Malformed lines and invalid records
//! - Region and amount filters
//! - Degraded runs (missing input, no catalog, empty clean set)
//! - Export round trip through the parser

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_decimal::Decimal;
    use sales_analytics::config::{FilterOptions, PipelineConfig};
    use sales_analytics::core::CatalogSource;
    use sales_analytics::io::pipe_format::ENRICHED_HEADER;
    use sales_analytics::io::{parse_line, OfflineCatalog, StaticCatalog};
    use sales_analytics::pipeline::{PipelineOutcome, SalesPipeline};
    use sales_analytics::report::ReportStatus;
    use sales_analytics::types::CatalogProduct;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const HEADER: &str = "TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region";

    const SALES: &[&str] = &[
        "T1|2024-01-05|P101|Widget|3|100.00|C1|North",
        "T2|2024-01-05|P102|Gadget|5|20.00|C2|South",
        "T3|2024-01-06|P101|Widget|2|100.00|C2|North",
        "T4|2024-01-06|P103|Gizmo|12|5.00|C3|East",
        "T5|2024-01-06|P104|Lamp|1|2,500.00|C1|South",
    ];

    /// Run directory with an input log and output locations
    struct Workspace {
        dir: TempDir,
        config: PipelineConfig,
    }

    impl Workspace {
        fn with_input(content: &[u8]) -> Self {
            let dir = TempDir::new().expect("Failed to create temp dir");
            let input_path = dir.path().join("data").join("sales_data.txt");
            fs::create_dir_all(input_path.parent().unwrap()).unwrap();
            fs::write(&input_path, content).unwrap();

            let config = PipelineConfig {
                input_path,
                enriched_output_path: dir.path().join("data").join("enriched_sales_data.txt"),
                report_output_path: dir.path().join("output").join("sales_report.txt"),
                ..PipelineConfig::default()
            };
            Self { dir, config }
        }

        fn with_lines(lines: &[&str]) -> Self {
            let mut content = String::from(HEADER);
            for line in lines {
                content.push('\n');
                content.push_str(line);
            }
            content.push('\n');
            Self::with_input(content.as_bytes())
        }

        fn run(&self, catalog: Box<dyn CatalogSource>, mut filters: FilterOptions) -> PipelineOutcome {
            SalesPipeline::new(self.config.clone(), catalog)
                .run(&mut filters)
                .unwrap_or_else(|e| panic!("Pipeline failed: {}", e))
        }

        fn export(&self) -> String {
            fs::read_to_string(&self.config.enriched_output_path).expect("Export not written")
        }

        fn report_path(&self) -> PathBuf {
            self.config.report_output_path.clone()
        }
    }

    fn catalog() -> Box<dyn CatalogSource> {
        Box::new(StaticCatalog::new(vec![
            CatalogProduct {
                id: 101,
                category: Some("tools".to_string()),
                brand: Some("Acme".to_string()),
                rating: Some(4.5),
            },
            CatalogProduct {
                id: 103,
                category: Some("toys".to_string()),
                brand: None,
                rating: None,
            },
        ]))
    }

    #[test]
    fn test_single_record_is_parsed_and_enriched() {
        let ws = Workspace::with_lines(&["T1|2024-01-05|P101|Widget|3|100.00|C1|North"]);

        let outcome = ws.run(catalog(), FilterOptions::default());

        assert_eq!(outcome.summary.final_count, 1);
        assert_eq!(outcome.analytics.total_revenue, Decimal::new(300, 0));
        assert_eq!(outcome.matched, 1);
        assert_eq!(
            ws.export(),
            format!(
                "{}\nT1|2024-01-05|P101|Widget|3|100.00|C1|North|tools|Acme|4.5|True\n",
                ENRICHED_HEADER.join("|")
            )
        );
    }

    #[test]
    fn test_full_run_writes_export_and_report() {
        let ws = Workspace::with_lines(SALES);

        let outcome = ws.run(catalog(), FilterOptions::default());

        assert_eq!(outcome.lines_read, 5);
        assert_eq!(outcome.parsed_count, 5);
        assert_eq!(outcome.summary.final_count, 5);
        assert!(outcome.summary.is_balanced());
        assert_eq!(outcome.analytics.total_revenue, Decimal::new(3160, 0));
        assert_eq!(outcome.catalog_size, 2);
        assert_eq!(outcome.matched, 3);
        assert!(outcome.export_written);
        assert_eq!(outcome.report, ReportStatus::Written(ws.report_path()));

        let export = ws.export();
        let rows: Vec<&str> = export.lines().collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[4], "T4|2024-01-06|P103|Gizmo|12|5.00|C3|East|toys|None|None|True");
        assert_eq!(rows[5], "T5|2024-01-06|P104|Lamp|1|2500.00|C1|South|None|None|None|False");

        let report = fs::read_to_string(ws.report_path()).unwrap();
        assert!(report.contains("Total Revenue: ₹3,160.00"));
        assert!(report.contains("Success Rate: 60.00%"));
        assert!(report.contains("Products not enriched:\n- Gadget\n- Lamp\n"));
    }

    #[rstest]
    #[case::seven_fields("T9|2024-01-07|P101|Widget|3|100.00|C1")]
    #[case::nine_fields("T9|2024-01-07|P101|Widget|3|100.00|C1|North|extra")]
    #[case::text_quantity("T9|2024-01-07|P101|Widget|three|100.00|C1|North")]
    #[case::text_price("T9|2024-01-07|P101|Widget|3|free|C1|North")]
    #[case::amount_overflow("T9|2024-01-07|P101|Widget|9223372036854775807|99999999999|C1|North")]
    fn test_malformed_line_is_dropped(#[case] line: &str) {
        let ws = Workspace::with_lines(&[SALES[0], line]);

        let outcome = ws.run(catalog(), FilterOptions::default());

        assert_eq!(outcome.lines_read, 2);
        assert_eq!(outcome.parsed_count, 1);
        assert_eq!(outcome.summary.total_input, 1);
        assert!(!ws.export().contains("T9"));
    }

    #[rstest]
    #[case::zero_quantity("T9|2024-01-07|P101|Widget|0|100.00|C1|North")]
    #[case::negative_price("T9|2024-01-07|P101|Widget|1|-100.00|C1|North")]
    #[case::bad_customer("T9|2024-01-07|P101|Widget|1|100.00|X1|North")]
    fn test_invalid_record_is_counted(#[case] line: &str) {
        let ws = Workspace::with_lines(&[SALES[0], line]);

        let outcome = ws.run(catalog(), FilterOptions::default());

        assert_eq!(outcome.parsed_count, 2);
        assert_eq!(outcome.summary.invalid, 1);
        assert_eq!(outcome.summary.final_count, 1);
        assert!(!ws.export().contains("T9"));
    }

    #[test]
    fn test_empty_clean_set_skips_report_but_writes_header() {
        let ws = Workspace::with_lines(&["T1|2024-01-05|P101|Widget|0|100.00|C1|North"]);

        let outcome = ws.run(catalog(), FilterOptions::default());

        assert_eq!(outcome.summary.invalid, 1);
        assert_eq!(outcome.summary.final_count, 0);
        assert_eq!(outcome.report, ReportStatus::Skipped);
        assert!(!ws.report_path().exists());
        assert_eq!(ws.export(), format!("{}\n", ENRICHED_HEADER.join("|")));
    }

    #[test]
    fn test_missing_input_degrades_to_empty_run() {
        let ws = Workspace::with_lines(SALES);
        fs::remove_file(&ws.config.input_path).unwrap();

        let outcome = ws.run(catalog(), FilterOptions::default());

        assert_eq!(outcome.lines_read, 0);
        assert_eq!(outcome.report, ReportStatus::Skipped);
        assert_eq!(ws.export().lines().count(), 1);
    }

    #[test]
    fn test_offline_catalog_leaves_everything_unmatched() {
        let ws = Workspace::with_lines(SALES);

        let outcome = ws.run(Box::new(OfflineCatalog), FilterOptions::default());

        assert_eq!(outcome.catalog_size, 0);
        assert_eq!(outcome.matched, 0);
        assert!(ws.export().lines().skip(1).all(|row| row.ends_with("|None|None|None|False")));
        let report = fs::read_to_string(ws.report_path()).unwrap();
        assert!(report.contains("Total Products Enriched: 0"));
    }

    #[rstest]
    #[case::region(FilterOptions { region: Some("South".to_string()), ..Default::default() }, 3, 0, vec!["T2", "T5"])]
    #[case::min_amount(FilterOptions { min_amount: Some(Decimal::new(200, 0)), ..Default::default() }, 0, 2, vec!["T1", "T3", "T5"])]
    #[case::max_amount(FilterOptions { max_amount: Some(Decimal::new(100, 0)), ..Default::default() }, 0, 3, vec!["T2", "T4"])]
    #[case::zero_max(FilterOptions { max_amount: Some(Decimal::ZERO), ..Default::default() }, 0, 5, vec![])]
    fn test_filters_partition_input(
        #[case] filters: FilterOptions,
        #[case] by_region: usize,
        #[case] by_amount: usize,
        #[case] expected_ids: Vec<&str>,
    ) {
        let ws = Workspace::with_lines(SALES);

        let outcome = ws.run(catalog(), filters);

        assert_eq!(outcome.summary.filtered_by_region, by_region);
        assert_eq!(outcome.summary.filtered_by_amount, by_amount);
        assert_eq!(outcome.summary.final_count, expected_ids.len());
        assert!(outcome.summary.is_balanced());

        let ids: Vec<String> = ws
            .export()
            .lines()
            .skip(1)
            .map(|row| row.split('|').next().unwrap().to_string())
            .collect();
        assert_eq!(ids, expected_ids);
    }

    #[test]
    fn test_export_rows_parse_back_to_records() {
        let ws = Workspace::with_lines(SALES);
        ws.run(catalog(), FilterOptions::default());

        for (row, original) in ws.export().lines().skip(1).zip(SALES) {
            let core: Vec<&str> = row.split('|').take(8).collect();
            let reparsed = parse_line(&core.join("|")).expect("Export row should parse");
            let expected = parse_line(original).unwrap();
            assert_eq!(reparsed, expected);
        }
    }

    #[test]
    fn test_windows_1252_input_with_crlf() {
        let mut content = b"TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region\r\n".to_vec();
        content.extend_from_slice(b"T1|2024-01-05|P101|Caf\xe9 Mug|2|50.00|C1|North\r\n\r\n");
        let ws = Workspace::with_input(&content);

        let outcome = ws.run(catalog(), FilterOptions::default());

        assert_eq!(outcome.summary.final_count, 1);
        assert!(ws.export().contains("|Café Mug|"));
    }

    #[test]
    fn test_rerun_overwrites_outputs() {
        let ws = Workspace::with_lines(SALES);
        ws.run(catalog(), FilterOptions::default());
        let first = ws.export();

        let outcome = ws.run(
            catalog(),
            FilterOptions {
                region: Some("East".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(outcome.summary.final_count, 1);
        assert_ne!(ws.export(), first);
        assert_eq!(ws.export().lines().count(), 2);
        assert!(ws.dir.path().join("output").exists());
    }
}
