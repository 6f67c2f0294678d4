//! Rendering tests for the terminal summary.

use insta::assert_snapshot;

use numerology_cli::summary::{figures_table, periods_table, recap_table_view, render_traces};
use numerology_core::{compute_numerology, recap_table};
use numerology_model::{BirthRecord, ComputeOptions, NumerologyResult};

fn jean_dupont() -> NumerologyResult {
    let record = BirthRecord::new("Jean", "Dupont", "15/06/1990");
    compute_numerology(&record, &ComputeOptions::new().with_target_year(2026)).unwrap()
}

#[test]
fn traces_are_grouped_by_key() {
    let rendered = render_traces(&jean_dupont());
    assert!(rendered.starts_with("life_path:\n  DD = 15\n"));
    assert!(rendered.contains("\nexpression:\n  FULL BIRTH NAME = JEANDUPONT\n"));
    // no marital name, no marital section
    assert!(!rendered.contains("marital_name:"));
    let (_, tail) = rendered.split_once("key_year:").unwrap();
    let section = format!("key_year:{}", tail.trim_end());
    assert_snapshot!(section, @r"
    key_year:
      Day+Month = 15+6 = 21
      (Day+Month)+Birth year = 21+1990 = 2011
    ");
}

#[test]
fn marital_section_appears_when_present() {
    let record =
        BirthRecord::new("Jean", "Dupont", "15/06/1990").with_marital_name("Martin");
    let result = compute_numerology(&record, &ComputeOptions::new().with_target_year(2026)).unwrap();
    let rendered = render_traces(&result);
    assert!(rendered.contains("marital_name:\n  MARITAL NAME = MARTIN\n"));
    assert!(figures_table(&result).to_string().contains("Marital name"));
}

#[test]
fn figures_table_lists_every_figure() {
    let result = jean_dupont();
    let table = figures_table(&result);
    let rendered = table.to_string();
    for label in [
        "Life path",
        "Expression",
        "Resource",
        "Active",
        "Hereditary",
        "Inner self",
        "Realization",
        "Spiritual drive",
        "Expression challenge",
        "Soul lesson",
        "Inner-self challenge",
        "Drive challenge",
        "Balance",
        "Personal year",
        "Key year",
    ] {
        assert!(rendered.contains(label), "missing row {label}");
    }
    assert_eq!(table.row_iter().count(), 15);
    assert!(rendered.contains("first J / last T"));
    assert!(rendered.contains("for 2026"));
    assert!(rendered.contains("2011"));
}

#[test]
fn karmic_figures_show_pair() {
    let record = BirthRecord::new("Anne", "Dupont", "15/06/1990");
    let result = compute_numerology(&record, &ComputeOptions::new().with_target_year(2026)).unwrap();
    assert!(figures_table(&result).to_string().contains("16/7"));
}

#[test]
fn periods_table_shows_start_ages() {
    let rendered = periods_table(&jean_dupont()).to_string();
    assert!(rendered.contains("Productive cycle"));
    assert!(rendered.contains("24 years"));
    assert!(rendered.contains("60 years"));
    assert!(rendered.contains("32 years"));
    assert!(rendered.contains("41 years"));
    assert!(rendered.contains("50 years"));
    assert!(rendered.contains("Major challenge"));
}

#[test]
fn recap_view_has_one_row_per_key() {
    let rows = recap_table().unwrap();
    let table = recap_table_view(&rows);
    assert_eq!(table.row_iter().count(), 9);
    let rendered = table.to_string();
    assert!(rendered.contains("2/11"));
    assert!(rendered.contains("8/44"));
}
