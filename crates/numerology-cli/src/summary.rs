use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use numerology_core::reduce::is_master;
use numerology_model::{Figure, NumerologyResult, RecapAges};

pub fn print_summary(result: &NumerologyResult) {
    let inputs = &result.inputs;
    println!("Birth date: {}", inputs.birth_date);
    if let Some(place) = &inputs.birth_place {
        println!("Birth place: {place}");
    }
    println!("Personal year target: {}", inputs.target_year);
    println!("{}", figures_table(result));
    println!();
    println!("Periods:");
    println!("{}", periods_table(result));
    if !result.y_rule.overrides_applied.is_empty() {
        let applied: Vec<String> = result
            .y_rule
            .overrides_applied
            .iter()
            .map(|entry| format!("{} ({})", entry.token, entry.mode))
            .collect();
        println!("Y overrides applied: {}", applied.join(", "));
    }
    if let Some(debug) = &result.debug {
        println!();
        println!("Letters:");
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Token"),
            header_cell("Sum"),
            header_cell("Vowels"),
            header_cell("Sum"),
            header_cell("Consonants"),
            header_cell("Sum"),
            header_cell("Y override"),
        ]);
        apply_table_style(&mut table);
        for column in [1, 3, 5] {
            align_column(&mut table, column, CellAlignment::Right);
        }
        for token in &debug.birth_tokens {
            table.add_row(vec![
                Cell::new(&token.token).add_attribute(Attribute::Bold),
                Cell::new(token.sum_all),
                Cell::new(token.vowels.iter().collect::<String>()),
                Cell::new(token.sum_vowels),
                Cell::new(token.consonants.iter().collect::<String>()),
                Cell::new(token.sum_consonants),
                token
                    .y_override
                    .map_or_else(|| dim_cell("-"), Cell::new),
            ]);
        }
        println!("{table}");
    }
}

/// One row per name and date figure.
pub fn figures_table(result: &NumerologyResult) -> Table {
    let computed = &result.computed;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Figure"),
        header_cell("Total"),
        header_cell("Value"),
        header_cell("Note"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);

    let mut add = |label: &str, figure: &Figure, note: Option<String>| {
        table.add_row(vec![
            label_cell(label),
            Cell::new(figure.total),
            figure_cell(figure),
            note_cell(note),
        ]);
    };
    add("Life path", &computed.life_path, None);
    add("Expression", &computed.expression, None);
    add("Resource", &computed.resource, None);
    add("Active", &computed.active, None);
    add("Hereditary", &computed.hereditary, None);
    add("Inner self", &computed.inner_self, None);
    add("Realization", &computed.realization, None);
    add("Spiritual drive", &computed.spiritual_drive, None);
    add("Expression challenge", &computed.expression_challenge, None);
    add("Soul lesson", &computed.soul_lesson, None);
    if let Some(marital) = &computed.marital_name {
        add("Marital name", marital, None);
    }

    let inner = &computed.inner_self_challenge;
    let inner_note = if inner.missing_consonants {
        "no consonants".to_string()
    } else {
        format!(
            "first {} / last {}",
            inner.first.unwrap_or('-'),
            inner.last.unwrap_or('-')
        )
    };
    add(
        "Inner-self challenge",
        &Figure::new(inner.total, inner.reduced),
        Some(inner_note),
    );
    let drive = &computed.spiritual_drive_challenge;
    add(
        "Drive challenge",
        &Figure::new(drive.total, drive.reduced),
        drive
            .missing_consonants
            .then(|| "no consonants".to_string()),
    );
    let balance = &computed.balance;
    add(
        "Balance",
        &Figure::new(balance.total, balance.reduced),
        Some(format!("letters {}", balance.letters.iter().collect::<String>())),
    );
    let personal = &computed.personal_year;
    add(
        "Personal year",
        &Figure::new(personal.total, personal.reduced),
        Some(format!("for {}", personal.target_year)),
    );
    table.add_row(vec![
        label_cell("Key year"),
        dim_cell("-"),
        Cell::new(computed.key_year.year).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Cycles, acts, and challenges with their start ages.
pub fn periods_table(result: &NumerologyResult) -> Table {
    let settings = &result.computed.life_settings;
    let acts = &result.computed.life_acts;
    let challenges = &result.computed.challenges;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Period"),
        header_cell("Value"),
        header_cell("Starts at"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);

    let rows = [
        ("Formative cycle", settings.formative_cycle, None),
        ("Productive cycle", settings.productive_cycle, Some(settings.ages.cycle2)),
        ("Harvest cycle", settings.harvest_cycle.reduced, Some(settings.ages.cycle3)),
        ("Act 1", acts.act1, None),
        ("Act 2", acts.act2, Some(acts.ages.act2)),
        ("Act 3", acts.act3, Some(acts.ages.act3)),
        ("Act 4", acts.act4, Some(acts.ages.act4)),
        ("First challenge", challenges.first, None),
        ("Second challenge", challenges.second, None),
        ("Major challenge", challenges.major, None),
    ];
    for (label, value, start) in rows {
        table.add_row(vec![
            label_cell(label),
            value_cell(value),
            start.map_or_else(|| dim_cell("-"), |age| Cell::new(format!("{age} years"))),
        ]);
    }
    table
}

/// The act and cycle start-age table keyed by life path.
pub fn recap_table_view(rows: &[RecapAges]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Life path"),
        header_cell("Act 2"),
        header_cell("Act 3"),
        header_cell("Act 4"),
        header_cell("Cycle 2"),
        header_cell("Cycle 3"),
    ]);
    apply_table_style(&mut table);
    for column in 1..=5 {
        align_column(&mut table, column, CellAlignment::Right);
    }
    for row in rows {
        table.add_row(vec![
            label_cell(row.key.as_str()),
            Cell::new(row.acts.act2),
            Cell::new(row.acts.act3),
            Cell::new(row.acts.act4),
            Cell::new(row.cycles.cycle2),
            Cell::new(row.cycles.cycle3),
        ]);
    }
    table
}

/// Every non-empty trace under its key, separated by blank lines.
pub fn render_traces(result: &NumerologyResult) -> String {
    let mut out = String::new();
    for (key, trace) in result.traces.entries() {
        if trace.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(key);
        out.push_str(":\n");
        for line in trace.lines() {
            out.push_str("  ");
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn figure_cell(figure: &Figure) -> Cell {
    if figure.is_karmic() {
        Cell::new(figure.display_value())
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        value_cell(figure.reduced)
    }
}

fn value_cell(value: u32) -> Cell {
    if is_master(value) {
        Cell::new(value)
            .fg(Color::Magenta)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(value)
    }
}

fn note_cell(note: Option<String>) -> Cell {
    match note {
        Some(note) => Cell::new(note),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
