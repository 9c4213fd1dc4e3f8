use std::io::{self, Write};

use af_metrics::{ModelReport, PredictionReport, ScoreStatus, Tally, TableUpdate};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_prediction_info(report: &PredictionReport, update: &TableUpdate) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let info = &report.info;
    let mut rows = vec![
        ("Prediction", info.prediction_name.clone()),
        ("Chain A Length", info.chain_a_length.to_string()),
        ("Chain B Length", info.chain_b_length.to_string()),
    ];
    if let Some(project) = &info.project_name {
        rows.insert(0, ("Project", project.clone()));
    }
    rows.push(("Rows Appended", update.appended.to_string()));
    if update.replaced > 0 {
        rows.push(("Rows Replaced", update.replaced.to_string()));
    }
    rows.push((
        "Table Rows",
        format!("{} ({} passing)", update.total_rows, update.filtered_rows),
    ));

    print_kv_table(&mut out, "Prediction Summary", &rows);
}

pub fn print_model_table(models: &[ModelReport]) {
    if models.is_empty() {
        return;
    }

    let stderr = io::stderr();
    let mut out = stderr.lock();

    let widths = [9usize, 6, 5, 5, 5, 6];
    let border = |left: &str, mid: &str, right: &str| {
        let cells: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}{}", INDENT, left, cells.join(mid), right)
    };

    let _ = writeln!(out, "{}┌─ Ranked Models ─┐", INDENT);
    let _ = writeln!(out, "{}", border("┌", "┬", "┐"));
    let _ = writeln!(
        out,
        "{}│ {:<9} │ {:>6} │ {:>5} │ {:>5} │ {:>5} │ {:>6} │",
        INDENT, "Model", "Score", "pTM", "ipTM", "pLDDT", "pDockQ"
    );
    let _ = writeln!(out, "{}", border("├", "┼", "┤"));

    for model in models {
        let scores = model.scores.scores();
        let marker = if model.relabeled { "*" } else { "" };
        let _ = writeln!(
            out,
            "{}│ {:<9} │ {:>6} │ {:>5} │ {:>5} │ {:>5} │ {:>6} │",
            INDENT,
            truncate(&format!("{}{}", model.model_id, marker), 9),
            fmt_score(model.confidence, 3),
            fmt_score(scores.ptm, 2),
            fmt_score(scores.iptm, 2),
            fmt_score(model.mean_plddt(), 1),
            fmt_score(model.pdockq(), 3),
        );
    }

    let _ = writeln!(out, "{}", border("└", "┴", "┘"));

    if models.iter().any(|m| m.relabeled) {
        let _ = writeln!(out, "{}* partner chains merged onto A/B", INDENT);
    }
    if models.iter().any(|m| m.scores == ScoreStatus::Unavailable) {
        let _ = writeln!(out, "{}pTM/ipTM missing: result files not found", INDENT);
    }
}

pub fn print_tally_table(column: &str, tallies: &[Tally], min_count: usize) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let count_w = 8usize;
    let sep_overhead = 5;
    let value_w = SAFE_TABLE_WIDTH.saturating_sub(count_w + sep_overhead);

    let title = format!("{} (count ≥ {})", column, min_count);
    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(&title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{v_line}┬{c_line}┐",
        INDENT,
        v_line = "─".repeat(value_w + 2),
        c_line = "─".repeat(count_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<value_w$} │ {:>count_w$} │",
        INDENT,
        "Value",
        "Count",
        value_w = value_w,
        count_w = count_w
    );
    let _ = writeln!(
        out,
        "{}├{v_line}┼{c_line}┤",
        INDENT,
        v_line = "─".repeat(value_w + 2),
        c_line = "─".repeat(count_w + 2)
    );

    for tally in tallies {
        let _ = writeln!(
            out,
            "{}│ {:<value_w$} │ {:>count_w$} │",
            INDENT,
            truncate(&tally.value, value_w),
            tally.count,
            value_w = value_w,
            count_w = count_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{v_line}┴{c_line}┘",
        INDENT,
        v_line = "─".repeat(value_w + 2),
        c_line = "─".repeat(count_w + 2)
    );
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}

fn fmt_score(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", precision, v),
        None => "–".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_scores_render_as_dash() {
        assert_eq!(fmt_score(None, 3), "–");
        assert_eq!(fmt_score(Some(0.83129), 3), "0.831");
        assert_eq!(fmt_score(Some(0.5), 2), "0.50");
    }
}
