use crate::model::{score_text, RecordForm, StudentRecord};

/// Headings in persisted column order.
pub const HEADINGS: [&str; 6] = [
    "Id",
    "Nama_siswa",
    "Biologi",
    "Fisika",
    "Inggris",
    "Prediksi_fakultas",
];

pub fn render_table(records: &[StudentRecord]) -> String {
    let rows: Vec<[String; 6]> = records
        .iter()
        .map(|r| {
            [
                r.id.to_string(),
                r.name.clone(),
                score_text(r.biology),
                score_text(r.physics),
                score_text(r.english),
                r.predicted_faculty.clone(),
            ]
        })
        .collect();

    let mut widths = HEADINGS.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADINGS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<w$}", c, w = *w))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

pub fn print_table(records: &[StudentRecord]) {
    print!("{}", render_table(records));
    eprintln!("{} record(s)", records.len());
}

pub fn render_form(id: i64, form: &RecordForm) -> String {
    format!(
        "id: {}\nnama_siswa: {}\nbiologi: {}\nfisika: {}\ninggris: {}\n",
        id, form.name, form.biology, form.physics, form.english
    )
}
