use super::exit_codes;
use super::report;
use crate::cli::args::{DeleteArgs, FormArgs, ListArgs, ShowArgs, UpdateArgs};
use fakultas_core::report::{console, json};
use fakultas_core::{RecordController, RecordForm};

/// The name is trimmed here; the controller only rejects an empty string.
fn to_form(args: FormArgs) -> RecordForm {
    RecordForm::new(args.name.trim(), args.biologi, args.fisika, args.inggris)
}

pub fn cmd_list(ctl: &RecordController, args: ListArgs) -> anyhow::Result<i32> {
    if args.out.is_some() && args.format != "json" {
        eprintln!("error: --out requires --format json");
        return Ok(exit_codes::INVALID_INPUT);
    }

    let records = match ctl.list_all() {
        Ok(r) => r,
        Err(e) => return report(e),
    };

    match args.format.as_str() {
        "json" => {
            if let Some(out) = &args.out {
                json::write_json(&records, out)?;
                eprintln!("wrote file: {}", out.display());
            } else {
                println!("{}", json::to_json(&records)?);
            }
        }
        "text" => console::print_table(&records),
        other => {
            eprintln!("error: unknown format '{other}' (expected text|json)");
            return Ok(exit_codes::INVALID_INPUT);
        }
    }
    Ok(exit_codes::OK)
}

pub fn cmd_show(ctl: &RecordController, args: ShowArgs) -> anyhow::Result<i32> {
    match ctl.select(args.id) {
        Ok(form) => {
            print!("{}", console::render_form(args.id, &form));
            Ok(exit_codes::OK)
        }
        Err(e) => report(e),
    }
}

pub fn cmd_add(ctl: &RecordController, args: FormArgs) -> anyhow::Result<i32> {
    match ctl.create(&to_form(args)) {
        Ok(out) => {
            eprintln!(
                "Data berhasil disimpan (id {}). Prediksi fakultas: {}",
                out.value.id, out.value.prediction
            );
            console::print_table(&out.records);
            Ok(exit_codes::OK)
        }
        Err(e) => report(e),
    }
}

pub fn cmd_update(ctl: &RecordController, args: UpdateArgs) -> anyhow::Result<i32> {
    match ctl.update(args.id, &to_form(args.form)) {
        Ok(out) => {
            if out.value.affected == 0 {
                eprintln!("note: no record with id {} (nothing changed)", out.value.id);
            } else {
                eprintln!(
                    "Data berhasil diperbarui (id {}). Prediksi fakultas: {}",
                    out.value.id, out.value.prediction
                );
            }
            console::print_table(&out.records);
            Ok(exit_codes::OK)
        }
        Err(e) => report(e),
    }
}

pub fn cmd_delete(ctl: &RecordController, args: DeleteArgs) -> anyhow::Result<i32> {
    match ctl.delete(args.id) {
        Ok(out) => {
            if out.value.affected == 0 {
                eprintln!("note: no record with id {} (nothing changed)", out.value.id);
            } else {
                eprintln!("Data berhasil dihapus (id {}).", out.value.id);
            }
            console::print_table(&out.records);
            Ok(exit_codes::OK)
        }
        Err(e) => report(e),
    }
}
