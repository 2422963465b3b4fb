use crate::domain::models::JsonOut;
use serde::Serialize;

/// Pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Either the `{ ok, data }` envelope or one text line from `row`.
pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if !json {
        println!("{}", row(&data));
        return Ok(());
    }
    print_json(&JsonOut { ok: true, data })
}
