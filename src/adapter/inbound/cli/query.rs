//! Handlers for the `apps` and `tasks` commands.

use std::io::Write;

use serde::Serialize;

use crate::domain::AppId;
use crate::port::MarathonApi;

/// Print every application as a JSON array.
pub async fn apps<W: Write>(client: &dyn MarathonApi, out: &mut W) -> anyhow::Result<()> {
    let apps = client.apps().await?;
    write_json(out, &apps)
}

/// Print the tasks of `app` as a JSON array.
pub async fn tasks<W: Write>(
    client: &dyn MarathonApi,
    app: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let tasks = client.tasks(&AppId::new(app)).await?;
    write_json(out, &tasks)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, records: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}
