use std::path::{Path, PathBuf};

use tabled::Table;

use crate::{Res, error, info, management::TableManager, success, timeline, types::TimelineRecord};

/// Reshapes the album table in `input` into a Gantt timeline in `output`.
pub async fn gantt(input: PathBuf, output: PathBuf) {
    let rows = match load_timeline(&input).await {
        Ok(rows) => rows,
        Err(e) => error!("Cannot build timeline from {}. Err: {}", input.display(), e),
    };

    let table = TableManager::new(output, rows);
    if let Err(e) = table.persist().await {
        error!("Failed to write timeline. Err: {}", e);
    }

    println!("{}", Table::new(table.rows().to_vec()));
    success!("Gantt chart data saved to: {}", table.path().display());
}

async fn load_timeline(input: &Path) -> Res<Vec<TimelineRecord>> {
    let content = async_fs::read_to_string(input).await?;

    if let Ok(columns) = timeline::columns(&content) {
        info!("Columns in the CSV: {}", columns.join(", "));
    }

    Ok(timeline::reshape(&content)?)
}
