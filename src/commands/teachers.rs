use crate::db::teachers::Teachers;
use crate::libs::view::View;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let teachers = Teachers::new()?.list()?;
    View::teachers(&teachers)?;
    Ok(())
}
